//! Connect Four
//!
//! A two-player Connect Four game for the text terminal.
//!
//! # Overview
//!
//! Players take turns dropping discs into a 7-column, 6-row grid. Discs
//! fall to the lowest free cell of the chosen column, and the first player
//! to line up four of their discs wins.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn order and game-over logic
//! - [`models`] - Board grid, cells, marks, players and errors
//! - [`services`] - The terminal game loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of the board and announcements
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use connect_four::models::constants::Mark;
//! use connect_four::models::player::Player;
//! use connect_four::GameEngine;
//!
//! let mut engine = GameEngine::new(
//!     Player::new("Player 1", Mark::Red),
//!     Player::new("Player 2", Mark::Yellow),
//! )
//! .unwrap();
//!
//! let mut output: Vec<String> = Vec::new();
//! engine.play(3, &mut output);
//! assert!(!engine.is_over());
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameState, MoveOutcome};
