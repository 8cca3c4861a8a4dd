//! Domain models
//!
//! Cells, marks, players and the board grid. The board owns all placement
//! and win-detection rules; everything else here is plain data.

pub mod board;
pub mod constants;
pub mod errors;
pub mod player;
