//! User interface and presentation
//!
//! Presenters format the board and game announcements, keeping text out of
//! the engine and the board.

pub mod presenters;
