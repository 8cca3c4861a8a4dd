//! Game services
//!
//! The terminal driver that turns typed columns into engine moves.

pub mod game;
