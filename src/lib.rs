//! Find the hat: a terminal grid game.
//!
//! The player starts somewhere on a rectangular board and walks one tile at a time
//! looking for the hat. Holes are scattered around the board; stepping into one, or
//! off the edge, ends the game.
//!
//! [`logic::GameField`] owns the board and resolves moves. [`session::Session`] runs
//! the turn loop against anything implementing [`console::LineReader`] and
//! [`console::Screen`], and [`console::Terminal`] is the real stdin/stdout pair.

pub mod config;
pub mod console;
pub mod data;
pub mod logic;
pub mod session;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
