//! Shared types for hatfinder: board models and the per-turn protocol between the
//! input loop and the game field.

pub mod models;
pub mod protocol;
