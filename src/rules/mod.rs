//! Win/tie decision for finished games.
//!
//! Kept free of I/O so the console only has to print what this decides.

pub mod engine;

pub use engine::GameResult;
