//! "21": a two-player dice accumulation game.
//!
//! - Players take turns in seat order, rolling one die per turn
//! - Each roll adds to the roller's score
//! - After a roll the player chooses to keep rolling or stop
//! - Going over 21 busts: score drops to 0 and the player is out
//! - When both players are out, the higher score wins; equal scores tie

mod game;

pub use game::{GameSummary, TwentyOne};
