//! # dice21
//!
//! A two-player dice accumulation game ("21"), split into pure game logic and
//! a thin console layer.
//!
//! ## Design Principles
//!
//! 1. **No global state**: players live in a `GameState` value that the turn
//!    controller threads through every call.
//!
//! 2. **Injectable dice**: every roll goes through `DieSource`. Games use a
//!    seeded `GameRng`; tests script exact faces with `ScriptedDice`.
//!
//! 3. **I/O at the edge**: `Console` works over any `BufRead`/`Write` pair, so
//!    whole games run against in-memory buffers.
//!
//! ## Modules
//!
//! - `core`: Players, state, turn records, dice, configuration
//! - `rules`: Winner/tie decision
//! - `console`: Prompts, roll announcements, final report
//! - `games`: The turn controller
//! - `error`: Library error type

pub mod core;
pub mod rules;
pub mod console;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, PlayerMap, RollOutcome,
    DieSource, GameRng, GameRngState, ScriptedDice,
    GameConfig,
    Decision, TurnRecord,
    GameState,
};

pub use crate::rules::GameResult;

pub use crate::console::Console;

pub use crate::games::twenty_one::{GameSummary, TwentyOne};

pub use crate::error::GameError;
