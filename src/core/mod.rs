//! Core game types: players, state, turn records, dice, configuration.
//!
//! Nothing in here does I/O. The turn controller in `games::twenty_one`
//! drives these types through a `Console`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap, RollOutcome};
pub use rng::{DieSource, GameRng, GameRngState, ScriptedDice};
pub use config::{GameConfig, DEFAULT_DIE_SIDES, DEFAULT_TARGET, PLAYER_COUNT};
pub use action::{Decision, TurnRecord};
pub use state::GameState;
