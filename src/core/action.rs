//! What happened on a turn.
//!
//! A turn is always one roll, followed by a decision if the roll did not
//! bust. `TurnRecord` captures both so a finished game can be replayed or
//! inspected without re-running the console.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, RollOutcome};

/// A player's answer to "keep rolling?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    KeepRolling,
    Stop,
}

impl Decision {
    /// Map a yes/no answer to a decision.
    #[must_use]
    pub fn from_answer(keep_rolling: bool) -> Self {
        if keep_rolling {
            Decision::KeepRolling
        } else {
            Decision::Stop
        }
    }
}

/// A recorded turn with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who rolled.
    pub player: PlayerId,

    /// Round the turn was played in (starts at 1).
    pub round: u32,

    /// The roll, with the pre-reset total on a bust.
    pub roll: RollOutcome,

    /// The answer given after the roll. `None` when the roll busted and no
    /// question was asked.
    pub decision: Option<Decision>,
}

impl TurnRecord {
    #[must_use]
    pub fn new(player: PlayerId, round: u32, roll: RollOutcome, decision: Option<Decision>) -> Self {
        Self {
            player,
            round,
            roll,
            decision,
        }
    }
}
