//! Deciding who won.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has a strictly higher score than everyone else.
    Winner(PlayerId),
    /// The best score is shared.
    Tie,
}

impl GameResult {
    /// Decide a finished game. Returns `None` while anyone is still rolling.
    #[must_use]
    pub fn from_state(state: &GameState) -> Option<Self> {
        state.is_over().then(|| Self::compare(state))
    }

    /// Compare current scores, finished or not.
    ///
    /// Busted players hold 0, so they can only tie with each other or with a
    /// player who stopped at 0.
    #[must_use]
    pub fn compare(state: &GameState) -> Self {
        let best = state.players.iter().map(|(_, p)| p.score()).max().unwrap_or(0);
        let mut leaders = state
            .players
            .iter()
            .filter(|(_, p)| p.score() == best)
            .map(|(id, _)| id);

        match (leaders.next(), leaders.next()) {
            (Some(winner), None) => GameResult::Winner(winner),
            _ => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
