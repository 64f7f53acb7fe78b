//! Game configuration.
//!
//! `GameConfig` fixes the rules a game is played under: the score a player
//! may reach without busting, the die being rolled, and optionally the seed
//! for the random source. The defaults are the classic game: a d6 and a
//! target of 21.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::error::GameError;

/// Highest score a player may hold without busting.
pub const DEFAULT_TARGET: u32 = 21;

/// Faces on the default die.
pub const DEFAULT_DIE_SIDES: u32 = 6;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// A total above this busts the player.
    pub target: u32,

    /// Faces on the die; rolls are uniform in `1..=die_sides`.
    pub die_sides: u32,

    /// Seed for [`GameConfig::rng`]. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            die_sides: DEFAULT_DIE_SIDES,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the bust threshold.
    #[must_use]
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    /// Set the number of faces on the die.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        self.die_sides = sides;
        self
    }

    /// Fix the seed so games are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that a game can actually be played with these settings.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.target == 0 {
            return Err(GameError::InvalidConfig(
                "target must be at least 1".to_string(),
            ));
        }
        if self.die_sides < 2 {
            return Err(GameError::InvalidConfig(format!(
                "a die needs at least 2 sides, got {}",
                self.die_sides
            )));
        }
        if self.target.checked_add(self.die_sides).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "target {} plus a d{} does not fit in a score",
                self.target, self.die_sides
            )));
        }
        Ok(())
    }

    /// Build the random source this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
