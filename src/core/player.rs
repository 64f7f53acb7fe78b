//! Players: seat identifiers, per-seat storage, and the score accumulator.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seat 0 rolls first in every round.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//!
//! ## Player
//!
//! A named score accumulator. Rolling adds the die to the score; going over
//! the target busts the player, which zeroes the score and takes them out of
//! the game in one step.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::config::GameConfig;
use super::rng::DieSource;

/// Seat identifier. Seats are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use dice21::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new(2, |_| 0);
/// scores[PlayerId::new(1)] = 10;
///
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// assert_eq!(scores[PlayerId::new(1)], 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, mut factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Result of a single roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Face that came up.
    pub die: u32,
    /// Running total including this die, before any bust reset.
    ///
    /// On a bust this is the losing total (e.g. 22), while the player's
    /// stored score is already 0.
    pub score: u32,
    /// The roll took the total over the target.
    pub busted: bool,
}

/// A named score accumulator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    in_game: bool,
    /// Dice accumulated into `score` since the start or the last bust.
    dice: SmallVec<[u32; 8]>,
}

impl Player {
    /// Create a player with a zero score who is still in the game.
    ///
    /// Names are taken as-is, including empty ones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            in_game: true,
            dice: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current score. Always 0 after a bust.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn in_game(&self) -> bool {
        self.in_game
    }

    /// Dice that make up the current score.
    #[must_use]
    pub fn dice(&self) -> &[u32] {
        &self.dice
    }

    /// Roll one die and add it to the score.
    ///
    /// If the new total exceeds `config.target`, the score is reset to 0 and
    /// the player leaves the game before this returns. The returned outcome
    /// still carries the pre-reset total.
    pub fn roll<D: DieSource + ?Sized>(&mut self, dice: &mut D, config: &GameConfig) -> RollOutcome {
        let die = dice.roll_die(config.die_sides);
        // Saturating: a total pinned at u32::MAX is still over any target.
        self.score = self.score.saturating_add(die);
        self.dice.push(die);

        let score = self.score;
        let busted = score > config.target;
        if busted {
            self.score = 0;
            self.dice.clear();
            self.in_game = false;
        }

        RollOutcome { die, score, busted }
    }

    /// Leave the game voluntarily, keeping the current score.
    pub fn stop(&mut self) {
        self.in_game = false;
    }
}
