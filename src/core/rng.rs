//! Sources of die rolls.
//!
//! Every roll in the game goes through the [`DieSource`] trait so the turn
//! controller never touches a global generator:
//!
//! - [`GameRng`]: seeded ChaCha8. Same seed, same rolls. Its position can be
//!   captured and restored in O(1).
//! - [`ScriptedDice`]: replays a fixed list of faces, for tests and replays.
//!
//! ```
//! use dice21::core::{DieSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.roll_die(6), b.roll_die(6));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Anything that can roll a die.
pub trait DieSource {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<D: DieSource + ?Sized> DieSource for &mut D {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

/// Deterministic RNG for die rolls.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so `state()` works as usual.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieSource for GameRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same
/// no matter how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of faces.
///
/// Panics when asked for more rolls than it was given, or when a scripted
/// face does not fit the die being rolled.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len() - self.next
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let face = *self
            .faces
            .get(self.next)
            .unwrap_or_else(|| panic!("scripted dice exhausted after {} rolls", self.next));
        assert!(
            (1..=sides).contains(&face),
            "scripted face {face} is not on a d{sides}"
        );
        self.next += 1;
        face
    }
}
