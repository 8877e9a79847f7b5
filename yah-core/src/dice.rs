//! Dice, dice sets, and die-roll sources.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::error::GameError;

/// Number of dice in a hand.
pub const DICE_COUNT: usize = 5;

/// Produces one die face per call.
///
/// Implementations must return values in 1..=6.
pub trait DieSource {
    fn roll(&mut self) -> u8;
}

/// Pseudorandom die source backed by a small PRNG. Deterministic per seed.
pub struct SeededDieSource {
    rng: Box<ChaCha8Rng>,
}

impl SeededDieSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }
}

impl DieSource for SeededDieSource {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// Die source that replays a fixed face sequence, cycling when exhausted.
///
/// # Panics
/// Panics if `faces` is empty or contains a value outside 1..=6.
pub struct ScriptedDieSource {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedDieSource {
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(!faces.is_empty(), "scripted faces must not be empty");
        for &f in &faces {
            assert!((1..=6).contains(&f), "scripted face out of range: {}", f);
        }
        Self { faces, next: 0 }
    }
}

impl DieSource for ScriptedDieSource {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}

/// Five dice with stable positions 0..=4.
///
/// Positions are the identifiers keep decisions refer to, so faces are never
/// implicitly sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSet {
    faces: [u8; DICE_COUNT],
}

impl DiceSet {
    /// Fresh dice. Every face shows 1 until the first roll.
    pub fn new() -> Self {
        Self {
            faces: [1; DICE_COUNT],
        }
    }

    /// Current faces, by position.
    pub fn faces(&self) -> [u8; DICE_COUNT] {
        self.faces
    }

    /// Roll every die.
    pub fn roll_all(&mut self, source: &mut dyn DieSource) {
        for f in &mut self.faces {
            *f = source.roll();
        }
    }

    /// Reroll every position not listed in `keep`.
    ///
    /// Positions are validated before any die changes; duplicates in `keep`
    /// are tolerated.
    pub fn reroll_keeping(
        &mut self,
        keep: &[usize],
        source: &mut dyn DieSource,
    ) -> Result<(), GameError> {
        for &pos in keep {
            if pos >= DICE_COUNT {
                return Err(GameError::DiePositionOutOfRange { pos });
            }
        }
        for (i, f) in self.faces.iter_mut().enumerate() {
            if !keep.contains(&i) {
                *f = source.roll();
            }
        }
        Ok(())
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}
