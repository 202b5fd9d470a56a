//! RNG module - the randomness capability used to spawn tiles
//!
//! Spawning needs exactly two random decisions: which empty cell to fill
//! (a uniform index into the list of empty cells) and whether the new tile is
//! a 4 (10%) or a 2 (90%). [`TileRng`] names those two decisions so the engine
//! can run on any `rand` generator in play, and on a [`ScriptedRng`] in tests.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

use crate::types::SPAWN_FOUR_PROBABILITY;

/// Source of the random decisions made when spawning a tile.
pub trait TileRng {
    /// Uniform index in `[0, len)`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;

    /// True with probability [`SPAWN_FOUR_PROBABILITY`].
    fn spawn_four(&mut self) -> bool;
}

impl<R: RngCore + ?Sized> TileRng for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn spawn_four(&mut self) -> bool {
        self.gen_bool(SPAWN_FOUR_PROBABILITY)
    }
}

/// Replays a fixed script of spawn decisions.
///
/// Picks wrap modulo the number of empty cells. Once a script is exhausted the
/// generator keeps answering index 0 and "spawn a 2".
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
    fours: VecDeque<bool>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue cell indices returned by successive [`TileRng::pick`] calls.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queue answers returned by successive [`TileRng::spawn_four`] calls.
    pub fn with_fours(mut self, fours: impl IntoIterator<Item = bool>) -> Self {
        self.fours.extend(fours);
        self
    }
}

impl TileRng for ScriptedRng {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map(|idx| idx % len).unwrap_or(0)
    }

    fn spawn_four(&mut self) -> bool {
        self.fours.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_rng_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(12345);
        let mut rng2 = StdRng::seed_from_u64(12345);

        for _ in 0..100 {
            assert_eq!(rng1.pick(16), rng2.pick(16));
            assert_eq!(rng1.spawn_four(), rng2.spawn_four());
        }
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..=16 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_spawn_four_is_roughly_one_in_ten() {
        let mut rng = StdRng::seed_from_u64(2048);
        let fours = (0..10_000).filter(|_| rng.spawn_four()).count();
        assert!((700..1300).contains(&fours), "got {} fours", fours);
    }

    #[test]
    fn test_scripted_rng_replays_then_defaults() {
        let mut rng = ScriptedRng::new().with_picks([3, 9]).with_fours([true]);
        assert_eq!(rng.pick(5), 3);
        assert_eq!(rng.pick(5), 4); // 9 wraps
        assert_eq!(rng.pick(5), 0);

        assert!(rng.spawn_four());
        assert!(!rng.spawn_four());
    }
}
