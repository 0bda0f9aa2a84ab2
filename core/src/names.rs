//! Deterministic child name generation from per-generation name pools.
//!
//! Each generation draws from its own pool; generations deeper than the
//! last defined pool reuse the last one. Same RNG state = same names.

use crate::rng::SimRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Draw a name for a member of `generation`. One draw.
    pub fn for_generation(generation: u32, rng: &mut SimRng) -> &'static str {
        *rng.pick(Self::pool(generation))
    }

    /// The pool for a generation, clamped at the deepest defined pool.
    pub fn pool(generation: u32) -> &'static [&'static str] {
        let pools = Self::generation_pools();
        let index = (generation as usize).min(pools.len() - 1);
        pools[index]
    }

    fn generation_pools() -> &'static [&'static [&'static str]] {
        &[
            &["Alex", "Jordan", "Taylor", "Morgan", "Casey"],
            &["Riley", "Quinn", "Avery", "Sage", "River"],
            &["Phoenix", "Skyler", "Dakota", "Reese", "Finley"],
            &["Rowan", "Ellis", "Blair", "Emery", "Kendall"],
            &["Eden", "Marlowe", "Lennox", "Sutton", "Campbell"],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng1 = SimRng::new(12345);
        let mut rng2 = SimRng::new(12345);
        for generation in 0..8 {
            assert_eq!(
                NameGenerator::for_generation(generation, &mut rng1),
                NameGenerator::for_generation(generation, &mut rng2),
                "Same seed should produce same name"
            );
        }
    }

    #[test]
    fn names_come_from_the_generation_pool() {
        let mut rng = SimRng::new(7);
        for _ in 0..50 {
            let name = NameGenerator::for_generation(2, &mut rng);
            assert!(NameGenerator::pool(2).contains(&name), "{name} not in pool 2");
        }
    }

    #[test]
    fn deep_generations_clamp_to_last_pool() {
        assert_eq!(NameGenerator::pool(4), NameGenerator::pool(9));
        assert_ne!(NameGenerator::pool(3), NameGenerator::pool(4));
    }
}
