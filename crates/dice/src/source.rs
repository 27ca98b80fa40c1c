use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplier of raw dice totals and uniform fractions.
///
/// Implementations promise `dice_sum` returns the sum of `count` independent
/// draws from `1..=sides`, and `fraction` returns a value in `[0, 1)`.
/// Callers go through [`crate::Dice`], which rejects anything else.
pub trait RandomSource {
    /// Sum of `count` dice with `sides` faces each.
    fn dice_sum(&mut self, count: u32, sides: u32) -> u32;

    /// Uniform fraction in `[0, 1)`.
    fn fraction(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn dice_sum(&mut self, count: u32, sides: u32) -> u32 {
        (**self).dice_sum(count, sides)
    }

    fn fraction(&mut self) -> f64 {
        (**self).fraction()
    }
}

/// ChaCha8-backed source. The same seed always yields the same rolls.
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Deterministic source for replaying a specific world.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed from the thread RNG. The seed stays readable through
    /// [`SeededSource::seed`] so the run can be reproduced later.
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        tracing::debug!(seed, "drew seed from entropy");
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn dice_sum(&mut self, count: u32, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (0..count).map(|_| self.rng.gen_range(1..=sides)).sum()
    }

    fn fraction(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
