use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of randomness for session construction, swappable in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RandomSource {
    #[default]
    Entropy,
    Seeded(u64),
}

impl RandomSource {
    /// Returns a source that draws from system entropy.
    #[must_use]
    pub fn entropy() -> Self {
        Self::Entropy
    }

    /// Returns a source that always yields the same sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(seed)
    }

    /// Creates a generator according to the source.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self {
            RandomSource::Entropy => StdRng::from_rng(&mut rand::rng()),
            RandomSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }

    #[must_use]
    pub fn is_seeded(&self) -> bool {
        matches!(self, RandomSource::Seeded(_))
    }
}

/// Returns a uniformly permuted copy of `items` (Fisher–Yates).
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Deterministic seed for tests and examples.
pub const FIXED_TEST_SEED: u64 = 1_700_000_000;

/// Returns a generator seeded with [`FIXED_TEST_SEED`].
#[must_use]
pub fn fixed_rng() -> StdRng {
    RandomSource::seeded(FIXED_TEST_SEED).rng()
}
