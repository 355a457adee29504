use crate::rng::RandomSource;
use rand::{Rng as RandRng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// --- Pseudo RNG ---

/// ChaCha8-backed uniform source.
///
/// Each scenario of a seeded run reads its own ChaCha stream, so scenarios
/// can be generated on any number of threads and still reproduce exactly.
#[derive(Clone, Debug)]
pub struct PseudoRng {
    rng: ChaCha8Rng,
}

impl PseudoRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Stream `scenario` of the generator seeded with `seed`.
    pub fn for_scenario(seed: u64, scenario: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(scenario);
        Self { rng }
    }
}

impl RandomSource for PseudoRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        // `random::<f64>()` is [0, 1); zero is redrawn.
        loop {
            let u = self.rng.random::<f64>();
            if u > 0.0 {
                return u;
            }
        }
    }
}
