use crate::rng::RandomSource;
use rand::{Rng as RandRng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sobol;

// --- Sobol RNG ---

/// Dimensions available from `JoeKuoD6::extended`.
pub const MAX_DIMENSIONS: usize = 21_201;
const SKIP: usize = 5;
/// Stream of the padding generator, kept apart from the scrambler's stream 0.
const PADDING_STREAM: u64 = u64::MAX;

/// Scrambled Sobol sequence with one point per path.
///
/// Draw `k` of a path reads coordinate `k` of the current point, so draws
/// within a path come from distinct dimensions. Call [`SobolRng::next_path`]
/// between paths. Draws past the last dimension fall back to a seeded ChaCha
/// stream.
pub struct SobolRng {
    sobol_iter: Box<std::iter::Skip<sobol::Sobol<f64>>>,
    dimensions: usize,
    scrambler: XORScrambler,
    padding: ChaCha8Rng,
    point: Vec<f64>,
    cursor: usize,
}

impl SobolRng {
    pub fn new(dimensions: usize, seed: u64) -> Self {
        let dimensions = dimensions.clamp(1, MAX_DIMENSIONS);
        let mut padding = ChaCha8Rng::seed_from_u64(seed);
        padding.set_stream(PADDING_STREAM);
        let mut rng = Self {
            sobol_iter: Box::new(fresh_sequence(dimensions)),
            dimensions,
            scrambler: XORScrambler::new(seed),
            padding,
            point: Vec::new(),
            cursor: 0,
        };
        rng.next_path();
        rng
    }

    /// Dimensions a walk of `step_count` steps consumes: two uniforms per step.
    pub fn dimensions_for(step_count: i64) -> usize {
        usize::try_from(step_count)
            .unwrap_or(0)
            .saturating_mul(2)
            .min(MAX_DIMENSIONS)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Moves to the next Sobol point; the following draws start at dimension 0.
    pub fn next_path(&mut self) {
        let raw = match self.sobol_iter.next() {
            Some(raw) => raw,
            None => {
                tracing::debug!("sobol sequence exhausted, restarting");
                *self.sobol_iter = fresh_sequence(self.dimensions);
                self.sobol_iter
                    .next()
                    .unwrap_or_else(|| vec![0.5; self.dimensions])
            }
        };
        self.point = self.scrambler.scramble(raw);
        self.cursor = 0;
    }
}

fn fresh_sequence(dimensions: usize) -> std::iter::Skip<sobol::Sobol<f64>> {
    let params = sobol::params::JoeKuoD6::extended();
    sobol::Sobol::<f64>::new(dimensions, &params).skip(SKIP)
}

impl RandomSource for SobolRng {
    fn next_uniform(&mut self) -> f64 {
        while self.cursor < self.point.len() {
            let u = self.point[self.cursor];
            self.cursor += 1;
            if u > 0.0 && u < 1.0 {
                return u;
            }
        }
        loop {
            let u = self.padding.random::<f64>();
            if u > 0.0 {
                return u;
            }
        }
    }
}

// --- Scrambler ---

struct XORScrambler {
    rng: ChaCha8Rng,
}

impl XORScrambler {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn scramble(&mut self, mut values: Vec<f64>) -> Vec<f64> {
        const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
        for val in values.iter_mut() {
            let offset = self.rng.random::<u64>() & MANTISSA_MASK;
            *val = f64::from_bits(val.to_bits() ^ offset);
        }
        values
    }
}
