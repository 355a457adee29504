pub mod bridge;
pub mod jump;
pub mod simple;

pub use bridge::generate_interpolated_walk;
pub use jump::{JumpWalk, generate_jump_walk};
pub use simple::generate_simple_walk;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::filtration::Filtration;
use crate::process::jump::JumpGap;
use crate::process::{PathPoint, WalkVariant};
use crate::rng::{PseudoRng, RandomSource, RngMethod, SobolRng};
use rayon::prelude::*;
use std::time::Instant;

/// One realised walk of any variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub points: Vec<PathPoint>,
    /// Set for jump walks only.
    pub gap: Option<JumpGap>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<PathPoint>> for Path {
    fn from(points: Vec<PathPoint>) -> Self {
        Self { points, gap: None }
    }
}

impl From<JumpWalk> for Path {
    fn from(walk: JumpWalk) -> Self {
        Self {
            points: walk.points,
            gap: Some(walk.gap),
        }
    }
}

/// Generates one path of whichever variant `variant` names.
pub fn generate(variant: &WalkVariant, rng: &mut dyn RandomSource) -> Result<Path> {
    match variant {
        WalkVariant::Simple(p) => generate_simple_walk(p, rng).map(Path::from),
        WalkVariant::Jump(p) => generate_jump_walk(p, rng).map(Path::from),
        WalkVariant::Bridge(p) => generate_interpolated_walk(p, rng).map(Path::from),
    }
}

/// Generates `config.scenarios()` independent paths.
///
/// With the pseudo source every scenario reads its own ChaCha stream and the
/// scenarios run in parallel; the result does not depend on the thread count.
/// The Sobol source is a single sequence, so its scenarios run in order, each
/// reading one point of `2 * step_count` dimensions.
pub fn simulate(config: &SimulationConfig) -> Result<Filtration> {
    config.validate()?;
    let variant = config.variant();
    let seed = config.seed().unwrap_or_else(rand::random);
    let scenarios: Vec<i32> = (1..=config.scenarios() as i32).collect();

    let before = Instant::now();
    let paths = match config.rng_method() {
        RngMethod::Pseudo => scenarios
            .par_iter()
            .map(|&scenario| {
                let mut rng = PseudoRng::for_scenario(seed, scenario as u64);
                generate(variant, &mut rng)
            })
            .collect::<Result<Vec<Path>>>()?,
        RngMethod::Sobol => {
            let dimensions = SobolRng::dimensions_for(variant.walk().step_count);
            let mut rng = SobolRng::new(dimensions, seed);
            scenarios
                .iter()
                .enumerate()
                .map(|(i, _)| {
                    if i > 0 {
                        rng.next_path();
                    }
                    generate(variant, &mut rng)
                })
                .collect::<Result<Vec<Path>>>()?
        }
    };
    tracing::info!(
        variant = variant.name(),
        scenarios = scenarios.len(),
        rng = ?config.rng_method(),
        seed,
        elapsed_ms = before.elapsed().as_secs_f64() * 1e3,
        "simulation completed"
    );
    Ok(Filtration::new(scenarios, paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{BridgeParameters, JumpParameters, WalkParameters};

    #[test]
    fn generate_dispatches_on_variant() {
        let walk = WalkParameters::new(0.0, 0.5, 40);
        let mut rng = PseudoRng::new(1);

        let simple = generate(&WalkVariant::Simple(walk), &mut rng).unwrap();
        assert_eq!(simple.len(), 40);
        assert!(simple.gap.is_none());

        let jump = generate(
            &WalkVariant::Jump(JumpParameters::new(walk, 10, 5, 100.0)),
            &mut rng,
        )
        .unwrap();
        assert_eq!(jump.gap.map(|g| g.after), Some(15));

        let bridge = generate(
            &WalkVariant::Bridge(BridgeParameters::new(walk, 3.0, 20)),
            &mut rng,
        )
        .unwrap();
        assert_eq!(bridge.points[19].value, 3.0);
    }

    #[test]
    fn generate_matches_direct_call() {
        let walk = WalkParameters::new(1.0, 0.2, 25);
        let direct = generate_simple_walk(&walk, &mut PseudoRng::new(9)).unwrap();
        let via = generate(&WalkVariant::Simple(walk), &mut PseudoRng::new(9)).unwrap();
        assert_eq!(via.points, direct);
    }

    #[test]
    fn simulate_validates_before_running() {
        let config = SimulationConfig::builder()
            .variant(WalkVariant::Simple(WalkParameters::new(0.0, 1.0, -3)))
            .scenarios(4)
            .build();
        assert!(config.is_err());
    }
}
