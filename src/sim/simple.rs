use crate::error::{Result, WalkError};
use crate::process::increment::step;
use crate::process::{PathPoint, WalkParameters, capacity_hint};
use crate::rng::RandomSource;

/// The point at time 0 is already one step away from `start_value`.
pub fn generate_simple_walk(
    params: &WalkParameters,
    rng: &mut dyn RandomSource,
) -> Result<Vec<PathPoint>> {
    params.validate()?;
    let (points, _) = (0..params.step_count).try_fold(
        (Vec::with_capacity(capacity_hint(params.step_count)), params.start_value),
        |(mut points, prev), i| {
            let x = step(prev, 1.0, params.volatility, rng)?;
            points.push(PathPoint::new(i, x));
            Ok::<_, WalkError>((points, x))
        },
    )?;
    tracing::debug!(
        steps = params.step_count,
        volatility = params.volatility,
        "generated simple walk"
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PseudoRng;

    #[test]
    fn zero_volatility_stays_at_start() {
        let mut rng = PseudoRng::new(0);
        let path = generate_simple_walk(&WalkParameters::new(5.0, 0.0, 10), &mut rng).unwrap();
        assert_eq!(path.len(), 10);
        for (i, p) in path.iter().enumerate() {
            assert_eq!(p.time, i as i64);
            assert_eq!(p.value, 5.0);
        }
    }

    #[test]
    fn empty_walk() {
        let mut rng = PseudoRng::new(0);
        let path = generate_simple_walk(&WalkParameters::new(1.0, 1.0, 0), &mut rng).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn negative_step_count_is_rejected() {
        let mut rng = PseudoRng::new(0);
        let err = generate_simple_walk(&WalkParameters::new(0.0, 1.0, -1), &mut rng).unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
