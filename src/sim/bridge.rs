use crate::error::{Result, WalkError};
use crate::gaussian::sample;
use crate::process::bridge::{in_snap_window, step_bridge};
use crate::process::increment::step;
use crate::process::{BridgeParameters, PathPoint, capacity_hint};
use crate::rng::RandomSource;

/// Walk conditioned to pass through `anchor_value` at `anchor_time`.
///
/// Step `i` advances from time `i` to `i + 1` and is emitted at index `i`.
/// Inside the snap window the value is exactly `anchor_value`; before it the
/// bridge law is sampled; past it the walk continues unconditioned.
pub fn generate_interpolated_walk(
    params: &BridgeParameters,
    rng: &mut dyn RandomSource,
) -> Result<Vec<PathPoint>> {
    params.validate()?;
    let walk = &params.walk;
    let (points, _) = (0..walk.step_count).try_fold(
        (Vec::with_capacity(capacity_hint(walk.step_count)), walk.start_value),
        |(mut points, prev), i| {
            let t = i + 1;
            let x = if in_snap_window(t, params.anchor_time) {
                tracing::trace!(time = i, anchor = params.anchor_value, "snapped to anchor");
                params.anchor_value
            } else if t < params.anchor_time {
                let (mean, variance) = step_bridge(
                    prev,
                    i,
                    params.anchor_value,
                    params.anchor_time,
                    t,
                    walk.volatility,
                )?;
                sample(mean, variance, rng)?
            } else {
                step(prev, 1.0, walk.volatility, rng)?
            };
            points.push(PathPoint::new(i, x));
            Ok::<_, WalkError>((points, x))
        },
    )?;
    tracing::debug!(
        steps = walk.step_count,
        anchor_time = params.anchor_time,
        anchor_value = params.anchor_value,
        "generated interpolated walk"
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::WalkParameters;
    use crate::rng::PseudoRng;

    #[test]
    fn snap_window_hits_anchor_exactly() {
        let params = BridgeParameters::new(WalkParameters::new(0.0, 0.3, 598), 5.0, 300);
        let mut rng = PseudoRng::new(17);
        let path = generate_interpolated_walk(&params, &mut rng).unwrap();
        assert_eq!(path.len(), 598);
        for p in path.iter().filter(|p| in_snap_window(p.time + 1, 300)) {
            assert_eq!(p.value, 5.0, "time {}", p.time);
        }
        assert_eq!(path[299].value, 5.0);
    }

    #[test]
    fn steps_past_the_anchor_are_unconditioned() {
        let (anchor_value, anchor_time, sigma) = (2.0, 5, 0.5);
        let params = BridgeParameters::new(WalkParameters::new(0.0, sigma, 10), anchor_value, anchor_time);
        let path = generate_interpolated_walk(&params, &mut PseudoRng::new(21)).unwrap();

        let mut replay = PseudoRng::new(21);
        let mut prev = 0.0;
        for i in 0..3 {
            let (mean, variance) = step_bridge(prev, i, anchor_value, anchor_time, i + 1, sigma).unwrap();
            prev = sample(mean, variance, &mut replay).unwrap();
            assert_eq!(path[i as usize].value, prev, "bridge step {i}");
        }
        for p in &path[3..6] {
            assert_eq!(p.value, anchor_value);
        }
        // The bridge law is undefined past the anchor, so a plain step is taken.
        assert!(step_bridge(anchor_value, 6, anchor_value, anchor_time, 7, sigma).is_err());
        let mut prev = anchor_value;
        for p in &path[6..] {
            prev = step(prev, 1.0, sigma, &mut replay).unwrap();
            assert_eq!(p.value, prev, "free step at {}", p.time);
        }
    }

    #[test]
    fn anchor_beyond_range_is_approached() {
        let params = BridgeParameters::new(WalkParameters::new(0.0, 0.01, 100), 50.0, 101);
        let mut rng = PseudoRng::new(3);
        let path = generate_interpolated_walk(&params, &mut rng).unwrap();
        let last = path.last().unwrap();
        assert_eq!(last.time, 99);
        // t = 100 is inside the snap window of 101.
        assert_eq!(last.value, 50.0);
        // With little noise the mean path climbs steadily.
        assert!(path[50].value > 20.0 && path[50].value < 30.0);
    }

    #[test]
    fn anchor_far_beyond_range_is_not_reached() {
        let params = BridgeParameters::new(WalkParameters::new(0.0, 0.01, 10), 1000.0, 1000);
        let mut rng = PseudoRng::new(3);
        let path = generate_interpolated_walk(&params, &mut rng).unwrap();
        assert!(path.iter().all(|p| p.value < 20.0));
    }

    #[test]
    fn invalid_anchor_or_volatility() {
        let mut rng = PseudoRng::new(0);
        let zero_anchor = BridgeParameters::new(WalkParameters::new(0.0, 0.3, 10), 5.0, 0);
        assert!(generate_interpolated_walk(&zero_anchor, &mut rng).unwrap_err().is_invalid_parameter());
        let flat = BridgeParameters::new(WalkParameters::new(0.0, 0.0, 10), 5.0, 5);
        assert!(generate_interpolated_walk(&flat, &mut rng).is_err());
    }
}
