use crate::error::{Result, WalkError};
use crate::process::increment::step;
use crate::process::jump::{JumpGap, reflect};
use crate::process::{JumpParameters, PathPoint, capacity_hint};
use crate::rng::RandomSource;
use std::iter;

#[derive(Clone, Debug, PartialEq)]
pub struct JumpWalk {
    pub points: Vec<PathPoint>,
    pub gap: JumpGap,
}

/// Unit-step walk except at `jump_start_index`, where a single step spans
/// `jump_duration` time units and lands at `jump_start_index + jump_duration`.
///
/// No point is emitted for the indices the jump covers. Every stepped value
/// goes through [`reflect`] with the configured bound.
pub fn generate_jump_walk(params: &JumpParameters, rng: &mut dyn RandomSource) -> Result<JumpWalk> {
    params.validate()?;
    let walk = &params.walk;
    let gap = JumpGap::new(params.jump_start_index, params.jump_duration);

    // (emitted time, elapsed time of the step)
    let mut schedule = (0..params.jump_start_index)
        .map(|i| (i, 1))
        .chain(iter::once((gap.after, params.jump_duration)))
        .chain((gap.after + 1..walk.step_count).map(|i| (i, 1)));

    let (points, _) = schedule.try_fold(
        (Vec::with_capacity(capacity_hint(walk.step_count)), walk.start_value),
        |(mut points, prev), (time, elapsed)| {
            let stepped = step(prev, elapsed as f64, walk.volatility, rng)?;
            let x = reflect(stepped, params.bound);
            if x != stepped {
                tracing::trace!(time, stepped, reflected = x, "value reflected at bound");
            }
            points.push(PathPoint::new(time, x));
            Ok::<_, WalkError>((points, x))
        },
    )?;
    tracing::debug!(
        steps = walk.step_count,
        jump_start = params.jump_start_index,
        jump_duration = params.jump_duration,
        points = points.len(),
        "generated jump walk"
    );
    Ok(JumpWalk { points, gap })
}
