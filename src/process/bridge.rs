//! Brownian-bridge step between a known value and a later anchor.

use crate::error::{Result, WalkError};

/// Half-width of the window around the anchor time in which the walk is
/// pinned to the anchor value instead of sampling the bridge.
pub const SNAP_WINDOW: i64 = 1;

/// True when `t` is within [`SNAP_WINDOW`] of `anchor_time`.
#[inline]
pub fn in_snap_window(t: i64, anchor_time: i64) -> bool {
    (anchor_time - t).abs() <= SNAP_WINDOW
}

/// Mean and variance of the bridge at time `t`.
///
/// Inside the snap window the backward variance `(anchor_time - t) * sigma^2`
/// vanishes, so the result is the point mass `(anchor_value, 0.0)` rather than
/// the formula.
///
/// # Errors
///
/// `InvalidParameter` when `sigma <= 0`, `t <= t0`, or `t` lies past the
/// snap window (the anchor no longer constrains the walk).
pub fn step_bridge(
    x0: f64,
    t0: i64,
    anchor_value: f64,
    anchor_time: i64,
    t: i64,
    sigma: f64,
) -> Result<(f64, f64)> {
    if sigma.is_nan() || sigma <= 0.0 {
        return Err(WalkError::invalid(
            "sigma",
            format!("must be positive, got {sigma}"),
        ));
    }
    if t <= t0 {
        return Err(WalkError::invalid(
            "t",
            format!("must be after t0 = {t0}, got {t}"),
        ));
    }
    if in_snap_window(t, anchor_time) {
        return Ok((anchor_value, 0.0));
    }
    if t > anchor_time {
        return Err(WalkError::invalid(
            "t",
            format!("is past the anchor at {anchor_time}, got {t}"),
        ));
    }

    // Forward belief from (t0, x0), backward belief from the anchor.
    let var = sigma * sigma;
    let p_forward = 1.0 / ((t - t0) as f64 * var);
    let p_backward = 1.0 / ((anchor_time - t) as f64 * var);
    let precision = p_forward + p_backward;
    let mean = (x0 * p_forward + anchor_value * p_backward) / precision;
    Ok((mean, 1.0 / precision))
}
