use crate::error::{Result, WalkError};
use crate::gaussian::sample;
use crate::rng::RandomSource;

/// One Wiener increment: `Normal(x0, delta_time * sigma^2)`.
///
/// # Errors
///
/// `InvalidParameter` when `delta_time <= 0` or `sigma < 0`.
#[inline]
pub fn step(x0: f64, delta_time: f64, sigma: f64, rng: &mut dyn RandomSource) -> Result<f64> {
    if delta_time.is_nan() || delta_time <= 0.0 {
        return Err(WalkError::invalid(
            "delta_time",
            format!("must be positive, got {delta_time}"),
        ));
    }
    if sigma.is_nan() || sigma < 0.0 {
        return Err(WalkError::invalid(
            "sigma",
            format!("must be non-negative, got {sigma}"),
        ));
    }
    sample(x0, delta_time * sigma * sigma, rng)
}

/// [`step`] expressed between two absolute times `t0 < t`.
#[inline]
pub fn random_walk(x0: f64, t0: f64, t: f64, sigma: f64, rng: &mut dyn RandomSource) -> Result<f64> {
    step(x0, t - t0, sigma, rng)
}
