//! Normal deviates from uniform draws via the Box-Muller transform.

use crate::error::{Result, WalkError};
use crate::rng::RandomSource;
use std::f64::consts::PI;

/// Draws from `Normal(mean, variance)`.
///
/// A zero variance is a point mass and returns `mean` exactly without
/// touching `rng`. Both uniforms are redrawn until strictly positive, which
/// keeps `ln(u)` finite.
///
/// # Errors
///
/// `InvalidParameter` when `variance` is negative or NaN.
pub fn sample(mean: f64, variance: f64, rng: &mut dyn RandomSource) -> Result<f64> {
    if variance.is_nan() || variance < 0.0 {
        return Err(WalkError::invalid(
            "variance",
            format!("must be non-negative, got {variance}"),
        ));
    }
    if variance == 0.0 {
        return Ok(mean);
    }
    Ok(variance.sqrt() * standard_normal(rng) + mean)
}

fn standard_normal(rng: &mut dyn RandomSource) -> f64 {
    let u = positive_uniform(rng);
    let v = positive_uniform(rng);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

#[inline]
fn positive_uniform(rng: &mut dyn RandomSource) -> f64 {
    loop {
        let u = rng.next_uniform();
        if u > 0.0 {
            return u;
        }
    }
}
