pub mod bridge;
pub mod increment;
pub mod jump;

use crate::error::{Result, WalkError};

/// Points reserved up front per path; longer walks grow as they go.
const MAX_PREALLOCATED_POINTS: usize = 1 << 16;

#[inline]
pub(crate) fn capacity_hint(step_count: i64) -> usize {
    usize::try_from(step_count)
        .unwrap_or(0)
        .min(MAX_PREALLOCATED_POINTS)
}

/// A realised value of a walk at an integer time index.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub time: i64,
    pub value: f64,
}

impl PathPoint {
    #[inline]
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Parameters shared by every walk.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkParameters {
    pub start_value: f64,
    /// Per-unit-time standard deviation of the increments.
    pub volatility: f64,
    pub step_count: i64,
}

impl WalkParameters {
    pub fn new(start_value: f64, volatility: f64, step_count: i64) -> Self {
        Self {
            start_value,
            volatility,
            step_count,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.volatility.is_nan() || self.volatility < 0.0 {
            return Err(WalkError::invalid(
                "volatility",
                format!("must be non-negative, got {}", self.volatility),
            ));
        }
        if self.step_count < 0 {
            return Err(WalkError::invalid(
                "step_count",
                format!("must be non-negative, got {}", self.step_count),
            ));
        }
        Ok(())
    }
}

/// A walk with a single long step starting at `jump_start_index`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpParameters {
    pub walk: WalkParameters,
    pub jump_start_index: i64,
    /// Elapsed time of the jump step, in time units.
    pub jump_duration: i64,
    /// Half-range past which a value is reflected as `bound - x`.
    pub bound: f64,
}

impl JumpParameters {
    pub fn new(walk: WalkParameters, jump_start_index: i64, jump_duration: i64, bound: f64) -> Self {
        Self {
            walk,
            jump_start_index,
            jump_duration,
            bound,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.walk.validate()?;
        if self.jump_duration < 1 {
            return Err(WalkError::invalid(
                "jump_duration",
                format!("must be at least 1, got {}", self.jump_duration),
            ));
        }
        if self.jump_start_index < 0 || self.jump_start_index >= self.walk.step_count {
            return Err(WalkError::invalid(
                "jump_start_index",
                format!(
                    "must be in [0, {}), got {}",
                    self.walk.step_count, self.jump_start_index
                ),
            ));
        }
        // The schedule emits `start + duration` and steps on from one past it.
        let landing = self
            .jump_start_index
            .checked_add(self.jump_duration)
            .filter(|&after| after < i64::MAX);
        if landing.is_none() {
            return Err(WalkError::invalid(
                "jump_duration",
                format!(
                    "jump from {} by {} overflows the time index",
                    self.jump_start_index, self.jump_duration
                ),
            ));
        }
        if self.bound.is_nan() || self.bound < 0.0 {
            return Err(WalkError::invalid(
                "bound",
                format!("must be non-negative, got {}", self.bound),
            ));
        }
        Ok(())
    }
}

/// A walk pinned to `anchor_value` at `anchor_time`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BridgeParameters {
    pub walk: WalkParameters,
    pub anchor_value: f64,
    pub anchor_time: i64,
}

impl BridgeParameters {
    pub fn new(walk: WalkParameters, anchor_value: f64, anchor_time: i64) -> Self {
        Self {
            walk,
            anchor_value,
            anchor_time,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.walk.validate()?;
        if self.walk.volatility <= 0.0 {
            return Err(WalkError::invalid(
                "volatility",
                format!("must be positive for a bridge, got {}", self.walk.volatility),
            ));
        }
        if self.anchor_time <= 0 {
            return Err(WalkError::invalid(
                "anchor_time",
                format!("must be positive, got {}", self.anchor_time),
            ));
        }
        Ok(())
    }
}

/// The three walk shapes, each with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum WalkVariant {
    Simple(WalkParameters),
    Jump(JumpParameters),
    Bridge(BridgeParameters),
}

impl WalkVariant {
    pub fn name(&self) -> &'static str {
        match self {
            WalkVariant::Simple(_) => "simple",
            WalkVariant::Jump(_) => "jump",
            WalkVariant::Bridge(_) => "bridge",
        }
    }

    pub fn walk(&self) -> &WalkParameters {
        match self {
            WalkVariant::Simple(p) => p,
            WalkVariant::Jump(p) => &p.walk,
            WalkVariant::Bridge(p) => &p.walk,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            WalkVariant::Simple(p) => p.validate(),
            WalkVariant::Jump(p) => p.validate(),
            WalkVariant::Bridge(p) => p.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_parameters_reject_negative_inputs() {
        assert!(WalkParameters::new(0.0, -0.1, 10).validate().is_err());
        assert!(WalkParameters::new(0.0, 0.1, -1).validate().is_err());
        assert!(WalkParameters::new(0.0, 0.0, 0).validate().is_ok());
    }

    #[test]
    fn jump_parameters_bounds() {
        let walk = WalkParameters::new(0.0, 1.0, 10);
        assert!(JumpParameters::new(walk, 0, 1, 100.0).validate().is_ok());
        assert!(JumpParameters::new(walk, 9, 50, 100.0).validate().is_ok());
        assert!(JumpParameters::new(walk, 10, 1, 100.0).validate().is_err());
        assert!(JumpParameters::new(walk, -1, 1, 100.0).validate().is_err());
        assert!(JumpParameters::new(walk, 3, 0, 100.0).validate().is_err());
        assert!(JumpParameters::new(walk, 3, 2, -1.0).validate().is_err());
        assert!(JumpParameters::new(walk, 3, 2, f64::INFINITY).validate().is_ok());
    }

    #[test]
    fn jump_landing_past_i64_is_rejected() {
        let walk = WalkParameters::new(0.0, 0.5, 10);
        let err = JumpParameters::new(walk, 3, i64::MAX, 150.0)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("jump_duration"));
        assert!(JumpParameters::new(walk, 0, i64::MAX, 150.0).validate().is_err());
        assert!(JumpParameters::new(walk, 3, i64::MAX - 4, 150.0).validate().is_ok());
    }

    #[test]
    fn capacity_hint_is_bounded() {
        assert_eq!(capacity_hint(-5), 0);
        assert_eq!(capacity_hint(598), 598);
        assert_eq!(capacity_hint(i64::MAX), MAX_PREALLOCATED_POINTS);
    }

    #[test]
    fn bridge_parameters_need_positive_anchor_and_volatility() {
        let walk = WalkParameters::new(0.0, 0.3, 598);
        assert!(BridgeParameters::new(walk, 5.0, 300).validate().is_ok());
        assert!(BridgeParameters::new(walk, 5.0, 0).validate().is_err());
        let flat = WalkParameters::new(0.0, 0.0, 598);
        assert!(BridgeParameters::new(flat, 5.0, 300).validate().is_err());
    }

    #[test]
    fn variant_exposes_shared_walk() {
        let walk = WalkParameters::new(1.0, 0.5, 20);
        let variant = WalkVariant::Bridge(BridgeParameters::new(walk, 2.0, 10));
        assert_eq!(variant.name(), "bridge");
        assert_eq!(variant.walk(), &walk);
    }
}
