/// Where the time axis of a jump walk is discontinuous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpGap {
    /// Time of the last point before the jump, `None` if the jump is the first step.
    pub before: Option<i64>,
    /// Time of the first point after the jump.
    pub after: i64,
}

impl JumpGap {
    pub(crate) fn new(jump_start_index: i64, jump_duration: i64) -> Self {
        Self {
            before: (jump_start_index > 0).then(|| jump_start_index - 1),
            after: jump_start_index + jump_duration,
        }
    }
}

/// Boundary rule for jump walks: past `|x| > bound` the value becomes `bound - x`.
///
/// This is not a mirror around zero and the result can still fall outside
/// `[-bound, bound]`.
#[inline]
pub fn reflect(x: f64, bound: f64) -> f64 {
    if x.abs() > bound { bound - x } else { x }
}
