use thiserror::Error;

/// Errors raised by the samplers, path generators and simulation config.
///
/// Every check runs before the first draw, so a failed call never hands back
/// a partial path.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("missing parameter '{name}'")]
    MissingParameter { name: &'static str },

    #[error("failed to build dataframe: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

impl WalkError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        WalkError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for the `InvalidParameter` kind.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, WalkError::InvalidParameter { .. })
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;
