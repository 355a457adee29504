pub mod pseudo;
pub mod sobol;

pub use self::pseudo::PseudoRng;
pub use self::sobol::SobolRng;

use crate::error::{Result, WalkError};
use std::str::FromStr;

/// Source of independent uniform draws in the open interval (0, 1).
///
/// Sources are always passed in explicitly; nothing in the crate reaches
/// for an ambient generator.
pub trait RandomSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Which uniform source a simulation draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RngMethod {
    #[default]
    Pseudo,
    Sobol,
}

impl FromStr for RngMethod {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pseudo" => Ok(RngMethod::Pseudo),
            "sobol" => Ok(RngMethod::Sobol),
            other => Err(WalkError::invalid(
                "rng_method",
                format!("expected 'pseudo' or 'sobol', got '{other}'"),
            )),
        }
    }
}
