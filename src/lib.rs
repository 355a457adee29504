//! Random-walk path sampling.
//!
//! Gaussian draws come from a Box-Muller transform over an injected
//! [`rng::RandomSource`]. On top of it sit three walk generators: a plain
//! Wiener walk, a walk with a single long jump step, and a Brownian bridge
//! pinned to an anchor point. [`sim::simulate`] runs any of them over many
//! seeded scenarios in parallel.

pub mod config;
pub mod error;
pub mod filtration;
pub mod gaussian;
pub mod process;
pub mod rng;
pub mod sim;

#[cfg(feature = "python")]
mod py_binding;

pub use error::{Result, WalkError};
pub use gaussian::sample;
pub use process::{BridgeParameters, JumpParameters, PathPoint, WalkParameters, WalkVariant};
pub use sim::{generate, generate_interpolated_walk, generate_jump_walk, generate_simple_walk, simulate};
