use crate::error::{Result, WalkError};
use crate::process::WalkVariant;
use crate::rng::RngMethod;

/// Upper limit on scenarios per simulation.
pub const MAX_SCENARIOS: usize = 10_000_000;

/// # Examples
///
/// ```rust
/// use walk_sim_rs::config::SimulationConfig;
/// use walk_sim_rs::process::{WalkParameters, WalkVariant};
///
/// let config = SimulationConfig::builder()
///     .variant(WalkVariant::Simple(WalkParameters::new(0.0, 0.5, 500)))
///     .scenarios(10)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.scenarios(), 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    variant: WalkVariant,
    scenarios: usize,
    seed: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    rng_method: RngMethod,
}

impl SimulationConfig {
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    #[inline]
    pub fn variant(&self) -> &WalkVariant {
        &self.variant
    }

    #[inline]
    pub fn scenarios(&self) -> usize {
        self.scenarios
    }

    /// Seed for reproducible runs; `None` draws a fresh one per run.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn rng_method(&self) -> RngMethod {
        self.rng_method
    }

    /// Deserialised configs skip the builder; run this before simulating one.
    pub fn validate(&self) -> Result<()> {
        if self.scenarios == 0 || self.scenarios > MAX_SCENARIOS {
            return Err(WalkError::invalid(
                "scenarios",
                format!("must be in [1, {MAX_SCENARIOS}], got {}", self.scenarios),
            ));
        }
        self.variant.validate()
    }
}

/// Fluent builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    variant: Option<WalkVariant>,
    scenarios: Option<usize>,
    seed: Option<u64>,
    rng_method: RngMethod,
}

impl SimulationConfigBuilder {
    #[inline]
    pub fn variant(mut self, variant: WalkVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Defaults to a single scenario.
    #[inline]
    pub fn scenarios(mut self, scenarios: usize) -> Self {
        self.scenarios = Some(scenarios);
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn rng_method(mut self, rng_method: RngMethod) -> Self {
        self.rng_method = rng_method;
        self
    }

    /// # Errors
    ///
    /// `MissingParameter` without a variant, `InvalidParameter` when the
    /// scenario count or the variant's parameters are out of range.
    pub fn build(self) -> Result<SimulationConfig> {
        let variant = self
            .variant
            .ok_or(WalkError::MissingParameter { name: "variant" })?;
        let config = SimulationConfig {
            variant,
            scenarios: self.scenarios.unwrap_or(1),
            seed: self.seed,
            rng_method: self.rng_method,
        };
        config.validate()?;
        Ok(config)
    }
}
