//! Monte Carlo simulation configuration.
//!
//! [`SimulationConfig`] replaces module-wide constants: every run receives
//! its configuration explicitly, so concurrent simulations with different
//! settings cannot interfere.

use super::error::SimulationError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`SimulationConfig::builder`] to construct
/// instances; validation happens at build time.
///
/// # Examples
///
/// ```rust
/// use quant_engine::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .horizon(1.0)
///     .n_steps(252)
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert!((config.dt() - 1.0 / 252.0).abs() < 1e-15);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Time horizon T in years.
    horizon: f64,
    /// Number of time steps per path.
    n_steps: usize,
    /// Number of simulation paths.
    n_paths: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the time horizon in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the fixed step size `dt = horizon / n_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.horizon / self.n_steps as f64
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidHorizon`] if the horizon is not positive
    ///   and finite
    /// - [`SimulationError::InvalidStepCount`] if `n_steps` is 0 or above
    ///   [`MAX_STEPS`]
    /// - [`SimulationError::InvalidPathCount`] if `n_paths` is 0 or above
    ///   [`MAX_PATHS`]
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.horizon > 0.0 && self.horizon.is_finite()) {
            return Err(SimulationError::InvalidHorizon(self.horizon));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(SimulationError::InvalidStepCount(self.n_steps));
        }
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(SimulationError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    horizon: Option<f64>,
    n_steps: Option<usize>,
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the time horizon in years.
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidParameter`] if a required field is missing,
    /// or the corresponding range error if a field is out of bounds.
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let horizon = self.horizon.ok_or(SimulationError::InvalidParameter {
            name: "horizon",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(SimulationError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let n_paths = self.n_paths.ok_or(SimulationError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            horizon,
            n_steps,
            n_paths,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
