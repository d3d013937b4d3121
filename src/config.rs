//! Optimizer configuration.
//!
//! [`MrfoConfig`] holds all parameters that control a run. It is an
//! immutable value type built through a single validating factory;
//! invalid parameter sets are rejected up front rather than signalled
//! through sentinel values.

use crate::error::{MrfoError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the Manta Ray Foraging Optimization engine.
///
/// All numeric fields are required; [`MrfoConfig::new`] fails with a
/// descriptive error if any of them is out of range. The logging
/// toggle and the seed are optional extras set through the `with_*`
/// methods.
///
/// # Examples
///
/// ```
/// use mrfo::MrfoConfig;
///
/// let config = MrfoConfig::new(30, 2, 200, -10.0, 10.0)
///     .unwrap()
///     .with_seed(42)
///     .with_log_progress(true);
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.seed, Some(42));
/// ```
///
/// The same parameters deserialize from a JSON document (the format
/// the `mrfo` binary accepts via `--file`):
///
/// ```
/// use mrfo::MrfoConfig;
///
/// let config: MrfoConfig = serde_json::from_str(
///     r#"{
///         "population_size": 30,
///         "dimensions": 2,
///         "max_iterations": 200,
///         "search_space_min": -10.0,
///         "search_space_max": 10.0
///     }"#,
/// )
/// .unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MrfoConfig {
    /// Number of manta rays in the population.
    pub population_size: usize,

    /// Dimensionality of the search space.
    pub dimensions: usize,

    /// Number of iterations to run before termination.
    pub max_iterations: usize,

    /// Lower bound of every coordinate.
    pub search_space_min: f64,

    /// Upper bound of every coordinate.
    pub search_space_max: f64,

    /// Whether the engine logs each iteration's best solution.
    #[serde(default)]
    pub log_progress: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MrfoConfig {
    /// Builds a validated configuration.
    ///
    /// Logging defaults to off and the seed to random; use
    /// [`with_log_progress`](Self::with_log_progress) and
    /// [`with_seed`](Self::with_seed) to change them.
    ///
    /// # Errors
    ///
    /// Returns an error if `population_size`, `dimensions`, or
    /// `max_iterations` is zero, or if the bounds are non-finite or
    /// not strictly ordered.
    pub fn new(
        population_size: usize,
        dimensions: usize,
        max_iterations: usize,
        search_space_min: f64,
        search_space_max: f64,
    ) -> Result<Self> {
        let config = Self {
            population_size,
            dimensions,
            max_iterations,
            search_space_min,
            search_space_max,
            log_progress: false,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Enables or disables per-iteration progress logging.
    pub fn with_log_progress(mut self, enabled: bool) -> Self {
        self.log_progress = enabled;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// [`MrfoConfig::new`] calls this internally; it is public so
    /// deserialized configurations can be checked before use.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 1 {
            return Err(MrfoError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.dimensions < 1 {
            return Err(MrfoError::DimensionsTooSmall {
                dimensions: self.dimensions,
            });
        }
        if self.max_iterations < 1 {
            return Err(MrfoError::MaxIterationsTooSmall {
                iterations: self.max_iterations,
            });
        }
        if !self.search_space_min.is_finite()
            || !self.search_space_max.is_finite()
            || self.search_space_min >= self.search_space_max
        {
            return Err(MrfoError::InvalidBounds {
                lower: self.search_space_min,
                upper: self.search_space_max,
            });
        }
        Ok(())
    }
}
