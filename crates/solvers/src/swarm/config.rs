use thiserror::Error;

/// Weights applied in the velocity update.
///
/// The defaults (`0.8`, `1.5`, `1.5`) work well for the Rastrigin benchmark on
/// `[-5.12, 5.12]`. Typical values lie in `[0, 2]`; an inertia at or above `1`
/// lets velocity grow without bound.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Coefficients {
    /// Scales the velocity carried over from the previous step.
    pub inertia: f64,

    /// Scales the pull toward the particle's own best position.
    pub cognitive: f64,

    /// Scales the pull toward the swarm's best position.
    pub social: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            inertia: 0.8,
            cognitive: 1.5,
            social: 1.5,
        }
    }
}

/// Configuration for a particle swarm.
///
/// Immutable once the swarm is built. Construct with [`Config::new`] and chain
/// [`with_max_iterations`](Config::with_max_iterations) or
/// [`with_coefficients`](Config::with_coefficients) as needed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    dimension: usize,
    bounds: [f64; 2],
    max_iterations: usize,
    population_size: usize,
    coefficients: Coefficients,
}

/// Errors that can occur when validating a swarm config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dimension must be at least 1")]
    Dimension,

    #[error("bounds must be finite with min < max and 2 * (max - min) finite")]
    Bounds,

    #[error("population_size must be at least 1")]
    PopulationSize,

    #[error("inertia must be finite")]
    Inertia,

    #[error("cognitive must be finite")]
    Cognitive,

    #[error("social must be finite")]
    Social,
}

impl Config {
    /// Default iteration budget used by [`Config::new`].
    pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

    /// Creates a config with default coefficients and iteration budget.
    ///
    /// `bounds` is `[min, max]` and applies to every dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if `dimension` or `population_size` is zero, or if the
    /// bounds are non-finite or not strictly increasing. Bounds are also
    /// rejected when `2 * (max - min)` overflows, since initial velocities are
    /// drawn from a range that wide.
    pub fn new(
        dimension: usize,
        bounds: [f64; 2],
        population_size: usize,
    ) -> Result<Self, ConfigError> {
        if dimension == 0 {
            return Err(ConfigError::Dimension);
        }
        let [min, max] = bounds;
        if !min.is_finite()
            || !max.is_finite()
            || min >= max
            || !((max - min) * 2.0).is_finite()
        {
            return Err(ConfigError::Bounds);
        }
        if population_size == 0 {
            return Err(ConfigError::PopulationSize);
        }

        Ok(Self {
            dimension,
            bounds,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            population_size,
            coefficients: Coefficients::default(),
        })
    }

    /// Sets the iteration budget used by drivers.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the velocity update weights.
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is non-finite.
    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Result<Self, ConfigError> {
        if !coefficients.inertia.is_finite() {
            return Err(ConfigError::Inertia);
        }
        if !coefficients.cognitive.is_finite() {
            return Err(ConfigError::Cognitive);
        }
        if !coefficients.social.is_finite() {
            return Err(ConfigError::Social);
        }

        self.coefficients = coefficients;
        Ok(self)
    }

    /// Returns the number of dimensions searched.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the `[min, max]` bounds shared by every dimension.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        self.bounds
    }

    /// Returns the iteration budget for drivers.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the number of particles in the swarm.
    #[must_use]
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Returns the velocity update weights.
    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }
}

/// Serialized form of [`Config`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawConfig {
    dimension: usize,
    bounds: [f64; 2],
    #[serde(default = "default_max_iterations")]
    max_iterations: usize,
    population_size: usize,
    #[serde(default)]
    coefficients: Coefficients,
}

#[cfg(feature = "serde")]
fn default_max_iterations() -> usize {
    Config::DEFAULT_MAX_ITERATIONS
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Config::new(raw.dimension, raw.bounds, raw.population_size)?
            .with_max_iterations(raw.max_iterations)
            .with_coefficients(raw.coefficients)
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            dimension: config.dimension,
            bounds: config.bounds,
            max_iterations: config.max_iterations,
            population_size: config.population_size,
            coefficients: config.coefficients,
        }
    }
}
