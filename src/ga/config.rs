//! GA configuration.
//!
//! [`GaConfig`] holds the parameters of the evolutionary loop.

/// Configuration for the steady-state GA.
///
/// # Defaults
///
/// ```
/// use cover_heur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use cover_heur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(1000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Must be at least 1; the
    /// population size is invariant for the whole run.
    pub population_size: usize,

    /// Number of generations, i.e. replacement attempts. Zero is legal and
    /// returns the best of the initial random population.
    pub generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from entropy. The run holds a single seeded stream
    /// consumed sequentially by selection, crossover, and mutation.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        Ok(())
    }
}
