//! Generator-level configuration building on the shared `config` crate.
//!
//! Keeps the tessellators and the stream writer decoupled from literal
//! constants.

use config::constants::{ConfigError, GlobalConfig};
use serde::{Deserialize, Serialize};

/// Settings applied by [`crate::Generator`] to every request.
///
/// # Examples
/// ```
/// use figure_gen::config::GeneratorConfig;
/// let cfg = GeneratorConfig::default();
/// assert_eq!(cfg.precision, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound on position triangles per figure.
    pub max_triangles: u64,
    /// Decimal places written per coordinate.
    pub precision: usize,
}

impl GeneratorConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use figure_gen::config::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(10_000, 4).unwrap();
    /// assert_eq!(cfg.max_triangles, 10_000);
    /// assert!(GeneratorConfig::new(0, 4).is_err());
    /// ```
    pub fn new(max_triangles: u64, precision: usize) -> Result<Self, GeneratorConfigError> {
        GlobalConfig::new(max_triangles, precision)
            .map(Self::from)
            .map_err(GeneratorConfigError)
    }
}

impl From<GlobalConfig> for GeneratorConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            max_triangles: cfg.max_triangles,
            precision: cfg.precision,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GlobalConfig::default().into()
    }
}

/// Error wrapper for invalid generator configuration.
#[derive(Debug, PartialEq)]
pub struct GeneratorConfigError(pub ConfigError);

impl std::fmt::Display for GeneratorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for GeneratorConfigError {}

#[cfg(test)]
mod tests;
