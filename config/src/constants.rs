//! # Configuration Constants
//!
//! Centralized constants for the figure generator. Geometry tolerances,
//! tessellation defaults, output limits and wire-format details are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Sampling density of parametric surfaces
//! - **Limits**: Maximum output sizes for safety bounds
//! - **Wire Format**: Triangle-stream text layout

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum edge length accepted before a direction is normalized.
///
/// Rectangle subdivision normalizes the two edge vectors of a quad. Edges
/// shorter than this value are reported as degenerate geometry instead of
/// producing NaN coordinates.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON_TOLERANCE;
///
/// fn is_degenerate(length: f64) -> bool {
///     length < EPSILON_TOLERANCE
/// }
///
/// assert!(is_degenerate(0.0));
/// assert!(!is_degenerate(0.5));
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Tolerance for unit-length checks on emitted normals.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_TOLERANCE;
///
/// let length: f64 = 1.0 + 1e-7;
/// assert!((length - 1.0).abs() < NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f64 = 1.0e-5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of Bezier grid samples per tessellation level along each
/// parametric axis.
///
/// A patch tessellated at level `T` is sampled on a `(4T) x (4T)` grid.
///
/// # Example
///
/// ```rust
/// use config::constants::BEZIER_SAMPLES_PER_LEVEL;
///
/// let level = 2;
/// let resolution = level * BEZIER_SAMPLES_PER_LEVEL;
/// assert_eq!(resolution, 8);
/// ```
pub const BEZIER_SAMPLES_PER_LEVEL: u32 = 4;

/// Number of control points in a bicubic patch (4 x 4).
pub const BEZIER_PATCH_SIZE: usize = 16;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Default upper bound on the number of position triangles a single
/// generation request may emit.
///
/// Slice, stack and tessellation counts come straight from the caller, so
/// output size is bounded before anything is written.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MAX_TRIANGLES;
///
/// let requested: u64 = 2 * 64 * 64;
/// assert!(requested <= DEFAULT_MAX_TRIANGLES);
/// ```
pub const DEFAULT_MAX_TRIANGLES: u64 = 50_000_000;

// =============================================================================
// WIRE FORMAT CONSTANTS
// =============================================================================

/// Number of decimal places written per coordinate (`%f` equivalent).
pub const FLOAT_PRECISION: usize = 6;

/// Largest accepted precision; `f64` carries no more significant digits.
pub const MAX_FLOAT_PRECISION: usize = 17;

/// Separator line between the position and normal blocks of a stream.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMALS_SEPARATOR;
///
/// assert_eq!(NORMALS_SEPARATOR, "normals");
/// ```
pub const NORMALS_SEPARATOR: &str = "normals";

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of the generator settings that can be shared between
/// crates or loaded by a front end.
///
/// # Examples
/// ```
/// use config::constants::{GlobalConfig, FLOAT_PRECISION};
/// let config = GlobalConfig::default();
/// assert_eq!(config.precision, FLOAT_PRECISION);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Maximum number of position triangles per generation request.
    pub max_triangles: u64,
    /// Decimal places written per coordinate.
    pub precision: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// triangle budget and output precision.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1_000, 4).expect("valid config");
    /// assert_eq!(cfg.max_triangles, 1_000);
    /// ```
    pub fn new(max_triangles: u64, precision: usize) -> Result<Self, ConfigError> {
        if max_triangles == 0 {
            return Err(ConfigError::InvalidTriangleLimit(max_triangles));
        }
        if precision == 0 || precision > MAX_FLOAT_PRECISION {
            return Err(ConfigError::InvalidPrecision(precision));
        }
        Ok(Self {
            max_triangles,
            precision,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_triangles: DEFAULT_MAX_TRIANGLES,
            precision: FLOAT_PRECISION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the triangle budget would reject every figure.
    InvalidTriangleLimit(u64),
    /// Raised when precision is zero or beyond what `f64` can carry.
    InvalidPrecision(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTriangleLimit(value) => {
                write!(f, "max_triangles must be >= 1: {value}")
            }
            ConfigError::InvalidPrecision(value) => {
                write!(f, "precision must be within 1..={MAX_FLOAT_PRECISION}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
