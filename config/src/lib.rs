//! # Config Crate
//!
//! Centralized configuration constants for the figure generator.
//! All magic numbers and tunable parameters are defined here so that the
//! tessellators, the stream writer and the readers agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BEZIER_SAMPLES_PER_LEVEL, EPSILON_TOLERANCE};
//!
//! // Edges shorter than the tolerance cannot be normalized safely
//! let edge_length: f64 = 1e-12;
//! assert!(edge_length < EPSILON_TOLERANCE);
//!
//! // Bezier grid resolution derived from a tessellation level
//! let level = 3;
//! assert_eq!(level * BEZIER_SAMPLES_PER_LEVEL, 12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Wire Compatible**: Stream formatting matches the viewer's expectations
//! - **Validated Snapshots**: Runtime overrides go through [`constants::GlobalConfig::new`]

pub mod constants;
