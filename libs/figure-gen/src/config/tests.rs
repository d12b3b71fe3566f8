//! Tests covering generator configuration behavior.

use super::*;
use config::constants::{DEFAULT_MAX_TRIANGLES, FLOAT_PRECISION};

#[test]
fn default_matches_constants() {
    let cfg = GeneratorConfig::default();
    assert_eq!(cfg.max_triangles, DEFAULT_MAX_TRIANGLES);
    assert_eq!(cfg.precision, FLOAT_PRECISION);
}

#[test]
fn builder_validates_input() {
    let err = GeneratorConfig::new(0, 6).unwrap_err();
    assert_eq!(err, GeneratorConfigError(ConfigError::InvalidTriangleLimit(0)));
    assert!(err.to_string().contains("max_triangles"));
}

#[test]
fn converts_from_global_snapshot() {
    let global = GlobalConfig::new(12, 3).unwrap();
    let cfg = GeneratorConfig::from(global);
    assert_eq!(cfg.max_triangles, 12);
    assert_eq!(cfg.precision, 3);
}
