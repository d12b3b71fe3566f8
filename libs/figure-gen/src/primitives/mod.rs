//! # Primitives
//!
//! Parameter types and tessellators for the primitive shapes.
//!
//! Every tessellator streams its triangles in a fixed order and winds them
//! counter-clockwise when seen from outside the shape.

pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod rectangle;
pub mod sphere;
pub mod triangle;

pub use cone::Cone;
pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use rectangle::Rectangle;
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::core::point::Point;
use crate::error::{GeneratorError, GeneratorResult};

/// Rejects zero, negative and non-finite lengths.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> GeneratorResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GeneratorError::invalid_parameter(
            parameter,
            format!("must be a positive finite number, got {value}"),
        ))
    }
}

/// Rejects resolution counts of zero.
pub(crate) fn require_count(parameter: &'static str, value: u32) -> GeneratorResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(GeneratorError::invalid_parameter(
            parameter,
            "must be at least 1",
        ))
    }
}

/// Point on a ring of radius `r` at height `y`, given `(sin θ, cos θ)`.
///
/// θ = 0 lies on +z and θ grows towards +x.
#[inline]
pub(crate) fn ring_point(r: f64, y: f64, (sin, cos): (f64, f64)) -> Point {
    Point::new(r * sin, y, r * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("radius", 1.0).is_ok());
        assert!(require_positive("radius", 0.0).is_err());
        assert!(require_positive("radius", -2.0).is_err());
        assert!(require_positive("radius", f64::NAN).is_err());
        assert!(require_positive("radius", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_count() {
        assert!(require_count("slices", 1).is_ok());
        let err = require_count("slices", 0).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidParameter { parameter: "slices", .. }
        ));
    }

    #[test]
    fn test_ring_point_orientation() {
        let p = ring_point(2.0, 1.0, 0.0_f64.sin_cos());
        assert_eq!(p, Point::new(0.0, 1.0, 2.0));
    }
}
