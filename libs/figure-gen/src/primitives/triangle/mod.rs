//! # Triangle Primitive
//!
//! The atomic element of every stream, and the figure that streams itself.

use crate::core::point::Point;
use crate::error::{GeneratorError, GeneratorResult};
use crate::figure::{Figure, FigureKind};
use crate::mesh::TriangleSink;
use serde::{Deserialize, Serialize};

/// Three points; their order defines the front face.
///
/// Degenerate triangles are not rejected when emitted by tessellators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex
    pub p1: Point,
    /// Second vertex
    pub p2: Point,
    /// Third vertex
    pub p3: Point,
}

impl Triangle {
    /// Creates a triangle from its vertices in winding order.
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    /// Returns the vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Unnormalized face normal, `(p2 - p1) × (p3 - p1)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use figure_gen::core::point::Point;
    /// use figure_gen::primitives::Triangle;
    ///
    /// let t = Triangle::new(Point::ZERO, Point::X, Point::Y);
    /// assert_eq!(t.face_normal(), Point::Z);
    /// ```
    pub fn face_normal(&self) -> Point {
        (self.p2 - self.p1).cross(self.p3 - self.p1)
    }
}

impl Figure for Triangle {
    fn kind(&self) -> FigureKind {
        FigureKind::Triangle
    }

    fn validate(&self) -> GeneratorResult<()> {
        if self.vertices().iter().all(|p| p.is_finite()) {
            Ok(())
        } else {
            Err(GeneratorError::invalid_parameter(
                "vertices",
                "coordinates must be finite",
            ))
        }
    }

    fn triangle_count(&self) -> u64 {
        1
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.validate()?;
        sink.push(*self)
    }
}
