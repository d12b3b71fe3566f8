//! # Rectangle Primitive
//!
//! A planar quad given by four corners, where P1/P4 and P2/P3 are the
//! diagonals. Undivided, it splits into `(P1, P2, P3)` and `(P3, P2, P4)`.
//!
//! Subdivision walks `n × n` sub-quads along the edge directions
//! `normalize(P3 - P1)` and `normalize(P2 - P1)`. Step sizes are measured
//! on those two edges only, so a skewed quad is not corrected for.

use crate::core::point::{distance, normalize, Point};
use crate::error::{GeneratorError, GeneratorResult};
use crate::figure::{Figure, FigureKind, Subdivided};
use crate::mesh::TriangleSink;
use crate::primitives::{require_count, Triangle};
use config::constants::EPSILON_TOLERANCE;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Four corners of a planar quad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Origin corner
    pub p1: Point,
    /// Corner along the height edge
    pub p2: Point,
    /// Corner along the width edge
    pub p3: Point,
    /// Corner opposite `p1`
    pub p4: Point,
}

impl Rectangle {
    /// Creates a quad from its four corners.
    pub const fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// XZ-plane quad of the given width and depth, centered at the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use figure_gen::core::point::Point;
    /// use figure_gen::primitives::Rectangle;
    ///
    /// let rect = Rectangle::from_width_depth(2.0, 4.0);
    /// assert_eq!(rect.p1, Point::new(-1.0, 0.0, -2.0));
    /// assert_eq!(rect.p4, Point::new(1.0, 0.0, 2.0));
    /// ```
    pub fn from_width_depth(width: f64, depth: f64) -> Self {
        Self::at_height(width, depth, 0.0)
    }

    /// XZ-plane quad of the given width and depth, centered on `(0, y, 0)`.
    pub(crate) fn at_height(width: f64, depth: f64, y: f64) -> Self {
        let (w, d) = (width / 2.0, depth / 2.0);
        Self::new(
            Point::new(-w, y, -d),
            Point::new(-w, y, d),
            Point::new(w, y, -d),
            Point::new(w, y, d),
        )
    }

    /// The two triangles of the undivided quad.
    #[inline]
    pub fn triangles(&self) -> [Triangle; 2] {
        [
            Triangle::new(self.p1, self.p2, self.p3),
            Triangle::new(self.p3, self.p2, self.p4),
        ]
    }

    /// Wraps this quad with `divisions` sub-quads per edge.
    pub fn subdivided(self, divisions: u32) -> Subdivided<Rectangle> {
        Subdivided::new(self, divisions)
    }

    /// Checks that both measured edges have usable length.
    pub(crate) fn check_edges(&self) -> GeneratorResult<()> {
        if ![self.p1, self.p2, self.p3, self.p4]
            .iter()
            .all(|p| p.is_finite())
        {
            return Err(GeneratorError::invalid_parameter(
                "corners",
                "coordinates must be finite",
            ));
        }
        let width = distance(self.p3, self.p1);
        let height = distance(self.p2, self.p1);
        if width <= EPSILON_TOLERANCE || height <= EPSILON_TOLERANCE {
            return Err(GeneratorError::degenerate(format!(
                "quad edges have length {width} and {height}"
            )));
        }
        Ok(())
    }

    /// Streams the `n × n` subdivision. Callers validate first.
    pub(crate) fn emit_subdivided<S: TriangleSink + ?Sized>(
        &self,
        divisions: u32,
        sink: &mut S,
    ) -> GeneratorResult<()> {
        let n = f64::from(divisions);
        let vw = normalize(self.p3 - self.p1);
        let vh = normalize(self.p2 - self.p1);
        let w = distance(self.p3, self.p1) / n;
        let h = distance(self.p2, self.p1) / n;

        let corner = |i: u32, j: u32| self.p1 + vw * (f64::from(i) * w) + vh * (f64::from(j) * h);

        for i in 1..=divisions {
            for j in 1..=divisions {
                let sub = Rectangle::new(
                    corner(i - 1, j - 1),
                    corner(i - 1, j),
                    corner(i, j - 1),
                    corner(i, j),
                );
                sink.push_rectangle(&sub)?;
            }
        }
        Ok(())
    }
}

/// Triangles emitted for `divisions` sub-quads per edge.
pub(crate) fn quad_triangle_count(divisions: u32) -> u64 {
    let n = u64::from(divisions);
    n.saturating_mul(n).saturating_mul(2)
}

impl Figure for Rectangle {
    fn kind(&self) -> FigureKind {
        FigureKind::Rectangle
    }

    fn validate(&self) -> GeneratorResult<()> {
        self.check_edges()
    }

    fn triangle_count(&self) -> u64 {
        2
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.validate()?;
        sink.push_rectangle(self)
    }
}

impl Figure for Subdivided<Rectangle> {
    fn kind(&self) -> FigureKind {
        FigureKind::Rectangle
    }

    fn validate(&self) -> GeneratorResult<()> {
        require_count("divisions", self.divisions)?;
        self.shape.check_edges()
    }

    fn triangle_count(&self) -> u64 {
        quad_triangle_count(self.divisions)
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.validate()?;
        self.shape.emit_subdivided(self.divisions, sink)
    }
}
