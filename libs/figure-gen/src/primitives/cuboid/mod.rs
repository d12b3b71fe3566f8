//! # Box Primitive
//!
//! A box spanned by the corresponding corners of a top and a bottom
//! rectangle. Its six faces go through the rectangle subdivision, in the
//! order back-left, back-right, base, front-left, front-right, top.

use crate::error::GeneratorResult;
use crate::figure::{Figure, FigureKind, Subdivided};
use crate::mesh::TriangleSink;
use crate::primitives::rectangle::quad_triangle_count;
use crate::primitives::{require_count, require_positive, Rectangle};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Box given by two rectangles; `top.pK` pairs with `bottom.pK`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    /// Upper face, wound counter-clockwise seen from above
    pub top: Rectangle,
    /// Lower face, same corner order as `top`
    pub bottom: Rectangle,
}

impl Cuboid {
    /// Creates a box from its top and bottom faces.
    pub const fn new(top: Rectangle, bottom: Rectangle) -> Self {
        Self { top, bottom }
    }

    /// Axis-aligned box centered at the origin.
    ///
    /// The top face lies on `y = height / 2`, the bottom on `y = -height / 2`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use figure_gen::Figure;
    /// use figure_gen::primitives::Cuboid;
    ///
    /// let cube = Cuboid::from_dimensions(2.0, 2.0, 2.0).unwrap();
    /// assert_eq!(cube.subdivided(3).triangle_count(), 108);
    /// assert!(Cuboid::from_dimensions(2.0, -1.0, 2.0).is_err());
    /// ```
    pub fn from_dimensions(width: f64, height: f64, depth: f64) -> GeneratorResult<Self> {
        require_positive("width", width)?;
        require_positive("height", height)?;
        require_positive("depth", depth)?;
        let half = height / 2.0;
        Ok(Self::new(
            Rectangle::at_height(width, depth, half),
            Rectangle::at_height(width, depth, -half),
        ))
    }

    /// The six faces in emission order.
    pub fn faces(&self) -> [Rectangle; 6] {
        let Rectangle { p1, p2, p3, p4 } = self.top;
        let Rectangle {
            p1: p5,
            p2: p6,
            p3: p7,
            p4: p8,
        } = self.bottom;

        [
            Rectangle::new(p1, p5, p2, p6),
            Rectangle::new(p3, p7, p1, p5),
            Rectangle::new(p7, p8, p5, p6),
            Rectangle::new(p2, p6, p4, p8),
            Rectangle::new(p4, p8, p3, p7),
            self.top,
        ]
    }

    /// Wraps this box with `divisions` sub-quads per face edge.
    pub fn subdivided(self, divisions: u32) -> Subdivided<Cuboid> {
        Subdivided::new(self, divisions)
    }

    fn check_faces(&self) -> GeneratorResult<()> {
        self.faces().iter().try_for_each(Rectangle::check_edges)
    }
}

impl Figure for Subdivided<Cuboid> {
    fn kind(&self) -> FigureKind {
        FigureKind::Box
    }

    fn validate(&self) -> GeneratorResult<()> {
        require_count("divisions", self.divisions)?;
        self.shape.check_faces()
    }

    fn triangle_count(&self) -> u64 {
        quad_triangle_count(self.divisions).saturating_mul(6)
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.validate()?;
        for face in self.shape.faces() {
            face.emit_subdivided(self.divisions, sink)?;
        }
        Ok(())
    }
}

impl Figure for Cuboid {
    fn kind(&self) -> FigureKind {
        FigureKind::Box
    }

    fn validate(&self) -> GeneratorResult<()> {
        self.check_faces()
    }

    fn triangle_count(&self) -> u64 {
        12
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.subdivided(1).tessellate(sink)
    }
}
