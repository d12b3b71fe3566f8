//! # Figures
//!
//! A figure is anything that can be tessellated into the triangle stream:
//! one of the primitives, a subdivided rectangle or box, or a Bezier
//! surface. Every figure carries the kind tag that heads its text stream.

use crate::error::GeneratorResult;
use crate::mesh::TriangleSink;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape kind written on the first line of a triangle stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    /// A single triangle
    Triangle,
    /// A planar quad, optionally subdivided
    Rectangle,
    /// Six quads over the corners of two rectangles
    Box,
    /// Cone with its base on `y = 0`
    Cone,
    /// Cylinder centered on the y axis
    Cylinder,
    /// Latitude/longitude sphere with normals
    Sphere,
    /// Bicubic Bezier patch set
    Bezier,
}

impl FigureKind {
    /// Every kind, in tag order.
    pub const ALL: [FigureKind; 7] = [
        FigureKind::Triangle,
        FigureKind::Rectangle,
        FigureKind::Box,
        FigureKind::Cone,
        FigureKind::Cylinder,
        FigureKind::Sphere,
        FigureKind::Bezier,
    ];

    /// The literal tag line for this kind (without newline).
    ///
    /// # Example
    ///
    /// ```rust
    /// use figure_gen::FigureKind;
    /// assert_eq!(FigureKind::Box.tag(), "box");
    /// ```
    pub const fn tag(self) -> &'static str {
        match self {
            FigureKind::Triangle => "triangle",
            FigureKind::Rectangle => "rectangle",
            FigureKind::Box => "box",
            FigureKind::Cone => "cone",
            FigureKind::Cylinder => "cylinder",
            FigureKind::Sphere => "sphere",
            FigureKind::Bezier => "bezier",
        }
    }

    /// Looks up the kind for a tag line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use figure_gen::FigureKind;
    /// assert_eq!(FigureKind::from_tag("sphere"), Some(FigureKind::Sphere));
    /// assert_eq!(FigureKind::from_tag("torus"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A shape that can be streamed as triangles.
///
/// `tessellate` validates the parameters before pushing the first
/// triangle, so a sink never sees output from an invalid figure.
pub trait Figure {
    /// Tag written at the head of the stream.
    fn kind(&self) -> FigureKind;

    /// Checks the parameters without emitting anything.
    fn validate(&self) -> GeneratorResult<()>;

    /// Number of position triangles `tessellate` emits.
    ///
    /// Saturates at `u64::MAX` for absurd parameter values.
    fn triangle_count(&self) -> u64;

    /// Pushes the figure's triangles into `sink` in traversal order.
    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()>;
}

/// A quad-based shape paired with its per-edge division count (`ndivs`).
///
/// # Example
///
/// ```rust
/// use figure_gen::{Figure, FigureKind};
/// use figure_gen::primitives::Rectangle;
///
/// let plane = Rectangle::from_width_depth(2.0, 2.0).subdivided(3);
/// assert_eq!(plane.kind(), FigureKind::Rectangle);
/// assert_eq!(plane.triangle_count(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Subdivided<T> {
    /// The undivided shape
    pub shape: T,
    /// Sub-quads per edge; must be at least 1
    pub divisions: u32,
}

impl<T> Subdivided<T> {
    /// Pairs `shape` with `divisions` sub-quads per edge.
    pub fn new(shape: T, divisions: u32) -> Self {
        Self { shape, divisions }
    }
}
