//! # Triangle Soup
//!
//! In-memory triangle stream: positions and, for figures that carry them,
//! normals. No index buffer; every triangle owns its three vertices.

pub mod sink;

pub use sink::TriangleSink;

use crate::core::point::Point;
use crate::error::GeneratorResult;
use crate::primitives::Triangle;

/// A materialized triangle stream.
///
/// Vertices are stored three per triangle in stream order. The normal
/// block, when present, is index-aligned with the position block.
///
/// # Example
///
/// ```rust
/// use figure_gen::{TriangleSink, TriangleSoup};
/// use figure_gen::core::point::Point;
/// use figure_gen::primitives::Triangle;
///
/// let mut soup = TriangleSoup::new();
/// soup.push(Triangle::new(Point::ZERO, Point::X, Point::Y)).unwrap();
/// assert_eq!(soup.triangle_count(), 1);
/// assert_eq!(soup.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    /// Position vertices, 3 per triangle
    vertices: Vec<Point>,
    /// Normal vertices, 3 per triangle
    normals: Vec<Point>,
    /// Set once the position block has been closed
    in_normals: bool,
}

impl TriangleSoup {
    /// Creates an empty soup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a soup with room for `triangle_count` position triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangle_count * 3),
            normals: Vec::new(),
            in_normals: false,
        }
    }

    /// Builds a soup from already separated vertex blocks.
    ///
    /// Both blocks must hold whole triangles; the model reader checks this
    /// before calling.
    pub(crate) fn from_parts(vertices: Vec<Point>, normals: Vec<Point>) -> Self {
        let in_normals = !normals.is_empty();
        Self {
            vertices,
            normals,
            in_normals,
        }
    }

    /// Returns the number of position vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of position triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of normal triangles.
    #[inline]
    pub fn normal_triangle_count(&self) -> usize {
        self.normals.len() / 3
    }

    /// Returns true if no position triangle has been received.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the soup carries a normal block.
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Returns the position vertices in stream order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns the normal vertices in stream order.
    #[inline]
    pub fn normals(&self) -> &[Point] {
        &self.normals
    }

    /// Iterates over the position triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0], v[1], v[2]))
    }

    /// Iterates over the normal triangles.
    pub fn normal_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.normals
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0], v[1], v[2]))
    }

    /// Computes the axis-aligned bounding box of the positions.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Point, Point) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (Point::ZERO, Point::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Signed volume enclosed by the position triangles.
    ///
    /// Positive for a closed surface whose triangles wind counter-clockwise
    /// when seen from outside.
    pub fn signed_volume(&self) -> f64 {
        self.triangles()
            .map(|t| t.p1.dot(t.p2.cross(t.p3)))
            .sum::<f64>()
            / 6.0
    }
}

impl TriangleSink for TriangleSoup {
    fn push(&mut self, triangle: Triangle) -> GeneratorResult<()> {
        let block = if self.in_normals {
            &mut self.normals
        } else {
            &mut self.vertices
        };
        block.extend_from_slice(&triangle.vertices());
        Ok(())
    }

    fn begin_normals(&mut self) -> GeneratorResult<()> {
        self.in_normals = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(Point::ZERO, Point::X, Point::Y)
    }

    #[test]
    fn test_soup_new() {
        let soup = TriangleSoup::new();
        assert!(soup.is_empty());
        assert_eq!(soup.vertex_count(), 0);
        assert_eq!(soup.triangle_count(), 0);
        assert!(!soup.has_normals());
    }

    #[test]
    fn test_soup_push_switches_block() {
        let mut soup = TriangleSoup::new();
        soup.push(unit_triangle()).unwrap();
        soup.begin_normals().unwrap();
        soup.push(Triangle::new(Point::Z, Point::Z, Point::Z)).unwrap();

        assert_eq!(soup.triangle_count(), 1);
        assert_eq!(soup.normal_triangle_count(), 1);
        assert_eq!(soup.normals()[0], Point::Z);
        assert_eq!(soup.vertices()[1], Point::X);
    }

    #[test]
    fn test_soup_push_rectangle() {
        use crate::primitives::Rectangle;

        let rect = Rectangle::from_width_depth(2.0, 2.0);
        let mut soup = TriangleSoup::new();
        soup.push_rectangle(&rect).unwrap();

        let triangles: Vec<_> = soup.triangles().collect();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0], Triangle::new(rect.p1, rect.p2, rect.p3));
        assert_eq!(triangles[1], Triangle::new(rect.p3, rect.p2, rect.p4));
    }

    #[test]
    fn test_soup_bounding_box() {
        let mut soup = TriangleSoup::new();
        soup.push(Triangle::new(
            Point::new(-1.0, -2.0, -3.0),
            Point::new(4.0, 5.0, 6.0),
            Point::ZERO,
        ))
        .unwrap();
        let (min, max) = soup.bounding_box();
        assert_eq!(min, Point::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Point::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_soup_empty_bounding_box() {
        assert_eq!(TriangleSoup::new().bounding_box(), (Point::ZERO, Point::ZERO));
    }

    #[test]
    fn test_triangle_through_origin_has_no_volume() {
        let mut soup = TriangleSoup::new();
        soup.push(unit_triangle()).unwrap();
        // Triangle through the origin encloses nothing
        assert_eq!(soup.signed_volume(), 0.0);
    }
}
