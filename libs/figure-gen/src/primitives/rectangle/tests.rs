//! Tests for rectangle tessellation.

use super::*;
use crate::mesh::TriangleSoup;
use approx::assert_relative_eq;

fn unit_square() -> Rectangle {
    Rectangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 1.0),
    )
}

fn tessellate<F: Figure>(figure: &F) -> TriangleSoup {
    let mut soup = TriangleSoup::new();
    figure.tessellate(&mut soup).unwrap();
    soup
}

#[test]
fn test_undivided_split() {
    let rect = unit_square();
    let soup = tessellate(&rect);
    let tris: Vec<_> = soup.triangles().collect();
    assert_eq!(tris.len(), 2);
    assert_eq!(tris[0], Triangle::new(rect.p1, rect.p2, rect.p3));
    assert_eq!(tris[1], Triangle::new(rect.p3, rect.p2, rect.p4));
}

#[test]
fn test_single_division_matches_undivided() {
    let rect = unit_square();
    let plain: Vec<_> = tessellate(&rect).triangles().collect();
    let divided: Vec<_> = tessellate(&rect.subdivided(1)).triangles().collect();
    for (a, b) in plain.iter().zip(&divided) {
        for (p, q) in a.vertices().iter().zip(b.vertices()) {
            assert_relative_eq!(p.distance(q), 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_triangle_count_is_two_n_squared() {
    let rect = Rectangle::from_width_depth(3.0, 5.0);
    for n in 1..=6 {
        let figure = rect.subdivided(n);
        let soup = tessellate(&figure);
        assert_eq!(soup.triangle_count() as u64, 2 * u64::from(n * n));
        assert_eq!(figure.triangle_count(), 2 * u64::from(n * n));
    }
}

#[test]
fn test_subdivision_tiles_the_quad() {
    let rect = Rectangle::from_width_depth(2.0, 4.0);
    let soup = tessellate(&rect.subdivided(4));

    // Every sub-triangle is half a 0.5 x 1.0 cell.
    let area: f64 = soup
        .triangles()
        .map(|t| t.face_normal().length() / 2.0)
        .sum();
    assert_relative_eq!(area, 8.0, epsilon = 1e-9);

    let (min, max) = soup.bounding_box();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(min.z, -2.0, epsilon = 1e-12);
    assert_relative_eq!(max.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(max.z, 2.0, epsilon = 1e-12);
}

#[test]
fn test_subdivision_keeps_winding() {
    let rect = Rectangle::from_width_depth(2.0, 2.0);
    let reference = rect.triangles()[0].face_normal().normalize();
    for tri in tessellate(&rect.subdivided(3)).triangles() {
        assert_relative_eq!(tri.face_normal().normalize().dot(reference), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_from_width_depth_corners() {
    let rect = Rectangle::from_width_depth(2.0, 4.0);
    assert_eq!(rect.p1, Point::new(-1.0, 0.0, -2.0));
    assert_eq!(rect.p2, Point::new(-1.0, 0.0, 2.0));
    assert_eq!(rect.p3, Point::new(1.0, 0.0, -2.0));
    assert_eq!(rect.p4, Point::new(1.0, 0.0, 2.0));
}

#[test]
fn test_zero_divisions_rejected() {
    let mut soup = TriangleSoup::new();
    let err = unit_square().subdivided(0).tessellate(&mut soup).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::InvalidParameter { parameter: "divisions", .. }
    ));
    assert!(soup.is_empty());
}

#[test]
fn test_degenerate_edge_rejected() {
    let p = Point::new(1.0, 1.0, 1.0);
    let rect = Rectangle::new(p, p, Point::new(2.0, 1.0, 1.0), Point::new(2.0, 1.0, 1.0));
    let err = rect.subdivided(2).validate().unwrap_err();
    assert!(matches!(err, GeneratorError::DegenerateGeometry(_)));
}

#[test]
fn test_rectangle_deserializes() {
    let json = r#"{"p1":[0,0,0],"p2":[0,0,1],"p3":[1,0,0],"p4":[1,0,1]}"#;
    let rect: Rectangle = serde_json::from_str(json).unwrap();
    assert_eq!(rect, unit_square());
}
