//! Tests for box tessellation.

use super::*;
use crate::core::point::Point;
use crate::error::GeneratorError;
use crate::mesh::TriangleSoup;
use approx::assert_relative_eq;

fn soup_of<F: Figure>(figure: &F) -> TriangleSoup {
    let mut soup = TriangleSoup::new();
    figure.tessellate(&mut soup).unwrap();
    soup
}

#[test]
fn test_from_dimensions_corners() {
    let cube = Cuboid::from_dimensions(2.0, 4.0, 6.0).unwrap();
    assert_eq!(cube.top.p1, Point::new(-1.0, 2.0, -3.0));
    assert_eq!(cube.top.p4, Point::new(1.0, 2.0, 3.0));
    assert_eq!(cube.bottom.p2, Point::new(-1.0, -2.0, 3.0));
    assert_eq!(cube.bottom.p3, Point::new(1.0, -2.0, -3.0));
}

#[test]
fn test_triangle_count_is_twelve_n_squared() {
    let cube = Cuboid::from_dimensions(1.0, 2.0, 3.0).unwrap();
    for n in 1..=4 {
        let soup = soup_of(&cube.subdivided(n));
        assert_eq!(soup.triangle_count() as u64, 12 * u64::from(n * n));
    }
    assert_eq!(soup_of(&cube).triangle_count(), 12);
}

#[test]
fn test_every_face_points_outward() {
    let cube = Cuboid::from_dimensions(2.0, 2.0, 2.0).unwrap();
    for face in cube.faces() {
        let centroid = (face.p1 + face.p2 + face.p3 + face.p4) / 4.0;
        for tri in face.triangles() {
            assert!(tri.face_normal().dot(centroid) > 0.0, "face {face:?}");
        }
    }
}

#[test]
fn test_signed_volume_matches_dimensions() {
    let cube = Cuboid::from_dimensions(2.0, 3.0, 4.0).unwrap();
    let soup = soup_of(&cube.subdivided(3));
    assert_relative_eq!(soup.signed_volume(), 24.0, epsilon = 1e-9);
}

#[test]
fn test_top_face_is_last() {
    let cube = Cuboid::from_dimensions(2.0, 2.0, 2.0).unwrap();
    let soup = soup_of(&cube);
    let last: Vec<_> = soup.triangles().skip(10).collect();
    assert_eq!(last, cube.top.triangles().to_vec());
}

#[test]
fn test_invalid_dimensions() {
    for (w, h, d) in [(0.0, 1.0, 1.0), (1.0, -1.0, 1.0), (1.0, 1.0, f64::NAN)] {
        assert!(matches!(
            Cuboid::from_dimensions(w, h, d),
            Err(GeneratorError::InvalidParameter { .. })
        ));
    }
}

#[test]
fn test_flat_box_is_degenerate() {
    let rect = Rectangle::from_width_depth(1.0, 1.0);
    let flat = Cuboid::new(rect, rect);
    let mut soup = TriangleSoup::new();
    let err = flat.subdivided(2).tessellate(&mut soup).unwrap_err();
    assert!(matches!(err, GeneratorError::DegenerateGeometry(_)));
    assert!(soup.is_empty());
}

#[test]
fn test_zero_divisions_rejected() {
    let cube = Cuboid::from_dimensions(1.0, 1.0, 1.0).unwrap();
    assert!(cube.subdivided(0).validate().is_err());
}
