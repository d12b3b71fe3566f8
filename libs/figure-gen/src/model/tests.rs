//! Tests for reading triangle streams.

use super::*;
use crate::error::GeneratorError;
use crate::figure::Figure;
use crate::primitives::{Cone, Cuboid, Sphere};
use crate::write_figure;

fn round_trip<F: Figure>(figure: &F) -> (TriangleSoup, Model) {
    let mut out = Vec::new();
    write_figure(&mut out, figure).unwrap();
    let model = read_model(out.as_slice()).unwrap();
    let mut soup = TriangleSoup::new();
    figure.tessellate(&mut soup).unwrap();
    (soup, model)
}

fn assert_points_close(actual: &[Point], expected: &[Point]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((*a - *e).abs().max_element() <= 1e-6, "{a} != {e}");
    }
}

fn parse_error(text: &str) -> ParseError {
    match parse_model(text) {
        Err(GeneratorError::Parse(error)) => error,
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_point() {
    assert_eq!(parse_point("  1 2 3 "), Ok(Point::new(1.0, 2.0, 3.0)));
    assert_eq!(
        parse_point("1 2 3 4"),
        Err(ParseErrorKind::TokenCount {
            expected: 3,
            found: 4
        })
    );
    assert_eq!(
        parse_point("1 x 3"),
        Err(ParseErrorKind::InvalidNumber { text: "x".into() })
    );
    assert!(parse_point("inf 0 0").is_err());
}

#[test]
fn test_round_trip_box() {
    let cube = Cuboid::from_dimensions(1.0, 2.0, 3.0).unwrap().subdivided(2);
    let (soup, model) = round_trip(&cube);
    assert_eq!(model.kind, FigureKind::Box);
    assert_points_close(model.soup.vertices(), soup.vertices());
    assert!(!model.soup.has_normals());
}

#[test]
fn test_round_trip_cone() {
    let (soup, model) = round_trip(&Cone::new(1.25, 3.0, 7, 3));
    assert_eq!(model.kind, FigureKind::Cone);
    assert_points_close(model.soup.vertices(), soup.vertices());
}

#[test]
fn test_round_trip_sphere_normals() {
    let (soup, model) = round_trip(&Sphere::new(2.0, 6, 4));
    assert_eq!(model.kind, FigureKind::Sphere);
    assert_points_close(model.soup.vertices(), soup.vertices());
    assert_points_close(model.soup.normals(), soup.normals());
    assert_eq!(model.soup.normal_triangle_count(), model.soup.triangle_count());
}

#[test]
fn test_blank_lines_ignored() {
    let model = parse_model("rectangle\n\n0 0 0\n0 0 1\n1 0 0\n\n").unwrap();
    assert_eq!(model.kind, FigureKind::Rectangle);
    assert_eq!(model.soup.vertex_count(), 3);
}

#[test]
fn test_unknown_figure() {
    let error = parse_error("torus\n0 0 0\n");
    assert_eq!(error.line, 1);
    assert_eq!(
        error.kind,
        ParseErrorKind::UnknownFigure {
            tag: "torus".into()
        }
    );
}

#[test]
fn test_empty_input() {
    let error = parse_error("");
    assert!(matches!(error.kind, ParseErrorKind::UnexpectedEof { .. }));
}

#[test]
fn test_truncated_triangle() {
    let error = parse_error("triangle\n0 0 0\n1 0 0\n");
    assert_eq!(error.kind, ParseErrorKind::TruncatedTriangle { vertices: 2 });

    let error = parse_error("sphere\n0 0 0\nnormals\n");
    assert_eq!(error.line, 3);
}

#[test]
fn test_bad_record_reports_line() {
    let error = parse_error("cone\n0 0 0\n1 0\n");
    assert_eq!(error.line, 3);
    assert_eq!(
        error.kind,
        ParseErrorKind::TokenCount {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_second_separator_rejected() {
    let error = parse_error("sphere\nnormals\nnormals\n");
    assert_eq!(error.line, 3);
}
