use figure_gen::bezier::{BezierFigure, BezierSurface};
use figure_gen::core::point::Point;
use figure_gen::model::{parse_model, read_model};
use figure_gen::primitives::{Cone, Cuboid, Cylinder, Rectangle, Sphere, Triangle};
use figure_gen::{write_figure, Figure, FigureKind, Generator};

fn assert_close(actual: &[Point], expected: &[Point]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!(a.distance(*e) < 1e-5, "{a} vs {e}");
    }
}

fn check<F: Figure>(figure: &F) {
    let mut text = Vec::new();
    write_figure(&mut text, figure).unwrap();
    let model = read_model(text.as_slice()).unwrap();
    let soup = Generator::default().generate(figure).unwrap();

    assert_eq!(model.kind, figure.kind());
    assert_close(model.soup.vertices(), soup.vertices());
    assert_close(model.soup.normals(), soup.normals());
}

fn wavy_surface() -> BezierSurface {
    let mut points = Vec::new();
    for r in 0..4 {
        for c in 0..4 {
            points.push(Point::new(c as f64, r as f64, ((r + c) % 2) as f64));
        }
    }
    let mut patch = [0u32; 16];
    for (k, slot) in patch.iter_mut().enumerate() {
        *slot = k as u32;
    }
    BezierSurface::new(vec![patch], points).unwrap()
}

#[test]
fn every_kind_round_trips() {
    check(&Triangle::new(Point::ZERO, Point::X, Point::Y));
    check(&Rectangle::from_width_depth(3.0, 1.0).subdivided(3));
    check(&Cuboid::from_dimensions(1.0, 2.0, 3.0).unwrap().subdivided(2));
    check(&Cone::new(1.0, 2.0, 10, 4));
    check(&Cylinder::new(0.5, 1.5, 9, 3));
    check(&Sphere::new(1.0, 8, 8));
    check(&BezierFigure::from_level(wavy_surface(), 1));
}

#[test]
fn sphere_normals_survive() {
    let mut text = Vec::new();
    write_figure(&mut text, &Sphere::new(3.0, 5, 7)).unwrap();
    let model = read_model(text.as_slice()).unwrap();

    assert!(model.soup.has_normals());
    assert_eq!(model.soup.normal_triangle_count(), model.soup.triangle_count());
    for n in model.soup.normals() {
        assert!((n.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn topology_file_to_model() {
    let mut topology = String::from("1\n");
    let indices: Vec<String> = (0..16).rev().map(|i: u32| i.to_string()).collect();
    topology.push_str(&indices.join(", "));
    topology.push_str("\n16\n");
    for k in 0..16 {
        topology.push_str(&format!("{}, {}, 0\n", k % 4, k / 4));
    }

    let surface = BezierSurface::parse(&topology).unwrap();
    let mut text = Vec::new();
    write_figure(&mut text, &BezierFigure::with_resolution(surface, 6)).unwrap();

    let model = parse_model(std::str::from_utf8(&text).unwrap()).unwrap();
    assert_eq!(model.kind, FigureKind::Bezier);
    assert_eq!(model.soup.triangle_count(), 2 * 36);
    assert!(model.soup.vertices().iter().all(|p| p.z == 0.0));
}
