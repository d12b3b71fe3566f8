//! # Figure Gen
//!
//! Procedural mesh generation for primitive shapes and Bezier surfaces.
//! Converts parametric descriptions into triangle soups and streams them in
//! the line-oriented text format read by the viewer.
//!
//! ## Architecture
//!
//! ```text
//! Shape parameters / Bezier topology
//!       ↓
//! Figure::tessellate
//!       ↓
//! TriangleSink (TriangleWriter → text, TriangleSoup → memory)
//!       ↓
//! model::read_model (text → TriangleSoup)
//! ```
//!
//! ## Shapes
//!
//! - **Triangle**: streamed as given
//! - **Rectangle**: planar quad, optionally subdivided `n × n`
//! - **Box**: six subdivided quads over two rectangles
//! - **Cone / Cylinder**: sliced and stacked around the y axis
//! - **Sphere**: latitude/longitude grid with a normal block
//! - **Bezier**: bicubic patches over a shared control-point pool
//!
//! ## Usage
//!
//! ```rust
//! use figure_gen::primitives::Cylinder;
//! use figure_gen::{model, write_figure, FigureKind};
//!
//! let mut out = Vec::new();
//! write_figure(&mut out, &Cylinder::new(1.0, 2.0, 8, 2)).unwrap();
//!
//! let model = model::read_model(out.as_slice()).unwrap();
//! assert_eq!(model.kind, FigureKind::Cylinder);
//! assert_eq!(model.soup.triangle_count(), 8 * (2 * 2 + 2));
//! ```

pub mod bezier;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod figure;
pub mod generator;
pub mod mesh;
pub mod model;
pub mod primitives;

pub use error::{GeneratorError, GeneratorResult};
pub use export::{write_figure, TriangleWriter};
pub use figure::{Figure, FigureKind, Subdivided};
pub use generator::Generator;
pub use mesh::{TriangleSink, TriangleSoup};
