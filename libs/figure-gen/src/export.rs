//! # Triangle Stream Export
//!
//! Text serialization of a figure for the viewer:
//!
//! ```text
//! <kind tag>
//! x y z            three lines per triangle, in emission order
//! normals          sphere only
//! x y z            normal block, index-aligned with the positions
//! ```
//!
//! Coordinates are written with a fixed number of decimals, space separated.

use crate::error::GeneratorResult;
use crate::figure::{Figure, FigureKind};
use crate::generator::Generator;
use crate::mesh::TriangleSink;
use crate::primitives::Triangle;
use config::constants::{FLOAT_PRECISION, NORMALS_SEPARATOR};
use std::io::Write;

/// A [`TriangleSink`] that writes the text stream to `W`.
///
/// The tag line is written on construction. Call [`TriangleWriter::finish`]
/// to flush; dropping the writer without it may lose buffered output.
///
/// # Example
///
/// ```rust
/// use figure_gen::export::TriangleWriter;
/// use figure_gen::primitives::Triangle;
/// use figure_gen::core::point::Point;
/// use figure_gen::{FigureKind, TriangleSink};
///
/// let mut writer = TriangleWriter::new(Vec::new(), FigureKind::Triangle).unwrap();
/// writer.push(Triangle::new(Point::ZERO, Point::X, Point::Y)).unwrap();
/// let text = String::from_utf8(writer.finish().unwrap()).unwrap();
/// assert!(text.starts_with("triangle\n0.000000 0.000000 0.000000\n"));
/// ```
pub struct TriangleWriter<W: Write> {
    out: W,
    precision: usize,
    triangles: u64,
}

impl<W: Write> TriangleWriter<W> {
    /// Starts a stream for `kind` with the default precision.
    pub fn new(out: W, kind: FigureKind) -> GeneratorResult<Self> {
        Self::with_precision(out, kind, FLOAT_PRECISION)
    }

    /// Starts a stream for `kind` writing `precision` decimals per coordinate.
    pub fn with_precision(mut out: W, kind: FigureKind, precision: usize) -> GeneratorResult<Self> {
        writeln!(out, "{}", kind.tag())?;
        Ok(Self {
            out,
            precision,
            triangles: 0,
        })
    }

    /// Triangles written so far, positions and normals together.
    pub fn triangles_written(&self) -> u64 {
        self.triangles
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> GeneratorResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> TriangleSink for TriangleWriter<W> {
    fn push(&mut self, triangle: Triangle) -> GeneratorResult<()> {
        let p = self.precision;
        for v in triangle.vertices() {
            writeln!(self.out, "{:.*} {:.*} {:.*}", p, v.x, p, v.y, p, v.z)?;
        }
        self.triangles += 1;
        Ok(())
    }

    fn begin_normals(&mut self) -> GeneratorResult<()> {
        writeln!(self.out, "{NORMALS_SEPARATOR}")?;
        Ok(())
    }
}

/// Writes `figure` as a complete triangle stream with default settings.
///
/// # Example
///
/// ```rust
/// use figure_gen::write_figure;
/// use figure_gen::primitives::Rectangle;
///
/// let mut out = Vec::new();
/// write_figure(&mut out, &Rectangle::from_width_depth(2.0, 2.0).subdivided(1)).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().count(), 1 + 2 * 3);
/// ```
pub fn write_figure<W: Write, F: Figure>(out: W, figure: &F) -> GeneratorResult<()> {
    Generator::default().write(out, figure)
}
