//! # Bezier Surfaces
//!
//! Bicubic Bezier patches over a shared control-point pool.
//!
//! Each patch gathers its 16 control points into a 4x4 grid `P` and keeps
//! the coefficient grid `M · P · Mᵀ`. A sample then costs two cubic
//! polynomials: one in `u` per coefficient row, one in `v` across the rows.
//! `u` runs along a row of control points, `v` across rows.
//!
//! ## Example
//!
//! ```rust
//! use figure_gen::bezier::{BezierFigure, BezierSurface};
//! use figure_gen::Figure;
//!
//! let text = "1\n\
//!             0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15\n\
//!             16\n\
//!             0, 0, 0\n1, 0, 0\n2, 0, 0\n3, 0, 0\n\
//!             0, 1, 0\n1, 1, 0\n2, 1, 0\n3, 1, 0\n\
//!             0, 2, 0\n1, 2, 0\n2, 2, 0\n3, 2, 0\n\
//!             0, 3, 0\n1, 3, 0\n2, 3, 0\n3, 3, 0\n";
//! let surface = BezierSurface::parse(text).unwrap();
//! let figure = BezierFigure::from_level(surface, 2);
//! assert_eq!(figure.resolution(), 8);
//! assert_eq!(figure.triangle_count(), 128);
//! ```

mod topology;

pub use topology::PatchIndices;

use crate::core::matrix::{mult_mpm, PointGrid, BEZIER_BASIS};
use crate::core::point::Point;
use crate::error::{GeneratorError, GeneratorResult};
use crate::figure::{Figure, FigureKind};
use crate::mesh::TriangleSink;
use crate::primitives::{require_count, Rectangle};
use config::constants::BEZIER_SAMPLES_PER_LEVEL;
use serde::{Deserialize, Serialize};
use std::io::Read;


// =============================================================================
// SURFACE
// =============================================================================

/// A set of patches indexing into one control-point pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierSurface {
    patches: Vec<PatchIndices>,
    control_points: Vec<Point>,
}

impl BezierSurface {
    /// Creates a surface, checking every index against the pool.
    pub fn new(patches: Vec<PatchIndices>, control_points: Vec<Point>) -> GeneratorResult<Self> {
        let surface = Self {
            patches,
            control_points,
        };
        surface.check_indices()?;
        Ok(surface)
    }

    /// Parses the text topology format.
    pub fn parse(text: &str) -> GeneratorResult<Self> {
        let topology = topology::parse_topology(text)?;
        Self::new(topology.patches, topology.control_points)
    }

    /// Reads and parses a topology file.
    pub fn read<R: Read>(mut reader: R) -> GeneratorResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Patch index lists, in file order.
    pub fn patches(&self) -> &[PatchIndices] {
        &self.patches
    }

    /// The shared control-point pool.
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Number of patches.
    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    /// Control points of patch `index` as a 4x4 grid.
    ///
    /// Returns `None` if the patch does not exist or references a missing
    /// control point.
    pub fn control_grid(&self, index: usize) -> Option<PointGrid> {
        let indices = self.patches.get(index)?;
        self.gather(index, indices).ok()
    }

    /// Precomputed evaluator for patch `index`.
    pub fn patch(&self, index: usize) -> Option<BezierPatch> {
        self.control_grid(index).map(|grid| BezierPatch::new(&grid))
    }

    fn gather(&self, patch: usize, indices: &PatchIndices) -> GeneratorResult<PointGrid> {
        let available = self.control_points.len();
        let mut grid = [[Point::ZERO; 4]; 4];
        for (k, &index) in indices.iter().enumerate() {
            grid[k / 4][k % 4] = *self.control_points.get(index as usize).ok_or(
                GeneratorError::IndexOutOfRange {
                    patch,
                    index,
                    available,
                },
            )?;
        }
        Ok(grid)
    }

    fn check_indices(&self) -> GeneratorResult<()> {
        self.patches
            .iter()
            .enumerate()
            .try_for_each(|(patch, indices)| self.gather(patch, indices).map(|_| ()))
    }
}

// =============================================================================
// PATCH EVALUATOR
// =============================================================================

/// One patch reduced to its `M · P · Mᵀ` coefficient grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPatch {
    coefficients: PointGrid,
}

impl BezierPatch {
    /// Builds the evaluator for a grid of control points.
    pub fn new(control: &PointGrid) -> Self {
        Self {
            coefficients: mult_mpm(&BEZIER_BASIS, control),
        }
    }

    /// The `M · P · Mᵀ` grid.
    pub fn coefficients(&self) -> &PointGrid {
        &self.coefficients
    }

    /// Surface point at `(u, v)` in `[0, 1]²`.
    #[inline]
    pub fn point(&self, u: f64, v: f64) -> Point {
        let cubic = |row: &[Point; 4], t: f64| ((row[0] * t + row[1]) * t + row[2]) * t + row[3];
        let collapsed = self.coefficients.map(|row| cubic(&row, u));
        cubic(&collapsed, v)
    }

    /// Streams `resolution × resolution` cells, two triangles each.
    fn emit<S: TriangleSink + ?Sized>(&self, resolution: u32, sink: &mut S) -> GeneratorResult<()> {
        let n = f64::from(resolution);
        for i in 1..=resolution {
            let u0 = f64::from(i - 1) / n;
            let u = f64::from(i) / n;
            for j in 1..=resolution {
                let v0 = f64::from(j - 1) / n;
                let v = f64::from(j) / n;
                sink.push_rectangle(&Rectangle::new(
                    self.point(u, v0),
                    self.point(u, v),
                    self.point(u0, v0),
                    self.point(u0, v),
                ))?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// FIGURE
// =============================================================================

/// A surface sampled on a regular `resolution × resolution` grid per patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierFigure {
    surface: BezierSurface,
    resolution: u32,
}

impl BezierFigure {
    /// Samples each patch on `resolution` cells per parameter axis.
    pub fn with_resolution(surface: BezierSurface, resolution: u32) -> Self {
        Self {
            surface,
            resolution,
        }
    }

    /// Samples each patch at `level × BEZIER_SAMPLES_PER_LEVEL` cells per axis.
    pub fn from_level(surface: BezierSurface, level: u32) -> Self {
        Self::with_resolution(surface, level.saturating_mul(BEZIER_SAMPLES_PER_LEVEL))
    }

    /// The sampled surface.
    pub fn surface(&self) -> &BezierSurface {
        &self.surface
    }

    /// Cells per parameter axis.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }
}

impl Figure for BezierFigure {
    fn kind(&self) -> FigureKind {
        FigureKind::Bezier
    }

    fn validate(&self) -> GeneratorResult<()> {
        require_count("resolution", self.resolution)?;
        self.surface.check_indices()
    }

    fn triangle_count(&self) -> u64 {
        let n = u64::from(self.resolution);
        (self.surface.patch_count() as u64)
            .saturating_mul(n.saturating_mul(n))
            .saturating_mul(2)
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.validate()?;
        for (index, indices) in self.surface.patches.iter().enumerate() {
            let patch = BezierPatch::new(&self.surface.gather(index, indices)?);
            patch.emit(self.resolution, sink)?;
        }
        Ok(())
    }
}
