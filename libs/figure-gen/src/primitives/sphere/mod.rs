//! # Sphere Primitive
//!
//! Latitude/longitude sphere centered at the origin.
//!
//! Samples are stored row-major, stack `i` and slice `j` at index
//! `i * (slices + 1) + j`, with latitude `i / stacks * π` measured from the
//! north pole and longitude `j / slices * 2π`. Triangles come from a linear
//! walk over `k ∈ [0, slices * stacks + slices)` emitting
//! `(k, k + slices + 1, k + slices)` and `(k + slices + 1, k, k + 1)`.
//!
//! The walk reaches past the south-pole row when `slices > stacks`; those
//! rows continue the latitude parametrization, so every index is defined.
//!
//! After the position block the stream switches to normals and repeats the
//! walk over the unit normals, so triangle `t` of both blocks is aligned.

use crate::core::point::{normalize, Point};
use crate::error::GeneratorResult;
use crate::figure::{Figure, FigureKind};
use crate::mesh::TriangleSink;
use crate::primitives::{require_count, require_positive, Triangle};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};


/// Sphere parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Sphere radius
    pub radius: f64,
    /// Longitude divisions
    pub slices: u32,
    /// Latitude divisions
    pub stacks: u32,
}

/// Position and normal samples of a sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGrid {
    /// Samples per row (`slices + 1`)
    pub row_len: usize,
    /// Positions, row-major
    pub positions: Vec<Point>,
    /// Unit normals, index-aligned with `positions`
    pub normals: Vec<Point>,
}

impl Sphere {
    /// Creates a sphere description. Parameters are checked on tessellation.
    pub const fn new(radius: f64, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            slices,
            stacks,
        }
    }

    /// Number of positions the triangle walk starts from.
    fn walk_len(&self) -> usize {
        let s = self.slices as usize;
        s * self.stacks as usize + s
    }

    /// Builds the sample grid, including any rows past the south pole the
    /// walk needs. Callers validate first.
    pub fn grid(&self) -> SphereGrid {
        let row_len = self.slices as usize + 1;
        // Highest index read is walk_len + slices.
        let needed = self.walk_len() + self.slices as usize + 1;
        let rows = (self.stacks as usize + 1).max(needed.div_ceil(row_len));

        let stacks = f64::from(self.stacks);
        let slices = f64::from(self.slices);
        let mut positions = Vec::with_capacity(rows * row_len);
        let mut normals = Vec::with_capacity(rows * row_len);

        for i in 0..rows {
            let (sin_lat, cos_lat) = (i as f64 / stacks * PI).sin_cos();
            for j in 0..row_len {
                let (sin_lon, cos_lon) = (j as f64 / slices * TAU).sin_cos();
                let position = Point::new(
                    self.radius * cos_lon * sin_lat,
                    self.radius * cos_lat,
                    self.radius * sin_lon * sin_lat,
                );
                positions.push(position);
                normals.push(normalize(position));
            }
        }

        SphereGrid {
            row_len,
            positions,
            normals,
        }
    }

    fn emit_walk<S: TriangleSink + ?Sized>(
        &self,
        samples: &[Point],
        sink: &mut S,
    ) -> GeneratorResult<()> {
        let s = self.slices as usize;
        for k in 0..self.walk_len() {
            sink.push(Triangle::new(samples[k], samples[k + s + 1], samples[k + s]))?;
            sink.push(Triangle::new(samples[k + s + 1], samples[k], samples[k + 1]))?;
        }
        Ok(())
    }
}

impl Figure for Sphere {
    fn kind(&self) -> FigureKind {
        FigureKind::Sphere
    }

    fn validate(&self) -> GeneratorResult<()> {
        require_positive("radius", self.radius)?;
        require_count("slices", self.slices)?;
        require_count("stacks", self.stacks)
    }

    /// Position triangles only; the normal block repeats the same count.
    fn triangle_count(&self) -> u64 {
        u64::from(self.stacks)
            .saturating_add(1)
            .saturating_mul(u64::from(self.slices))
            .saturating_mul(2)
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.validate()?;
        let grid = self.grid();
        self.emit_walk(&grid.positions, sink)?;
        sink.begin_normals()?;
        self.emit_walk(&grid.normals, sink)
    }
}
