//! # Cylinder Primitive
//!
//! Centered on the y axis with caps on `y = ±height / 2`. Each sector emits
//! its bottom fan triangle, `stacks` side quads from bottom to top, then
//! its top fan triangle.

use crate::core::point::Point;
use crate::error::GeneratorResult;
use crate::figure::{Figure, FigureKind};
use crate::mesh::TriangleSink;
use crate::primitives::{require_count, require_positive, ring_point, Rectangle, Triangle};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;


/// Cylinder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// Cap radius
    pub radius: f64,
    /// Distance between the caps
    pub height: f64,
    /// Angular sectors
    pub slices: u32,
    /// Vertical bands
    pub stacks: u32,
}

impl Cylinder {
    /// Creates a cylinder description. Parameters are checked on tessellation.
    pub const fn new(radius: f64, height: f64, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            height,
            slices,
            stacks,
        }
    }
}

impl Figure for Cylinder {
    fn kind(&self) -> FigureKind {
        FigureKind::Cylinder
    }

    fn validate(&self) -> GeneratorResult<()> {
        require_positive("radius", self.radius)?;
        require_positive("height", self.height)?;
        require_count("slices", self.slices)?;
        require_count("stacks", self.stacks)
    }

    fn triangle_count(&self) -> u64 {
        u64::from(self.stacks)
            .saturating_mul(2)
            .saturating_add(2)
            .saturating_mul(u64::from(self.slices))
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.validate()?;

        let step = TAU / f64::from(self.slices);
        let half = self.height / 2.0;
        let band = self.height / f64::from(self.stacks);
        let bottom_center = Point::new(0.0, -half, 0.0);
        let top_center = Point::new(0.0, half, 0.0);

        for i in 0..self.slices {
            let here = (f64::from(i) * step).sin_cos();
            let next = (f64::from(i + 1) * step).sin_cos();
            let base_here = ring_point(self.radius, -half, here);
            let base_next = ring_point(self.radius, -half, next);

            sink.push(Triangle::new(base_here, bottom_center, base_next))?;

            for j in 0..self.stacks {
                let lower = Point::new(0.0, f64::from(j) * band, 0.0);
                let upper = Point::new(0.0, f64::from(j + 1) * band, 0.0);
                sink.push_rectangle(&Rectangle::new(
                    base_here + upper,
                    base_here + lower,
                    base_next + upper,
                    base_next + lower,
                ))?;
            }

            sink.push(Triangle::new(
                top_center,
                ring_point(self.radius, half, here),
                ring_point(self.radius, half, next),
            ))?;
        }
        Ok(())
    }
}
