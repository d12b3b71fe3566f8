//! # Cone Primitive
//!
//! Base disc on `y = 0` centered at the origin, apex at `(0, height, 0)`.
//!
//! Each of the `slices` sectors emits one apex triangle, one base fan
//! triangle and `stacks - 1` side quads. Stack `j` sits at
//! `y = height * j / stacks` with radius `radius * (stacks - j) / stacks`.
//! The apex triangle closes the top ring (stack `stacks - 1`) to the apex.

use crate::core::point::Point;
use crate::error::GeneratorResult;
use crate::figure::{Figure, FigureKind};
use crate::mesh::TriangleSink;
use crate::primitives::{require_count, require_positive, ring_point, Rectangle, Triangle};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;


/// Cone parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    /// Base radius
    pub radius: f64,
    /// Apex height above the base
    pub height: f64,
    /// Angular sectors
    pub slices: u32,
    /// Vertical bands
    pub stacks: u32,
}

impl Cone {
    /// Creates a cone description. Parameters are checked on tessellation.
    pub const fn new(radius: f64, height: f64, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            height,
            slices,
            stacks,
        }
    }

    fn stack(&self, j: u32) -> (f64, f64) {
        let st = f64::from(self.stacks);
        let j = f64::from(j);
        (self.radius * (st - j) / st, self.height * j / st)
    }
}

impl Figure for Cone {
    fn kind(&self) -> FigureKind {
        FigureKind::Cone
    }

    fn validate(&self) -> GeneratorResult<()> {
        require_positive("radius", self.radius)?;
        require_positive("height", self.height)?;
        require_count("slices", self.slices)?;
        require_count("stacks", self.stacks)
    }

    fn triangle_count(&self) -> u64 {
        u64::from(self.slices)
            .saturating_mul(u64::from(self.stacks))
            .saturating_mul(2)
    }

    fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) -> GeneratorResult<()> {
        self.validate()?;

        let step = TAU / f64::from(self.slices);
        let apex = Point::new(0.0, self.height, 0.0);
        let (cap_radius, cap_y) = self.stack(self.stacks - 1);

        for i in 0..self.slices {
            let here = (f64::from(i) * step).sin_cos();
            let next = (f64::from(i + 1) * step).sin_cos();

            sink.push(Triangle::new(
                apex,
                ring_point(cap_radius, cap_y, here),
                ring_point(cap_radius, cap_y, next),
            ))?;

            sink.push(Triangle::new(
                ring_point(self.radius, 0.0, here),
                Point::ZERO,
                ring_point(self.radius, 0.0, next),
            ))?;

            for j in 0..self.stacks - 1 {
                let (r, y) = self.stack(j);
                let (r1, y1) = self.stack(j + 1);
                sink.push_rectangle(&Rectangle::new(
                    ring_point(r1, y1, here),
                    ring_point(r, y, here),
                    ring_point(r1, y1, next),
                    ring_point(r, y, next),
                ))?;
            }
        }
        Ok(())
    }
}
