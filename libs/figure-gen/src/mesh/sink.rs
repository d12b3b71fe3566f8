//! # Triangle Sinks
//!
//! Tessellators never build a mesh themselves; they push triangles into a
//! [`TriangleSink`] in their fixed traversal order. The text writer and the
//! in-memory [`TriangleSoup`](super::TriangleSoup) are the two sinks.

use crate::error::GeneratorResult;
use crate::primitives::{Rectangle, Triangle};

/// Receiver of an ordered triangle stream.
///
/// A stream is a block of position triangles, optionally followed by a
/// separator and a block of normal triangles aligned with the positions.
pub trait TriangleSink {
    /// Receives the next triangle of the current block.
    fn push(&mut self, triangle: Triangle) -> GeneratorResult<()>;

    /// Ends the position block; later triangles carry normals.
    fn begin_normals(&mut self) -> GeneratorResult<()>;

    /// Pushes an undivided quad as `(P1, P2, P3)` and `(P3, P2, P4)`.
    fn push_rectangle(&mut self, rect: &Rectangle) -> GeneratorResult<()> {
        let [first, second] = rect.triangles();
        self.push(first)?;
        self.push(second)
    }
}
