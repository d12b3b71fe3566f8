//! Core value types and algebra shared by the tessellators.
//!
//! Includes the point alias (`Point`) and the 4x4 matrix helpers used by
//! Bezier evaluation.

pub mod matrix;
pub mod point;
