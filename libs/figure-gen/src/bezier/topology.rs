//! Reader for the patch topology format.
//!
//! ```text
//! <patch count>
//! <16 indices>            one line per patch
//! <control point count>
//! <x>, <y>, <z>           one line per control point
//! ```
//!
//! Fields are separated by commas and/or whitespace. Blank lines are
//! skipped; every record must sit on a single line.

use crate::core::point::Point;
use crate::error::{ParseError, ParseErrorKind};
use config::constants::BEZIER_PATCH_SIZE;
use std::str::FromStr;

/// Control-point indices of one patch, row-major.
pub type PatchIndices = [u32; BEZIER_PATCH_SIZE];

/// Patch list and control-point pool as read from a topology file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Topology {
    pub(crate) patches: Vec<PatchIndices>,
    pub(crate) control_points: Vec<Point>,
}

/// Non-blank lines of the input, tokenized, with 1-based line numbers.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    line: usize,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            line: 0,
        }
    }

    fn next_fields(&mut self) -> Option<(usize, Vec<&'a str>)> {
        for (index, line) in self.lines.by_ref() {
            self.line = index + 1;
            let fields: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|field| !field.is_empty())
                .collect();
            if !fields.is_empty() {
                return Some((self.line, fields));
            }
        }
        None
    }

    /// Next record, which must hold exactly `count` fields.
    fn expect(&mut self, expected: &str, count: usize) -> Result<(usize, Vec<&'a str>), ParseError> {
        let (line, fields) = self
            .next_fields()
            .ok_or_else(|| ParseError::unexpected_eof(expected, self.line + 1))?;
        if fields.len() != count {
            return Err(ParseError::new(
                ParseErrorKind::TokenCount {
                    expected: count,
                    found: fields.len(),
                },
                line,
            ));
        }
        Ok((line, fields))
    }

    fn expect_count(&mut self, expected: &str) -> Result<usize, ParseError> {
        let (line, fields) = self.expect(expected, 1)?;
        number::<usize>(fields[0], line)
    }
}

fn number<T: FromStr>(text: &str, line: usize) -> Result<T, ParseError> {
    text.parse()
        .map_err(|_| ParseError::invalid_number(text, line))
}

fn coordinate(text: &str, line: usize) -> Result<f64, ParseError> {
    number::<f64>(text, line)
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::invalid_number(text, line))
}

/// Parses a topology file. Indices are not checked against the pool here.
pub(crate) fn parse_topology(text: &str) -> Result<Topology, ParseError> {
    let mut records = Records::new(text);

    let patch_count = records.expect_count("patch count")?;
    let mut patches = Vec::with_capacity(patch_count.min(1 << 16));
    for _ in 0..patch_count {
        let (line, fields) = records.expect("patch indices", BEZIER_PATCH_SIZE)?;
        let mut indices = [0u32; BEZIER_PATCH_SIZE];
        for (slot, field) in indices.iter_mut().zip(&fields) {
            *slot = number(field, line)?;
        }
        patches.push(indices);
    }

    let point_count = records.expect_count("control point count")?;
    let mut control_points = Vec::with_capacity(point_count.min(1 << 16));
    for _ in 0..point_count {
        let (line, fields) = records.expect("control point", 3)?;
        control_points.push(Point::new(
            coordinate(fields[0], line)?,
            coordinate(fields[1], line)?,
            coordinate(fields[2], line)?,
        ));
    }

    if let Some((line, fields)) = records.next_fields() {
        return Err(ParseError::new(
            ParseErrorKind::TrailingInput {
                text: fields.join(" "),
            },
            line,
        ));
    }

    tracing::debug!(
        "Parsed {} bezier patches over {} control points",
        patches.len(),
        control_points.len()
    );

    Ok(Topology {
        patches,
        control_points,
    })
}
