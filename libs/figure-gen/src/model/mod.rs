//! # Model Reader
//!
//! Reads a triangle stream back into memory: the kind tag, the position
//! block and, after a `normals` line, the normal block. Blank lines are
//! ignored; every other line must be one `x y z` record.

use crate::core::point::Point;
use crate::error::{GeneratorResult, ParseError, ParseErrorKind};
use crate::figure::FigureKind;
use crate::mesh::TriangleSoup;
use config::constants::NORMALS_SEPARATOR;
use std::io::BufRead;

#[cfg(test)]
mod tests;

/// A triangle stream read back from text.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Kind named on the tag line
    pub kind: FigureKind,
    /// Positions and, if the stream had them, normals
    pub soup: TriangleSoup,
}

/// Parses one `x y z` record.
///
/// # Example
///
/// ```rust
/// use figure_gen::core::point::Point;
/// use figure_gen::model::parse_point;
///
/// assert_eq!(parse_point("1.5 -2 0.000000"), Ok(Point::new(1.5, -2.0, 0.0)));
/// assert!(parse_point("1 2").is_err());
/// ```
pub fn parse_point(line: &str) -> Result<Point, ParseErrorKind> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [x, y, z] = fields[..] else {
        return Err(ParseErrorKind::TokenCount {
            expected: 3,
            found: fields.len(),
        });
    };
    let coordinate = |text: &str| {
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseErrorKind::InvalidNumber {
                text: text.to_string(),
            })
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?, coordinate(z)?))
}

/// Reads a complete triangle stream.
pub fn read_model<R: BufRead>(reader: R) -> GeneratorResult<Model> {
    let mut lines = reader.lines();

    let tag = lines
        .next()
        .transpose()?
        .ok_or_else(|| ParseError::unexpected_eof("figure tag", 1))?;
    let tag = tag.trim();
    let kind = FigureKind::from_tag(tag).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnknownFigure {
                tag: tag.to_string(),
            },
            1,
        )
    })?;

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut in_normals = false;
    let mut line_number = 1;

    for line in lines {
        let line = line?;
        line_number += 1;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        if record == NORMALS_SEPARATOR && !in_normals {
            check_whole(&vertices, line_number)?;
            in_normals = true;
            continue;
        }
        let point = parse_point(record).map_err(|kind| ParseError::new(kind, line_number))?;
        if in_normals {
            normals.push(point);
        } else {
            vertices.push(point);
        }
    }

    check_whole(if in_normals { &normals } else { &vertices }, line_number)?;

    tracing::debug!(
        "Read {} model with {} vertices and {} normals",
        kind,
        vertices.len(),
        normals.len()
    );

    Ok(Model {
        kind,
        soup: TriangleSoup::from_parts(vertices, normals),
    })
}

/// Parses a triangle stream held in memory.
///
/// # Example
///
/// ```rust
/// use figure_gen::model::parse_model;
/// use figure_gen::FigureKind;
///
/// let model = parse_model("triangle\n0 0 0\n1 0 0\n0 1 0\n").unwrap();
/// assert_eq!(model.kind, FigureKind::Triangle);
/// assert_eq!(model.soup.triangle_count(), 1);
/// ```
pub fn parse_model(text: &str) -> GeneratorResult<Model> {
    read_model(text.as_bytes())
}

fn check_whole(block: &[Point], line: usize) -> Result<(), ParseError> {
    if block.len() % 3 == 0 {
        Ok(())
    } else {
        Err(ParseError::new(
            ParseErrorKind::TruncatedTriangle {
                vertices: block.len(),
            },
            line,
        ))
    }
}
