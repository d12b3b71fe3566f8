//! # Generator
//!
//! Entry point tying a figure to an output: validate the parameters, check
//! the triangle budget, then stream.

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::export::TriangleWriter;
use crate::figure::Figure;
use crate::mesh::TriangleSoup;
use std::io::Write;

/// Runs figures through a [`GeneratorConfig`].
///
/// Nothing is written or allocated for a figure that fails validation or
/// exceeds the budget.
///
/// # Example
///
/// ```rust
/// use figure_gen::config::GeneratorConfig;
/// use figure_gen::primitives::Sphere;
/// use figure_gen::{Generator, GeneratorError};
///
/// let generator = Generator::new(GeneratorConfig::new(100, 6).unwrap());
/// let err = generator.generate(&Sphere::new(1.0, 16, 16)).unwrap_err();
/// assert!(matches!(err, GeneratorError::TooManyTriangles { count: 544, max: 100 }));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the given settings.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The active settings.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validates `figure` and checks it against the triangle budget.
    ///
    /// Returns the number of position triangles it will emit.
    pub fn check<F: Figure>(&self, figure: &F) -> GeneratorResult<u64> {
        figure.validate()?;
        let count = figure.triangle_count();
        if count > self.config.max_triangles {
            return Err(GeneratorError::TooManyTriangles {
                count,
                max: self.config.max_triangles,
            });
        }
        Ok(count)
    }

    /// Writes `figure` as a tagged triangle stream.
    ///
    /// On error after the first byte, the partial output is not a valid
    /// stream and should be discarded.
    pub fn write<W: Write, F: Figure>(&self, out: W, figure: &F) -> GeneratorResult<()> {
        let count = self.check(figure)?;
        tracing::debug!("Writing {} with {} triangles", figure.kind(), count);

        let mut writer = TriangleWriter::with_precision(out, figure.kind(), self.config.precision)?;
        figure.tessellate(&mut writer)?;
        writer.finish()?;
        Ok(())
    }

    /// Tessellates `figure` into memory.
    pub fn generate<F: Figure>(&self, figure: &F) -> GeneratorResult<TriangleSoup> {
        let count = self.check(figure)?;
        tracing::debug!("Generating {} with {} triangles", figure.kind(), count);

        let mut soup = TriangleSoup::with_capacity(usize::try_from(count).unwrap_or(0));
        figure.tessellate(&mut soup)?;
        Ok(soup)
    }
}
