//! Unified error type for the thinwall public API.

use thiserror::Error;

/// Errors surfaced by cross-section construction and property getters.
///
/// The computation is pure, so every variant marks an input or a
/// geometry for which a requested quantity is undefined; it is raised
/// instead of letting NaN or infinity leak into the results.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SectionError {
    /// A cross-section needs at least two centerline samples.
    #[error("cross-section needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
    /// Wall thickness must be strictly positive at every sample.
    #[error("sample {index} has non-positive thickness {thickness}")]
    NonPositiveThickness { index: usize, thickness: f64 },
    /// A sample coordinate or thickness is NaN or infinite.
    #[error("sample {index} has a non-finite coordinate or thickness")]
    NonFiniteSample { index: usize },
    /// The spanning tree selected a zero-length edge, i.e. two samples
    /// coincide; ds = 0 contributions are meaningless.
    #[error("degenerate geometry: samples {a} and {b} coincide (zero-length edge)")]
    DegenerateGeometry { a: usize, b: usize },
    /// An inertia moment is zero, so the rigidity-center division is
    /// undefined (e.g. a single straight segment on a coordinate axis).
    #[error("singular section: {axis} is zero, rigidity center undefined")]
    SingularSection { axis: &'static str },
}
