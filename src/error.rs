use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Failures surfaced by chart rendering collaborators.
///
/// A missing render target is deliberately not represented here; it is the
/// ordinary "nothing to draw into" case and reported through
/// [`crate::dashboard::RenderOutcome`] instead.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("chart backend failure: {0}")]
    Backend(String),

    #[error("invalid render target size: {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },

    #[error("png encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),

    #[error("chart config serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
