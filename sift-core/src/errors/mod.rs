//! Error taxonomy for the screening engine.
//!
//! Each concern gets its own enum; `SiftError` aggregates them at the
//! workspace boundary. Extraction and validation failures are local to one
//! candidate/job pair; privacy failures are local to one subject.

mod extraction_error;
mod privacy_error;
mod validation_error;

pub use extraction_error::ExtractionError;
pub use privacy_error::PrivacyError;
pub use validation_error::ValidationError;

/// Top-level error for callers that cross crate boundaries.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Privacy(#[from] PrivacyError),
}

/// Result alias used throughout the workspace.
pub type SiftResult<T> = Result<T, SiftError>;
