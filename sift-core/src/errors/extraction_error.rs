/// Errors raised while extracting attributes from resume text.
///
/// All variants are recoverable: the caller can skip the candidate or retry
/// with sanitized input. Empty text is never an error.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("input is not valid UTF-8 text at byte {position}")]
    InvalidEncoding { position: usize },

    #[error("input of {bytes} bytes exceeds the {limit} byte extraction limit")]
    InputTooLarge { bytes: usize, limit: usize },
}
