/// Errors raised by the privacy accountant.
///
/// `BudgetExhausted` is fatal for the call but not for the process: the
/// operation must not partially execute, and callers should report "no
/// aggregate available" rather than retry with weaker parameters.
#[derive(Debug, thiserror::Error)]
pub enum PrivacyError {
    #[error(
        "privacy budget exhausted for subject '{subject_id}': \
         requested {requested} epsilon with {remaining} remaining"
    )]
    BudgetExhausted {
        subject_id: String,
        requested: f64,
        remaining: f64,
    },

    #[error("cannot aggregate an empty value set")]
    EmptyAggregate,

    #[error("invalid privacy parameters: {reason}")]
    InvalidParameters { reason: String },
}
