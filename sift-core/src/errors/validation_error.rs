/// Errors raised when a `JobRequirement` fails validation before scoring.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("minimum experience must be non-negative, got {value}")]
    NegativeExperience { value: f64 },

    #[error("minimum experience must be finite, got {value}")]
    NonFiniteExperience { value: f64 },

    #[error("{list} skill list contains an empty skill name")]
    EmptySkillName { list: &'static str },
}
