use serde::{Deserialize, Serialize};
use std::fmt;

/// The statistic a private aggregate computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Mean,
    Count,
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mean => "mean",
            Self::Count => "count",
        };
        write!(f, "{s}")
    }
}

/// A noised aggregate, returned with the privacy metadata callers need for
/// reporting. The true (pre-noise) value is deliberately not included; the
/// confidence interval is centered on the released value for the same
/// reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoisyAggregate {
    pub value: f64,
    pub kind: AggregateKind,
    /// Epsilon actually charged to the subject's ledger for this call.
    pub epsilon_used: f64,
    /// Mechanism name ("laplace" or "gaussian").
    pub mechanism: String,
    /// Number of data subjects contributing to the aggregate.
    pub data_subjects: usize,
    /// Lower end of the 95% interval around `value`, clamped to the
    /// release range.
    pub lower_bound: f64,
    /// Upper end of the 95% interval around `value`, clamped to the
    /// release range.
    pub upper_bound: f64,
    /// Half-width of the 95% interval: `1.96 *` the noise scale.
    pub confidence_interval_width: f64,
}
