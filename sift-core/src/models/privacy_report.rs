use serde::{Deserialize, Serialize};

use super::AuditEntry;

/// Qualitative privacy posture derived from budget consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    High,
    Medium,
    Low,
}

impl PrivacyLevel {
    /// Classify spend against the total budget: `High` when spent is at most
    /// half the budget, `Medium` up to the full budget, `Low` beyond.
    pub fn from_spend(epsilon_spent: f64, epsilon_total: f64) -> Self {
        if epsilon_spent <= 0.5 * epsilon_total {
            Self::High
        } else if epsilon_spent <= epsilon_total {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Budget status for one subject, rendered by the reporting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacyReport {
    pub subject_id: String,
    pub operations_performed: usize,
    pub epsilon_spent: f64,
    /// `max(0, epsilon_total - epsilon_spent)`.
    pub epsilon_remaining: f64,
    pub level: PrivacyLevel,
    /// The most recent N audit entries, newest first.
    pub recent_entries: Vec<AuditEntry>,
}
