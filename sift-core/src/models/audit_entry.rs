use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AggregateKind;

/// One privacy-ledger transaction. Immutable once written; the audit log
/// only ever appends these.
///
/// External persistence schema:
/// `(id, operation_type, epsilon_used, data_subjects_affected, subject_id, timestamp)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub operation_type: AggregateKind,
    pub epsilon_used: f64,
    pub data_subjects_affected: usize,
    pub subject_id: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// The timestamp set here is provisional; the audit log re-stamps every
    /// entry at append time so its order stays chronological.
    pub fn new(
        operation_type: AggregateKind,
        epsilon_used: f64,
        data_subjects_affected: usize,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation_type,
            epsilon_used,
            data_subjects_affected,
            subject_id: subject_id.into(),
            timestamp: Utc::now(),
        }
    }
}
