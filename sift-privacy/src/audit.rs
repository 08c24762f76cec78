//! Append-only audit log of every accounting operation.
//!
//! `append` is the only mutation; entries are immutable once written and
//! queries return them newest-first. Persistence of entries is an external
//! collaborator's job; this log is the engine's in-process record.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::RwLock;

use sift_core::models::AuditEntry;

/// Per-subject rollup for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditSummaryRow {
    pub subject_id: String,
    pub operations: usize,
    pub epsilon_used: f64,
}

#[derive(Debug, Default)]
pub struct PrivacyAuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl PrivacyAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry. The timestamp is assigned here, under the write
    /// lock, so insertion order and timestamp order agree even when
    /// releases for different subjects race.
    pub fn append(&self, mut entry: AuditEntry) {
        let mut entries = self.entries.write().expect("audit log lock poisoned");
        entry.timestamp = Utc::now();
        entries.push(entry);
    }

    /// Entries for one subject, newest first, optionally bounded by a
    /// `since` timestamp (exclusive) and a result limit.
    pub fn query(
        &self,
        subject_id: &str,
        since: Option<DateTime<Utc>>,
        limit: Option<usize>,
    ) -> Vec<AuditEntry> {
        let entries = self.entries.read().expect("audit log lock poisoned");
        let iter = entries
            .iter()
            .rev()
            .filter(|e| e.subject_id == subject_id)
            .filter(|e| since.map_or(true, |t| e.timestamp > t))
            .cloned();
        match limit {
            Some(n) => iter.take(n).collect(),
            None => iter.collect(),
        }
    }

    /// Total entries across all subjects.
    pub fn len(&self) -> usize {
        self.entries.read().expect("audit log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-subject operation counts and epsilon totals, sorted by subject id.
    pub fn summary(&self) -> Vec<AuditSummaryRow> {
        let entries = self.entries.read().expect("audit log lock poisoned");
        let mut rollup: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for e in entries.iter() {
            let row = rollup.entry(e.subject_id.as_str()).or_insert((0, 0.0));
            row.0 += 1;
            row.1 += e.epsilon_used;
        }
        rollup
            .into_iter()
            .map(|(subject_id, (operations, epsilon_used))| AuditSummaryRow {
                subject_id: subject_id.to_string(),
                operations,
                epsilon_used,
            })
            .collect()
    }
}
