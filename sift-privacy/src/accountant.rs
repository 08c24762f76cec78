//! The privacy accountant: per-subject budget ledgers, calibrated noise,
//! and audit logging behind one atomic check-and-debit.

use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;
use tracing::{debug, warn};

use sift_core::config::PrivacyConfig;
use sift_core::errors::PrivacyError;
use sift_core::models::{AggregateKind, AuditEntry, NoisyAggregate, PrivacyLevel, PrivacyReport};

use crate::audit::PrivacyAuditLog;
use crate::ledger::BudgetLedger;
use crate::mechanism;

/// Stateful accountant for differentially private aggregate releases.
///
/// One accountant serves many subjects; each subject has an independent
/// ledger, so exhaustion for one tenant never blocks another. Construct it
/// explicitly and pass it by reference — there is no ambient global
/// instance.
pub struct PrivacyAccountant {
    config: PrivacyConfig,
    ledgers: DashMap<String, BudgetLedger>,
    audit: PrivacyAuditLog,
    rng: Mutex<StdRng>,
}

impl PrivacyAccountant {
    /// Build an accountant, validating the configuration first.
    pub fn new(config: PrivacyConfig) -> Result<Self, PrivacyError> {
        config.validate()?;
        Ok(Self {
            config,
            ledgers: DashMap::new(),
            audit: PrivacyAuditLog::new(),
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Accountant with a fixed noise seed. Noise becomes reproducible,
    /// which tests rely on; accounting behavior is unchanged.
    pub fn with_seed(config: PrivacyConfig, seed: u64) -> Result<Self, PrivacyError> {
        let mut accountant = Self::new(config)?;
        accountant.rng = Mutex::new(StdRng::seed_from_u64(seed));
        Ok(accountant)
    }

    pub fn config(&self) -> &PrivacyConfig {
        &self.config
    }

    /// The append-only record of every accounting operation.
    pub fn audit_log(&self) -> &PrivacyAuditLog {
        &self.audit
    }

    /// Release a differentially private aggregate of `values` for
    /// `subject_id`, debiting the flat per-operation epsilon cost.
    ///
    /// Mean results are clamped back to `[-clip_norm, clip_norm]` (their
    /// range after clipping); counts are clamped to be non-negative. Use
    /// [`private_aggregate_clamped`](Self::private_aggregate_clamped) when
    /// the statistic has a wider semantic range.
    pub fn private_aggregate(
        &self,
        subject_id: &str,
        values: &[f64],
        kind: AggregateKind,
    ) -> Result<NoisyAggregate, PrivacyError> {
        let range = match kind {
            AggregateKind::Mean => (-self.config.clip_norm, self.config.clip_norm),
            AggregateKind::Count => (0.0, f64::INFINITY),
        };
        self.release(subject_id, values, kind, range)
    }

    /// Like [`private_aggregate`](Self::private_aggregate), but clamps the
    /// noisy result into a caller-declared semantic range (e.g. `[0, 100]`
    /// for relevance means).
    pub fn private_aggregate_clamped(
        &self,
        subject_id: &str,
        values: &[f64],
        kind: AggregateKind,
        range: (f64, f64),
    ) -> Result<NoisyAggregate, PrivacyError> {
        self.release(subject_id, values, kind, range)
    }

    fn release(
        &self,
        subject_id: &str,
        values: &[f64],
        kind: AggregateKind,
        range: (f64, f64),
    ) -> Result<NoisyAggregate, PrivacyError> {
        if values.is_empty() {
            return Err(PrivacyError::EmptyAggregate);
        }

        let cost = self.config.epsilon_per_operation;

        // Atomic check-and-debit: the DashMap entry guard gives per-subject
        // mutual exclusion, so concurrent callers cannot interleave their
        // checks and collectively overspend. Nothing after a successful
        // debit can fail, so a partial debit is never observable.
        {
            let mut ledger = self
                .ledgers
                .entry(subject_id.to_string())
                .or_insert_with(|| BudgetLedger::new(self.config.epsilon_total));
            ledger.try_debit(cost).map_err(|remaining| {
                warn!(subject_id, requested = cost, remaining, "budget exhausted");
                PrivacyError::BudgetExhausted {
                    subject_id: subject_id.to_string(),
                    requested: cost,
                    remaining,
                }
            })?;
        }

        let clip = self.config.clip_norm;
        let clipped: Vec<f64> = values.iter().map(|v| v.clamp(-clip, clip)).collect();
        let n = clipped.len();

        let (true_value, sensitivity) = match kind {
            // One individual can move a clipped mean by at most 2*clip/n.
            AggregateKind::Mean => (
                clipped.iter().sum::<f64>() / n as f64,
                2.0 * clip / n as f64,
            ),
            AggregateKind::Count => (n as f64, 1.0),
        };

        let scale = mechanism::noise_scale(
            self.config.mechanism,
            sensitivity,
            cost,
            self.config.delta,
            self.config.noise_multiplier,
        );
        let noise = {
            let mut rng = self.rng.lock().expect("rng lock poisoned");
            mechanism::sample(&mut *rng, self.config.mechanism, scale)
        };
        let value = (true_value + noise).clamp(range.0, range.1);

        // 95% interval, centered on the released value, never the true one.
        let ci_width = 1.96 * scale;
        let lower_bound = (value - ci_width).max(range.0);
        let upper_bound = (value + ci_width).min(range.1);

        let entry = AuditEntry::new(kind, cost, n, subject_id);
        self.audit.append(entry);

        debug!(
            subject_id,
            %kind,
            epsilon_used = cost,
            data_subjects = n,
            mechanism = self.config.mechanism.as_str(),
            "released private aggregate"
        );

        Ok(NoisyAggregate {
            value,
            kind,
            epsilon_used: cost,
            mechanism: self.config.mechanism.as_str().to_string(),
            data_subjects: n,
            lower_bound,
            upper_bound,
            confidence_interval_width: ci_width,
        })
    }

    /// Budget status for one subject. A subject with no operations yet is
    /// reported with a full budget.
    pub fn get_privacy_report(&self, subject_id: &str) -> PrivacyReport {
        let (spent, operations) = self
            .ledgers
            .get(subject_id)
            .map(|l| (l.epsilon_spent(), l.operations()))
            .unwrap_or((0.0, 0));

        PrivacyReport {
            subject_id: subject_id.to_string(),
            operations_performed: operations,
            epsilon_spent: spent,
            epsilon_remaining: (self.config.epsilon_total - spent).max(0.0),
            level: PrivacyLevel::from_spend(spent, self.config.epsilon_total),
            recent_entries: self.audit.query(
                subject_id,
                None,
                Some(self.config.report_recent_entries),
            ),
        }
    }

    /// Remaining budget for one subject (full budget if never seen).
    pub fn remaining_budget(&self, subject_id: &str) -> f64 {
        self.ledgers
            .get(subject_id)
            .map(|l| l.remaining())
            .unwrap_or(self.config.epsilon_total)
    }

    /// All subjects with a ledger.
    pub fn subject_ids(&self) -> Vec<String> {
        self.ledgers.iter().map(|r| r.key().clone()).collect()
    }
}
