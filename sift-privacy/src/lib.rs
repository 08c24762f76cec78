//! # sift-privacy
//!
//! The differential-privacy accountant for cross-candidate aggregates.
//!
//! Every aggregate statistic that spans candidates must pass through
//! [`PrivacyAccountant::private_aggregate`]: values are clipped to bound
//! sensitivity, calibrated Laplace or Gaussian noise is added, a flat
//! epsilon cost is debited from the subject's finite budget, and one
//! immutable entry lands in the append-only [`PrivacyAuditLog`]. A call that
//! would overspend the budget fails atomically with
//! `PrivacyError::BudgetExhausted` — denial, never a degraded noisy guess.

mod accountant;
mod audit;
mod ledger;
pub mod mechanism;

pub use accountant::PrivacyAccountant;
pub use audit::{AuditSummaryRow, PrivacyAuditLog};
pub use ledger::BudgetLedger;
