use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::PrivacyError;

/// Noise distribution used by the accountant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseMechanism {
    #[default]
    Laplace,
    Gaussian,
}

impl NoiseMechanism {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Laplace => "laplace",
            Self::Gaussian => "gaussian",
        }
    }
}

/// Privacy accountant configuration. Fixed at construction; the accountant
/// never mutates these afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Total epsilon budget per subject.
    pub epsilon_total: f64,
    /// Failure probability for the Gaussian mechanism.
    pub delta: f64,
    /// Values are clipped to `[-clip_norm, clip_norm]` before aggregation.
    pub clip_norm: f64,
    /// Scale factor applied to the per-call noise.
    pub noise_multiplier: f64,
    /// Flat epsilon charged per aggregate operation. Deterministic and
    /// auditable; there is no variable or silent charge path.
    pub epsilon_per_operation: f64,
    pub mechanism: NoiseMechanism,
    /// Audit entries included in each privacy report.
    pub report_recent_entries: usize,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            epsilon_total: defaults::EPSILON_TOTAL,
            delta: defaults::DELTA,
            clip_norm: defaults::CLIP_NORM,
            noise_multiplier: defaults::NOISE_MULTIPLIER,
            epsilon_per_operation: defaults::EPSILON_PER_OPERATION,
            mechanism: NoiseMechanism::default(),
            report_recent_entries: defaults::REPORT_RECENT_ENTRIES,
        }
    }
}

impl PrivacyConfig {
    /// Validate parameter ranges before an accountant is constructed.
    pub fn validate(&self) -> Result<(), PrivacyError> {
        let invalid = |reason: String| PrivacyError::InvalidParameters { reason };
        if !(self.epsilon_total > 0.0) {
            return Err(invalid(format!(
                "epsilon_total must be positive, got {}",
                self.epsilon_total
            )));
        }
        if !(self.epsilon_per_operation > 0.0) {
            return Err(invalid(format!(
                "epsilon_per_operation must be positive, got {}",
                self.epsilon_per_operation
            )));
        }
        if !(self.delta > 0.0 && self.delta < 1.0) {
            return Err(invalid(format!(
                "delta must be in (0, 1), got {}",
                self.delta
            )));
        }
        if !(self.clip_norm > 0.0) {
            return Err(invalid(format!(
                "clip_norm must be positive, got {}",
                self.clip_norm
            )));
        }
        if !(self.noise_multiplier > 0.0) {
            return Err(invalid(format!(
                "noise_multiplier must be positive, got {}",
                self.noise_multiplier
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(PrivacyConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_epsilon_rejected() {
        let cfg = PrivacyConfig {
            epsilon_total: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PrivacyError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn nan_delta_rejected() {
        let cfg = PrivacyConfig {
            delta: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
