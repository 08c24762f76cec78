use serde::{Deserialize, Serialize};

use super::DegreeLevel;
use crate::errors::ValidationError;

/// Hiring criteria for one job opening.
///
/// `required_skills` and `preferred_skills` may overlap; they carry different
/// weights when scored (required 2x, preferred 1x).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    /// Minimum years of experience. Must be finite and non-negative.
    pub min_experience: f64,
    pub education_required: DegreeLevel,
}

impl JobRequirement {
    /// Validate the requirement before any scoring proceeds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.min_experience.is_finite() {
            return Err(ValidationError::NonFiniteExperience {
                value: self.min_experience,
            });
        }
        if self.min_experience < 0.0 {
            return Err(ValidationError::NegativeExperience {
                value: self.min_experience,
            });
        }
        if self.required_skills.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptySkillName { list: "required" });
        }
        if self.preferred_skills.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptySkillName { list: "preferred" });
        }
        Ok(())
    }
}
