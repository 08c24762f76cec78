use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of skill categories. Illegal categories are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
    Certification,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Technical => "technical",
            Self::Soft => "soft",
            Self::Domain => "domain",
            Self::Certification => "certification",
        };
        write!(f, "{s}")
    }
}

/// Proficiency levels, totally ordered for comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        };
        write!(f, "{s}")
    }
}

/// One skill found in a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    /// Years of experience with this skill, clamped to [0, +inf).
    pub years_experience: f64,
    /// Relevance to the resume as a whole, clamped to [0, 100].
    pub relevance: f64,
}

impl ExtractedSkill {
    /// Create a skill, clamping `years_experience` and `relevance` to their
    /// valid ranges. Clamping also applies after any privacy transform.
    pub fn new(
        name: impl Into<String>,
        category: SkillCategory,
        proficiency: Proficiency,
        years_experience: f64,
        relevance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            proficiency,
            years_experience: years_experience.max(0.0),
            relevance: relevance.clamp(0.0, 100.0),
        }
    }
}
