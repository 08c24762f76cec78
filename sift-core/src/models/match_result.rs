use serde::{Deserialize, Serialize};

use super::Proficiency;

/// One requirement-vs-candidate comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub required: bool,
    pub found: bool,
    /// Candidate's proficiency when the skill was found.
    pub proficiency: Option<Proficiency>,
    /// Fixed by the `required` flag: 2.0 for required, 1.0 for preferred.
    pub weight: f64,
}

/// Outcome of one candidate-job comparison. Deterministic given identical
/// inputs; all scores are in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted composite: 0.6 skill + 0.25 experience + 0.15 education,
    /// rounded to the nearest integer.
    pub match_score: f64,
    pub confidence_score: f64,
    /// Required skills first, then preferred, each in requirement order.
    pub skill_matches: Vec<SkillMatch>,
    pub experience_match: f64,
    pub education_match: f64,
    /// Human-readable notes, in a fixed order.
    pub recommendations: Vec<String>,
}
