//! The composite scorer: weighted combination of skill, experience, and
//! education factors plus a confidence score and recommendations.

use tracing::debug;

use sift_core::errors::ValidationError;
use sift_core::models::{CandidateProfile, JobRequirement, MatchResult};

use crate::factors;
use crate::recommendations;

/// Weights for the three composite factors. The defaults are the engine's
/// fixed contract (0.6 / 0.25 / 0.15); tests can inject others.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill: 0.6,
            experience: 0.25,
            education: 0.15,
        }
    }
}

/// Score a candidate profile against a job requirement.
///
/// Validates the job first; a malformed requirement never reaches the
/// scoring math. Pure and deterministic.
pub fn score(
    profile: &CandidateProfile,
    job: &JobRequirement,
) -> Result<MatchResult, ValidationError> {
    score_with_weights(profile, job, &ScoreWeights::default())
}

pub fn score_with_weights(
    profile: &CandidateProfile,
    job: &JobRequirement,
    weights: &ScoreWeights,
) -> Result<MatchResult, ValidationError> {
    job.validate()?;

    let skill_matches = factors::skill_matches(profile, job);
    let skill_score = factors::skill_score(&skill_matches);
    let experience_match =
        factors::experience_match(profile.experience.total_years, job.min_experience);
    let education_match =
        factors::education_match(profile.education.degree, job.education_required);

    let match_score = (weights.skill * skill_score
        + weights.experience * experience_match
        + weights.education * education_match)
        .round()
        .clamp(0.0, 100.0);

    let confidence_score = factors::confidence(profile, &skill_matches);
    let recommendations =
        recommendations::build(match_score, experience_match, education_match, &skill_matches);

    debug!(
        job = %job.title,
        match_score,
        confidence_score,
        skill_score,
        experience_match,
        education_match,
        "scored candidate against job"
    );

    Ok(MatchResult {
        match_score,
        confidence_score,
        skill_matches,
        experience_match,
        education_match,
        recommendations,
    })
}
