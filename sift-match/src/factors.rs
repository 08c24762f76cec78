//! Individual scoring factors. Each returns a value in [0, 100].

use sift_core::models::{CandidateProfile, DegreeLevel, JobRequirement, SkillMatch};

/// Weight applied to a required skill.
pub const REQUIRED_WEIGHT: f64 = 2.0;
/// Weight applied to a preferred skill.
pub const PREFERRED_WEIGHT: f64 = 1.0;

/// Build the ordered skill-match rows: required skills first, then
/// preferred, each in requirement order.
pub fn skill_matches(profile: &CandidateProfile, job: &JobRequirement) -> Vec<SkillMatch> {
    let row = |name: &str, required: bool| {
        let found = profile.find_skill(name);
        SkillMatch {
            skill: name.to_string(),
            required,
            found: found.is_some(),
            proficiency: found.map(|s| s.proficiency),
            weight: if required {
                REQUIRED_WEIGHT
            } else {
                PREFERRED_WEIGHT
            },
        }
    };

    job.required_skills
        .iter()
        .map(|s| row(s, true))
        .chain(job.preferred_skills.iter().map(|s| row(s, false)))
        .collect()
}

/// Weighted fraction of requirements met, scaled to [0, 100].
/// Zero when there are no requirements at all.
pub fn skill_score(matches: &[SkillMatch]) -> f64 {
    let total_weight: f64 = matches.iter().map(|m| m.weight).sum();
    if total_weight == 0.0 {
        return 0.0;
    }
    let weighted: f64 = matches
        .iter()
        .filter(|m| m.found)
        .map(|m| m.weight * 100.0)
        .sum();
    weighted / total_weight
}

/// Tiered experience comparison. `required == 0` always scores 100.
pub fn experience_match(candidate_years: f64, required_years: f64) -> f64 {
    if required_years <= 0.0 {
        return 100.0;
    }
    if candidate_years >= required_years {
        100.0
    } else if candidate_years >= 0.8 * required_years {
        80.0
    } else if candidate_years >= 0.6 * required_years {
        60.0
    } else {
        (candidate_years / required_years * 100.0).min(50.0)
    }
}

/// Degree-hierarchy comparison: meets-or-exceeds 100, exactly one level
/// below 70, further below 40.
pub fn education_match(candidate: DegreeLevel, required: DegreeLevel) -> f64 {
    if candidate >= required {
        100.0
    } else if required.rank() - candidate.rank() == 1 {
        70.0
    } else {
        40.0
    }
}

/// Confidence in the match: how much extracted signal backs the score.
pub fn confidence(profile: &CandidateProfile, matches: &[SkillMatch]) -> f64 {
    let mut confidence: f64 = 50.0;

    if profile.skills.len() >= 10 {
        confidence += 20.0;
    } else if profile.skills.len() >= 5 {
        confidence += 10.0;
    }
    if profile.experience.total_years > 0.0 {
        confidence += 15.0;
    }
    if profile.education.is_known() {
        confidence += 10.0;
    }
    if !matches.is_empty() {
        let found = matches.iter().filter(|m| m.found).count() as f64;
        if found / matches.len() as f64 > 0.7 {
            confidence += 5.0;
        }
    }

    confidence.min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_tiers() {
        assert_eq!(experience_match(5.0, 5.0), 100.0);
        assert_eq!(experience_match(4.0, 5.0), 80.0);
        assert_eq!(experience_match(3.0, 5.0), 60.0);
        assert_eq!(experience_match(1.0, 5.0), 20.0);
        assert_eq!(experience_match(2.9, 5.0), 50.0);
    }

    #[test]
    fn zero_required_years_guarded() {
        assert_eq!(experience_match(0.0, 0.0), 100.0);
        assert_eq!(experience_match(10.0, 0.0), 100.0);
    }

    #[test]
    fn education_one_level_below_is_70() {
        assert_eq!(
            education_match(DegreeLevel::Associate, DegreeLevel::Bachelor),
            70.0
        );
        assert_eq!(
            education_match(DegreeLevel::Diploma, DegreeLevel::Bachelor),
            40.0
        );
        assert_eq!(
            education_match(DegreeLevel::Doctorate, DegreeLevel::Bachelor),
            100.0
        );
    }
}
