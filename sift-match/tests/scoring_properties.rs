use proptest::prelude::*;
use sift_core::models::{
    CandidateProfile, DegreeLevel, EducationInfo, ExperienceInfo, ExtractedSkill, JobRequirement,
    Proficiency, SkillCategory,
};
use sift_match::score;

fn degree_strategy() -> impl Strategy<Value = DegreeLevel> {
    prop_oneof![
        Just(DegreeLevel::Unknown),
        Just(DegreeLevel::Diploma),
        Just(DegreeLevel::Associate),
        Just(DegreeLevel::Bachelor),
        Just(DegreeLevel::Master),
        Just(DegreeLevel::Doctorate),
    ]
}

fn profile_strategy() -> impl Strategy<Value = CandidateProfile> {
    (
        proptest::collection::vec("[a-z]{2,10}", 0..15),
        0.0f64..50.0,
        degree_strategy(),
    )
        .prop_map(|(names, years, degree)| CandidateProfile {
            skills: names
                .into_iter()
                .map(|n| {
                    ExtractedSkill::new(
                        n,
                        SkillCategory::Technical,
                        Proficiency::Intermediate,
                        1.0,
                        60.0,
                    )
                })
                .collect(),
            experience: ExperienceInfo::new(years, vec![]),
            education: EducationInfo::new(degree, None),
            certifications: vec![],
            summary: String::new(),
        })
}

fn job_strategy() -> impl Strategy<Value = JobRequirement> {
    (
        proptest::collection::vec("[a-z]{2,10}", 0..8),
        proptest::collection::vec("[a-z]{2,10}", 0..8),
        0.0f64..20.0,
        degree_strategy(),
    )
        .prop_map(|(required, preferred, min_experience, education)| JobRequirement {
            title: "any".into(),
            required_skills: required,
            preferred_skills: preferred,
            min_experience,
            education_required: education,
        })
}

proptest! {
    #[test]
    fn all_scores_stay_in_bounds(
        profile in profile_strategy(),
        job in job_strategy(),
    ) {
        let result = score(&profile, &job).unwrap();
        prop_assert!((0.0..=100.0).contains(&result.match_score));
        prop_assert!((0.0..=100.0).contains(&result.confidence_score));
        prop_assert!((0.0..=100.0).contains(&result.experience_match));
        prop_assert!((0.0..=100.0).contains(&result.education_match));
        prop_assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn skill_match_rows_cover_every_requirement(
        profile in profile_strategy(),
        job in job_strategy(),
    ) {
        let result = score(&profile, &job).unwrap();
        prop_assert_eq!(
            result.skill_matches.len(),
            job.required_skills.len() + job.preferred_skills.len()
        );
    }
}
