//! Threshold-driven human-readable recommendations, in a fixed order.

use sift_core::models::SkillMatch;

pub fn build(
    composite: f64,
    experience_match: f64,
    education_match: f64,
    matches: &[SkillMatch],
) -> Vec<String> {
    let mut notes = Vec::new();

    if composite >= 80.0 {
        notes.push("Strong candidate - highly recommended for interview".to_string());
        notes.push("Skills align well with job requirements".to_string());
    } else if composite >= 60.0 {
        notes.push("Qualified candidate - recommend for review".to_string());
        let missing_required = matches.iter().filter(|m| m.required && !m.found).count();
        if missing_required > 0 {
            notes.push(format!(
                "Missing {missing_required} required skill(s)"
            ));
        }
    } else {
        notes.push("Below match threshold - not recommended for this role".to_string());
    }

    if experience_match < 60.0 {
        notes.push("Experience below the level this role asks for".to_string());
    }
    if education_match < 70.0 {
        notes.push("Education below the required level".to_string());
    }

    notes
}
