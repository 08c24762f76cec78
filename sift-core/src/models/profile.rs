use serde::{Deserialize, Serialize};

use super::{EducationInfo, ExperienceInfo, ExtractedSkill};

/// Everything the extractor learned about one candidate.
///
/// Created per resume-processing call; never aggregated across candidates
/// except through the privacy accountant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: Vec<ExtractedSkill>,
    pub experience: ExperienceInfo,
    pub education: EducationInfo,
    pub certifications: Vec<String>,
    /// Deterministic one-line synthesis. Never echoes resume text verbatim.
    pub summary: String,
}

impl CandidateProfile {
    /// Case-insensitive lookup of an extracted skill by name.
    pub fn find_skill(&self, name: &str) -> Option<&ExtractedSkill> {
        self.skills
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.find_skill(name).is_some()
    }
}
