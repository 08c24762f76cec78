use serde::{Deserialize, Serialize};
use std::fmt;

/// Degree hierarchy, totally ordered for comparisons.
/// `Master` covers MBA; `Doctorate` covers PhD.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    #[default]
    Unknown,
    Diploma,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl DegreeLevel {
    /// Position in the hierarchy, for level-distance comparisons.
    pub fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Diploma => 1,
            Self::Associate => 2,
            Self::Bachelor => 3,
            Self::Master => 4,
            Self::Doctorate => 5,
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unknown => "unknown",
            Self::Diploma => "diploma",
            Self::Associate => "associate",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Doctorate => "doctorate",
        };
        write!(f, "{s}")
    }
}

/// Highest attained education inferred from a resume.
///
/// The institution is always redacted: the extractor never populates it, so
/// school names cannot leak into downstream reporting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EducationInfo {
    pub degree: DegreeLevel,
    pub field: Option<String>,
    /// Always `None`. Kept in the schema so external persistence layers see
    /// a stable shape, but never populated by the engine.
    pub institution: Option<String>,
}

impl EducationInfo {
    pub fn new(degree: DegreeLevel, field: Option<String>) -> Self {
        Self {
            degree,
            field,
            institution: None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.degree != DegreeLevel::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_is_totally_ordered() {
        assert!(DegreeLevel::Doctorate > DegreeLevel::Master);
        assert!(DegreeLevel::Master > DegreeLevel::Bachelor);
        assert!(DegreeLevel::Bachelor > DegreeLevel::Associate);
        assert!(DegreeLevel::Associate > DegreeLevel::Diploma);
        assert!(DegreeLevel::Diploma > DegreeLevel::Unknown);
    }

    #[test]
    fn rank_distance_between_adjacent_levels_is_one() {
        assert_eq!(
            DegreeLevel::Bachelor.rank() - DegreeLevel::Associate.rank(),
            1
        );
    }
}
