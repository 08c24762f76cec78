//! # sift-core
//!
//! Foundation crate for the Sift candidate screening engine.
//! Defines all models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod observability;

// Re-export the most commonly used types at the crate root.
pub use config::{ExtractionConfig, PrivacyConfig, SkillVocabulary};
pub use errors::{SiftError, SiftResult};
pub use models::{
    AggregateKind, AuditEntry, CandidateProfile, DegreeLevel, EducationInfo, ExperienceInfo,
    ExtractedSkill, JobRequirement, MatchResult, Proficiency, SkillCategory, SkillMatch,
};
