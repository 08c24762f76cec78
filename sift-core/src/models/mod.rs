//! Data model for the screening engine.
//!
//! Extraction artifacts (`ExtractedSkill`, `ExperienceInfo`, `EducationInfo`,
//! `CandidateProfile`) are created per resume-processing call and never
//! persisted here. `MatchResult` is stateless and recomputable. Audit entries
//! are append-only and immutable once written.

mod aggregate;
mod audit_entry;
mod education;
mod experience;
mod job;
mod match_result;
mod privacy_report;
mod profile;
mod skill;

pub use aggregate::{AggregateKind, NoisyAggregate};
pub use audit_entry::AuditEntry;
pub use education::{DegreeLevel, EducationInfo};
pub use experience::{ExperienceInfo, RoleStint};
pub use job::JobRequirement;
pub use match_result::{MatchResult, SkillMatch};
pub use privacy_report::{PrivacyLevel, PrivacyReport};
pub use profile::CandidateProfile;
pub use skill::{ExtractedSkill, Proficiency, SkillCategory};
