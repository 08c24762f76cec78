//! # sift-extract
//!
//! Deterministic rule-based extraction of structured candidate attributes
//! from free-text resumes: skills (with proficiency, years, relevance),
//! total experience, highest education, and certifications.
//!
//! Extraction has no randomness and no I/O; identical input text always
//! produces an identical [`CandidateProfile`].

mod education;
mod engine;
mod experience;
pub mod normalizer;
pub mod redaction;
mod scan;
mod skills;

pub use engine::AttributeExtractor;

pub use sift_core::models::CandidateProfile;
