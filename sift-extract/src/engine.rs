//! The attribute extractor: normalize, then run the skill, experience, and
//! education scanners over the normalized text.

use tracing::debug;

use sift_core::config::ExtractionConfig;
use sift_core::errors::ExtractionError;
use sift_core::models::CandidateProfile;

use crate::{education, experience, skills};
use crate::{normalizer, redaction};

/// Deterministic rule-based extractor. Stateless apart from its
/// configuration; safe to share across threads and call concurrently.
pub struct AttributeExtractor {
    config: ExtractionConfig,
}

impl AttributeExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extractor with the built-in vocabularies and default windows.
    pub fn with_defaults() -> Self {
        Self::new(ExtractionConfig::default())
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract structured attributes from resume text.
    ///
    /// Empty text yields an empty profile, not an error. Only oversized
    /// input is rejected. Emails, phone numbers, and SSNs are redacted
    /// before any scanning runs.
    pub fn extract(&self, text: &str) -> Result<CandidateProfile, ExtractionError> {
        if text.len() > self.config.max_input_bytes {
            return Err(ExtractionError::InputTooLarge {
                bytes: text.len(),
                limit: self.config.max_input_bytes,
            });
        }

        let redacted = redaction::redact(text);
        let normalized = normalizer::normalize(&redacted);
        if normalized.is_empty() {
            return Ok(CandidateProfile::default());
        }

        let (skills, certifications) = skills::detect(&normalized, &self.config);
        let experience = experience::infer(&normalized, &self.config);
        let education = education::infer(&normalized, &self.config);

        debug!(
            skills = skills.len(),
            certifications = certifications.len(),
            total_years = experience.total_years,
            degree = %education.degree,
            "extracted candidate attributes"
        );

        let summary = summarize(&skills, &experience, &education);

        Ok(CandidateProfile {
            skills,
            experience,
            education,
            certifications,
            summary,
        })
    }

    /// Extract from raw bytes supplied by an upload collaborator. Rejects
    /// non-UTF-8 input with `ExtractionError::InvalidEncoding`.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<CandidateProfile, ExtractionError> {
        let text = std::str::from_utf8(bytes).map_err(|e| ExtractionError::InvalidEncoding {
            position: e.valid_up_to(),
        })?;
        self.extract(text)
    }
}

impl Default for AttributeExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// One-line deterministic synthesis. Names only vocabulary terms, never raw
/// resume text, so the summary cannot leak PII.
fn summarize(
    skills: &[sift_core::models::ExtractedSkill],
    experience: &sift_core::models::ExperienceInfo,
    education: &sift_core::models::EducationInfo,
) -> String {
    if skills.is_empty() && experience.total_years == 0.0 && !education.is_known() {
        return String::new();
    }

    let mut top: Vec<&str> = skills.iter().map(|s| s.name.as_str()).take(3).collect();
    top.sort_unstable();

    format!(
        "{} skills ({}), {:.0} years experience, education: {}",
        skills.len(),
        top.join(", "),
        experience.total_years,
        education.degree
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_empty_profile_not_error() {
        let extractor = AttributeExtractor::with_defaults();
        let profile = extractor.extract("").unwrap();
        assert_eq!(profile, CandidateProfile::default());
    }

    #[test]
    fn oversized_input_rejected() {
        let config = ExtractionConfig {
            max_input_bytes: 8,
            ..Default::default()
        };
        let extractor = AttributeExtractor::new(config);
        assert!(matches!(
            extractor.extract("python and rust developer"),
            Err(ExtractionError::InputTooLarge { .. })
        ));
    }

    #[test]
    fn invalid_utf8_rejected() {
        let extractor = AttributeExtractor::with_defaults();
        assert!(matches!(
            extractor.extract_bytes(&[0x70, 0x79, 0xff, 0xfe]),
            Err(ExtractionError::InvalidEncoding { .. })
        ));
    }
}
