//! Education inference: degree keywords scanned in priority order (highest
//! level first, first match wins), plus a field-of-study vocabulary.
//! Institutions are deliberately never extracted.

use sift_core::config::ExtractionConfig;
use sift_core::models::{DegreeLevel, EducationInfo};

use crate::scan;

pub fn infer(text: &str, config: &ExtractionConfig) -> EducationInfo {
    let vocab = &config.vocabulary;

    let priority: [(&[String], DegreeLevel); 5] = [
        (&vocab.doctorate_terms, DegreeLevel::Doctorate),
        (&vocab.master_terms, DegreeLevel::Master),
        (&vocab.bachelor_terms, DegreeLevel::Bachelor),
        (&vocab.associate_terms, DegreeLevel::Associate),
        (&vocab.diploma_terms, DegreeLevel::Diploma),
    ];

    let degree = priority
        .iter()
        .find(|(terms, _)| terms.iter().any(|t| scan::contains_word(text, t)))
        .map(|&(_, level)| level)
        .unwrap_or(DegreeLevel::Unknown);

    let field = vocab
        .fields_of_study
        .iter()
        .find(|f| scan::contains_word(text, f))
        .cloned();

    EducationInfo::new(degree, field)
}
