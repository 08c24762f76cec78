//! Skill detection: vocabulary matches plus per-skill proficiency, years,
//! and relevance inference from the surrounding text.

use regex::Regex;
use std::sync::LazyLock;

use sift_core::config::{defaults, ExtractionConfig};
use sift_core::models::{ExtractedSkill, Proficiency, SkillCategory};

use crate::scan;

/// `"<N> years"` near a skill mention.
static RE_YEARS_NEAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b").ok());

/// Detect all skills across the four vocabularies. Output order is
/// deterministic: technical, soft, domain, certifications, each in
/// vocabulary order.
pub fn detect(text: &str, config: &ExtractionConfig) -> (Vec<ExtractedSkill>, Vec<String>) {
    let vocab = &config.vocabulary;
    let mut skills = Vec::new();

    for name in &vocab.technical {
        let occurrences = scan::find_occurrences(text, name);
        if occurrences.is_empty() {
            continue;
        }
        skills.push(technical_skill(text, name, &occurrences, config));
    }

    for name in &vocab.soft {
        if scan::contains_word(text, name) {
            skills.push(ExtractedSkill::new(
                name.clone(),
                SkillCategory::Soft,
                Proficiency::Intermediate,
                0.0,
                defaults::SOFT_SKILL_RELEVANCE,
            ));
        }
    }

    for name in &vocab.domain {
        if scan::contains_word(text, name) {
            skills.push(ExtractedSkill::new(
                name.clone(),
                SkillCategory::Domain,
                Proficiency::Intermediate,
                0.0,
                defaults::DOMAIN_SKILL_RELEVANCE,
            ));
        }
    }

    let mut certifications = Vec::new();
    for name in &vocab.certifications {
        if scan::contains_word(text, name) {
            certifications.push(name.clone());
            skills.push(ExtractedSkill::new(
                name.clone(),
                SkillCategory::Certification,
                Proficiency::Intermediate,
                0.0,
                defaults::CERTIFICATION_RELEVANCE,
            ));
        }
    }

    (skills, certifications)
}

fn technical_skill(
    text: &str,
    name: &str,
    occurrences: &[usize],
    config: &ExtractionConfig,
) -> ExtractedSkill {
    let first = occurrences[0];
    let span_end = first + name.len();

    let proficiency = infer_proficiency(text, first, span_end, config);
    let years = infer_years(text, first, span_end, occurrences.len(), config);
    let relevance = score_relevance(text, first, span_end, occurrences.len(), config);

    ExtractedSkill::new(name, SkillCategory::Technical, proficiency, years, relevance)
}

/// Classify proficiency from the window around the first occurrence.
/// Ties resolve expert > advanced > beginner > intermediate.
fn infer_proficiency(
    text: &str,
    start: usize,
    end: usize,
    config: &ExtractionConfig,
) -> Proficiency {
    let vocab = &config.vocabulary;
    let window = scan::window(text, start, end, config.proficiency_window);

    if vocab.expert_terms.iter().any(|t| scan::contains_word(window, t)) {
        Proficiency::Expert
    } else if vocab
        .advanced_terms
        .iter()
        .any(|t| scan::contains_word(window, t))
    {
        Proficiency::Advanced
    } else if vocab
        .novice_terms
        .iter()
        .any(|t| scan::contains_word(window, t))
    {
        Proficiency::Beginner
    } else {
        Proficiency::Intermediate
    }
}

/// `"<N> years"` in the wide window wins; otherwise an occurrence-count
/// heuristic (>=5 -> 5y, >=3 -> 3y, >=1 -> 1y).
fn infer_years(
    text: &str,
    start: usize,
    end: usize,
    occurrence_count: usize,
    config: &ExtractionConfig,
) -> f64 {
    let window = scan::window(text, start, end, config.years_window);
    if let Some(re) = RE_YEARS_NEAR.as_ref() {
        if let Some(caps) = re.captures(window) {
            if let Ok(n) = caps[1].parse::<f64>() {
                return n.min(config.max_skill_years);
            }
        }
    }
    match occurrence_count {
        n if n >= 5 => 5.0,
        n if n >= 3 => 3.0,
        n if n >= 1 => 1.0,
        _ => 0.0,
    }
}

/// Base 50, +10 per occurrence (capped at +30), +20 when a proximity keyword
/// sits within the narrow window. Clamped to [0, 100].
fn score_relevance(
    text: &str,
    start: usize,
    end: usize,
    occurrence_count: usize,
    config: &ExtractionConfig,
) -> f64 {
    let mut relevance = defaults::RELEVANCE_BASE
        + (occurrence_count as f64 * defaults::RELEVANCE_PER_OCCURRENCE)
            .min(defaults::RELEVANCE_OCCURRENCE_CAP);

    let window = scan::window(text, start, end, config.proficiency_window);
    if config
        .vocabulary
        .proximity_keywords
        .iter()
        .any(|k| scan::contains_word(window, k))
    {
        relevance += defaults::RELEVANCE_PROXIMITY_BONUS;
    }

    relevance.clamp(0.0, 100.0)
}
