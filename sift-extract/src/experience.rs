//! Total-experience inference: an explicit "<N> years of experience"
//! statement anywhere in the text wins; otherwise experience is summed from
//! inferred roles (known title substrings, each a fixed placeholder
//! duration).

use regex::Regex;
use std::sync::LazyLock;

use sift_core::config::ExtractionConfig;
use sift_core::models::{ExperienceInfo, RoleStint};

use crate::scan;

/// `"<N> years of experience"` / `"<N> years experience"`.
static RE_TOTAL_YEARS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\s*\+?\s*(?:years?|yrs?)(?:\s+of)?\s+experience\b").ok()
});

pub fn infer(text: &str, config: &ExtractionConfig) -> ExperienceInfo {
    let roles = infer_roles(text, config);

    let stated_years = RE_TOTAL_YEARS
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps[1].parse::<f64>().ok());

    let total = match stated_years {
        Some(years) => years,
        None => roles.iter().map(|r| r.years).sum(),
    };

    ExperienceInfo::new(total, roles)
}

/// Detect known job titles, ordered by first appearance in the text, capped
/// at `max_inferred_roles` distinct titles. Each contributes a fixed
/// placeholder duration; resumes rarely state per-role dates in parseable
/// form.
fn infer_roles(text: &str, config: &ExtractionConfig) -> Vec<RoleStint> {
    let mut found: Vec<(usize, &str)> = config
        .vocabulary
        .job_titles
        .iter()
        .filter_map(|title| {
            scan::find_occurrences(text, title)
                .first()
                .map(|&pos| (pos, title.as_str()))
        })
        .collect();

    found.sort_by_key(|&(pos, _)| pos);
    found.truncate(config.max_inferred_roles);

    found
        .into_iter()
        .map(|(_, title)| RoleStint {
            title: title.to_string(),
            years: config.role_placeholder_years,
        })
        .collect()
}
