//! Named defaults for every tunable in the engine.

// ── Extraction windows & caps ─────────────────────────────────────────────

/// Characters inspected on either side of a skill for proficiency terms.
pub const PROFICIENCY_WINDOW_CHARS: usize = 50;
/// Characters inspected on either side of a skill for a "<N> years" pattern.
pub const YEARS_WINDOW_CHARS: usize = 100;
/// Ceiling on per-skill years of experience.
pub const MAX_SKILL_YEARS: f64 = 20.0;
/// Placeholder duration for an inferred role, in years.
pub const ROLE_PLACEHOLDER_YEARS: f64 = 2.0;
/// At most this many distinct roles contribute to inferred experience.
pub const MAX_INFERRED_ROLES: usize = 5;
/// Resumes larger than this are rejected before extraction.
pub const MAX_INPUT_BYTES: usize = 1024 * 1024;

// ── Relevance scoring ─────────────────────────────────────────────────────

/// Base relevance for any detected technical skill.
pub const RELEVANCE_BASE: f64 = 50.0;
/// Relevance added per occurrence of the skill.
pub const RELEVANCE_PER_OCCURRENCE: f64 = 10.0;
/// Cap on the occurrence contribution.
pub const RELEVANCE_OCCURRENCE_CAP: f64 = 30.0;
/// Relevance added when a proximity keyword appears near the skill.
pub const RELEVANCE_PROXIMITY_BONUS: f64 = 20.0;
/// Fixed relevance for soft skills.
pub const SOFT_SKILL_RELEVANCE: f64 = 70.0;
/// Fixed relevance for domain skills.
pub const DOMAIN_SKILL_RELEVANCE: f64 = 75.0;
/// Fixed relevance for certifications surfaced as skills.
pub const CERTIFICATION_RELEVANCE: f64 = 80.0;

// ── Privacy accounting ────────────────────────────────────────────────────

/// Total epsilon budget per subject.
pub const EPSILON_TOTAL: f64 = 1.0;
/// Failure probability for the Gaussian mechanism.
pub const DELTA: f64 = 1e-5;
/// Per-value clipping bound applied before aggregation.
pub const CLIP_NORM: f64 = 1.0;
/// Noise scale factor relative to the epsilon spent per call.
pub const NOISE_MULTIPLIER: f64 = 1.1;
/// Flat epsilon charged per logged aggregate operation.
pub const EPSILON_PER_OPERATION: f64 = 0.1;
/// Audit entries included in a privacy report.
pub const REPORT_RECENT_ENTRIES: usize = 10;
