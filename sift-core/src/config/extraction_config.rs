use serde::{Deserialize, Serialize};

use super::defaults;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed vocabularies driving rule-based extraction.
///
/// Vocabularies are data, not control flow: deployments can extend or
/// replace any list (e.g. from TOML) without touching extraction logic, and
/// tests can inject tiny controlled vocabularies. All entries are matched
/// case-insensitively as whole words against normalized text, so they must
/// be lowercase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillVocabulary {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub domain: Vec<String>,
    pub certifications: Vec<String>,
    /// Seniority terms that mark `Expert` proficiency near a skill.
    pub expert_terms: Vec<String>,
    /// Proficiency terms that mark `Advanced`.
    pub advanced_terms: Vec<String>,
    /// Novice terms that mark `Beginner`.
    pub novice_terms: Vec<String>,
    /// Keywords that boost relevance when near a skill.
    pub proximity_keywords: Vec<String>,
    /// Known job-title substrings used for role inference.
    pub job_titles: Vec<String>,
    pub doctorate_terms: Vec<String>,
    pub master_terms: Vec<String>,
    pub bachelor_terms: Vec<String>,
    pub associate_terms: Vec<String>,
    pub diploma_terms: Vec<String>,
    /// Fields of study recognized in education sections.
    pub fields_of_study: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self {
            technical: strings(&[
                "python", "java", "javascript", "typescript", "rust", "go", "c++", "c#",
                "ruby", "php", "swift", "kotlin", "scala", "sql", "react", "angular",
                "vue", "node.js", "django", "flask", "spring", "rails", ".net", "aws",
                "azure", "gcp", "docker", "kubernetes", "terraform", "linux", "git",
                "postgresql", "mysql", "mongodb", "redis", "kafka", "spark", "hadoop",
                "tensorflow", "pytorch", "graphql", "rest",
            ]),
            soft: strings(&[
                "communication", "leadership", "teamwork", "problem solving",
                "time management", "adaptability", "collaboration", "mentoring",
                "negotiation", "presentation", "conflict resolution", "critical thinking",
            ]),
            domain: strings(&[
                "machine learning", "data science", "devops", "cybersecurity",
                "cloud computing", "microservices", "distributed systems",
                "data engineering", "site reliability", "embedded systems",
                "fintech", "healthcare", "e-commerce",
            ]),
            certifications: strings(&[
                "aws certified", "azure certified", "gcp certified", "pmp", "cissp",
                "ccna", "cka", "ckad", "comptia security+", "scrum master",
                "six sigma", "itil",
            ]),
            expert_terms: strings(&[
                "expert", "lead", "senior", "architect", "principal", "staff",
                "specialist", "authority",
            ]),
            advanced_terms: strings(&[
                "advanced", "proficient", "extensive", "strong", "deep", "solid",
            ]),
            novice_terms: strings(&[
                "beginner", "basic", "familiar", "learning", "junior", "exposure",
            ]),
            proximity_keywords: strings(&[
                "experience", "developed", "built", "designed", "implemented",
                "maintained", "delivered", "shipped", "led", "created",
            ]),
            job_titles: strings(&[
                "software engineer", "senior engineer", "staff engineer", "developer",
                "architect", "engineering manager", "tech lead", "data scientist",
                "data engineer", "devops engineer", "sre", "product manager",
                "qa engineer", "analyst", "consultant", "intern",
            ]),
            doctorate_terms: strings(&["phd", "ph.d", "doctorate", "doctoral"]),
            master_terms: strings(&[
                "master", "masters", "m.s", "msc", "m.sc", "mba", "m.eng",
            ]),
            bachelor_terms: strings(&[
                "bachelor", "bachelors", "b.s", "bsc", "b.sc", "b.a", "b.eng", "b.tech",
            ]),
            associate_terms: strings(&["associate degree", "associates degree", "a.s", "a.a"]),
            diploma_terms: strings(&["diploma", "high school"]),
            fields_of_study: strings(&[
                "computer science", "software engineering", "information technology",
                "electrical engineering", "mathematics", "statistics", "physics",
                "data science", "business administration", "information systems",
            ]),
        }
    }
}

/// Extraction subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub vocabulary: SkillVocabulary,
    /// Half-width (chars) of the proficiency inspection window.
    pub proficiency_window: usize,
    /// Half-width (chars) of the per-skill years inspection window.
    pub years_window: usize,
    /// Per-skill years cap.
    pub max_skill_years: f64,
    /// Placeholder years contributed by each inferred role.
    pub role_placeholder_years: f64,
    /// Cap on distinct inferred roles.
    pub max_inferred_roles: usize,
    /// Input size ceiling in bytes.
    pub max_input_bytes: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            vocabulary: SkillVocabulary::default(),
            proficiency_window: defaults::PROFICIENCY_WINDOW_CHARS,
            years_window: defaults::YEARS_WINDOW_CHARS,
            max_skill_years: defaults::MAX_SKILL_YEARS,
            role_placeholder_years: defaults::ROLE_PLACEHOLDER_YEARS,
            max_inferred_roles: defaults::MAX_INFERRED_ROLES,
            max_input_bytes: defaults::MAX_INPUT_BYTES,
        }
    }
}

impl ExtractionConfig {
    /// Load a config from TOML, falling back to defaults for absent keys.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_is_lowercase() {
        let vocab = SkillVocabulary::default();
        for list in [
            &vocab.technical,
            &vocab.soft,
            &vocab.domain,
            &vocab.certifications,
        ] {
            for entry in list {
                assert_eq!(entry, &entry.to_lowercase(), "vocabulary entry not lowercase");
            }
        }
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let cfg = ExtractionConfig::from_toml_str(
            r#"
            proficiency_window = 80

            [vocabulary]
            technical = ["cobol"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.proficiency_window, 80);
        assert_eq!(cfg.vocabulary.technical, vec!["cobol".to_string()]);
        // Untouched keys keep their defaults.
        assert_eq!(cfg.years_window, defaults::YEARS_WINDOW_CHARS);
        assert!(!cfg.vocabulary.soft.is_empty());
    }
}
