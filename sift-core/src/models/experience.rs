use serde::{Deserialize, Serialize};

/// Ceiling on inferable career length, in years.
pub const MAX_CAREER_YEARS: f64 = 50.0;

/// One inferred role in a candidate's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleStint {
    pub title: String,
    pub years: f64,
}

/// Aggregate career history inferred from a resume.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceInfo {
    /// Total years of experience, capped at [`MAX_CAREER_YEARS`].
    pub total_years: f64,
    /// Inferred roles, in order of appearance in the text.
    pub roles: Vec<RoleStint>,
}

impl ExperienceInfo {
    /// Build experience info, enforcing the invariants:
    /// `total_years >= max(role durations)` when roles are present, and
    /// `total_years <= MAX_CAREER_YEARS`.
    pub fn new(total_years: f64, roles: Vec<RoleStint>) -> Self {
        let longest_role = roles.iter().map(|r| r.years).fold(0.0, f64::max);
        let total_years = total_years.max(longest_role).max(0.0).min(MAX_CAREER_YEARS);
        Self { total_years, roles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_covers_longest_role() {
        let info = ExperienceInfo::new(
            1.0,
            vec![RoleStint {
                title: "engineer".into(),
                years: 4.0,
            }],
        );
        assert_eq!(info.total_years, 4.0);
    }

    #[test]
    fn total_capped_at_ceiling() {
        let info = ExperienceInfo::new(120.0, vec![]);
        assert_eq!(info.total_years, MAX_CAREER_YEARS);
    }
}
