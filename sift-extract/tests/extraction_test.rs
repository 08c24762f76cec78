use sift_core::config::{ExtractionConfig, SkillVocabulary};
use sift_core::models::{DegreeLevel, Proficiency, SkillCategory};
use sift_extract::AttributeExtractor;

#[test]
fn senior_backend_resume_extracts_full_profile() {
    let extractor = AttributeExtractor::with_defaults();
    let text = test_fixtures::load_text("resumes/senior_backend.txt");
    let profile = extractor.extract(&text).unwrap();

    // Core technical skills present.
    for skill in ["python", "rust", "kafka", "docker", "kubernetes", "aws"] {
        assert!(profile.has_skill(skill), "missing skill {skill}");
    }

    // Soft skills picked up with fixed defaults.
    let comm = profile.find_skill("communication").unwrap();
    assert_eq!(comm.category, SkillCategory::Soft);
    assert_eq!(comm.proficiency, Proficiency::Intermediate);

    // "8 years of experience" stated explicitly.
    assert_eq!(profile.experience.total_years, 8.0);
    assert!(!profile.experience.roles.is_empty());

    assert_eq!(profile.education.degree, DegreeLevel::Bachelor);
    assert_eq!(profile.education.field.as_deref(), Some("computer science"));
    assert!(profile.education.institution.is_none());

    assert!(profile
        .certifications
        .contains(&"aws certified".to_string()));
    assert!(profile.certifications.contains(&"cka".to_string()));

    assert!(!profile.summary.is_empty());
}

#[test]
fn junior_resume_reads_as_junior() {
    let extractor = AttributeExtractor::with_defaults();
    let text = test_fixtures::load_text("resumes/junior_frontend.txt");
    let profile = extractor.extract(&text).unwrap();

    let react = profile.find_skill("react").unwrap();
    assert_eq!(react.proficiency, Proficiency::Beginner);

    assert_eq!(profile.experience.total_years, 1.0);
    assert_eq!(profile.education.degree, DegreeLevel::Associate);
}

#[test]
fn extraction_is_deterministic() {
    let extractor = AttributeExtractor::with_defaults();
    let text = test_fixtures::load_text("resumes/senior_backend.txt");

    let first = extractor.extract(&text).unwrap();
    for _ in 0..5 {
        assert_eq!(extractor.extract(&text).unwrap(), first);
    }
}

#[test]
fn controlled_vocabulary_limits_detection() {
    let vocabulary = SkillVocabulary {
        technical: vec!["cobol".to_string()],
        soft: vec![],
        domain: vec![],
        certifications: vec![],
        ..Default::default()
    };
    let extractor = AttributeExtractor::new(ExtractionConfig {
        vocabulary,
        ..Default::default()
    });

    let profile = extractor
        .extract("python and cobol with communication skills")
        .unwrap();
    assert_eq!(profile.skills.len(), 1);
    assert_eq!(profile.skills[0].name, "cobol");
}

#[test]
fn contact_details_never_reach_skill_matching() {
    let extractor = AttributeExtractor::with_defaults();

    // The vocabulary word inside the address must not register as a skill,
    // because the whole email is redacted before scanning.
    let profile = extractor
        .extract("Reach me at python@jobs.example.com or (555) 123-4567.")
        .unwrap();
    assert!(!profile.has_skill("python"));

    // The same word outside an address still matches.
    let profile = extractor.extract("I write python daily.").unwrap();
    assert!(profile.has_skill("python"));
}

#[test]
fn skill_relevance_and_years_stay_in_bounds() {
    let extractor = AttributeExtractor::with_defaults();
    let text = test_fixtures::load_text("resumes/senior_backend.txt");
    let profile = extractor.extract(&text).unwrap();

    for skill in &profile.skills {
        assert!(
            (0.0..=100.0).contains(&skill.relevance),
            "relevance out of bounds for {}",
            skill.name
        );
        assert!(skill.years_experience >= 0.0);
        assert!(skill.years_experience <= 20.0);
    }
}
