use proptest::prelude::*;

use sift_extract::normalizer::normalize;
use sift_extract::AttributeExtractor;

proptest! {
    #[test]
    fn normalization_is_idempotent(text in "\\PC{0,200}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn extraction_never_panics_and_respects_bounds(text in "\\PC{0,500}") {
        let extractor = AttributeExtractor::with_defaults();
        let profile = extractor.extract(&text).unwrap();

        for skill in &profile.skills {
            prop_assert!((0.0..=100.0).contains(&skill.relevance));
            prop_assert!(skill.years_experience >= 0.0);
        }
        prop_assert!(profile.experience.total_years >= 0.0);
        prop_assert!(profile.experience.total_years <= 50.0);
        prop_assert!(profile.education.institution.is_none());
    }

    #[test]
    fn detected_skills_come_from_the_vocabulary(text in "[a-z +.#-]{0,300}") {
        let extractor = AttributeExtractor::with_defaults();
        let vocab = extractor.config().vocabulary.clone();
        let profile = extractor.extract(&text).unwrap();

        for skill in &profile.skills {
            let known = vocab.technical.contains(&skill.name)
                || vocab.soft.contains(&skill.name)
                || vocab.domain.contains(&skill.name)
                || vocab.certifications.contains(&skill.name);
            prop_assert!(known, "unknown skill name {:?}", skill.name);
        }
    }
}
