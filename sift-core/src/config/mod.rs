//! Engine configuration.
//!
//! All configuration is plain data with `Default` impls backed by named
//! constants in [`defaults`]. Structs deserialize from TOML so deployments
//! can override vocabularies and privacy parameters without code changes.

pub mod defaults;

mod extraction_config;
mod privacy_config;

pub use extraction_config::{ExtractionConfig, SkillVocabulary};
pub use privacy_config::{NoiseMechanism, PrivacyConfig};
