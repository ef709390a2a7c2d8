use std::path::PathBuf;

use crate::data::{load_catalog_from_json, Catalog, LoadError};
use crate::models::BadgePolicy;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings for one quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Question file; the built-in practice set is used when absent.
    pub questions: Option<PathBuf>,
    pub badge_policy: BadgePolicy,
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions: None,
            badge_policy: BadgePolicy::default(),
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl QuizConfig {
    pub fn load_catalog(&self) -> Result<Catalog, LoadError> {
        match &self.questions {
            Some(path) => load_catalog_from_json(path),
            None => Ok(Catalog::sample()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SAMPLE_TITLE;

    #[test]
    fn test_default_config_uses_sample_catalog() {
        let config = QuizConfig::default();
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.title(), SAMPLE_TITLE);
        assert_eq!(config.badge_policy, BadgePolicy::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_question_file_is_an_error() {
        let config = QuizConfig {
            questions: Some(PathBuf::from("no-such-questions.json")),
            ..Default::default()
        };
        assert!(matches!(config.load_catalog(), Err(LoadError::Io { .. })));
    }
}
