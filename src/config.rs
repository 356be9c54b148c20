//! Configuration System
//!
//! Layered configuration: built-in defaults, then the user's global config
//! file, then `<root>/.rmchars.toml`, then `RMCHARS_*` environment variables.
//! Command-line flags are applied on top by the CLI.

use crate::error::RmcharsError;
use crate::fixture::{FixtureConfig, MAX_FIXTURE_DEPTH};
use crate::logging::LoggingConfig;
use crate::sanitize::charset::parse_category;
use crate::sanitize::{CharSet, Classifier, Platform};
use crate::tree::{CollisionPolicy, WalkerConfig};
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RmcharsConfig {
    /// Which characters count as invalid
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// What to do when a sanitized name is taken or empty
    #[serde(default)]
    pub collision: CollisionPolicy,

    /// Walk limits
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Fixture generator fan-out
    #[serde(default)]
    pub fixtures: FixtureConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Classifier settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Target platform; the compile target when unset
    #[serde(default)]
    pub platform: Option<Platform>,

    /// Additional literal characters to reject
    #[serde(default)]
    pub extra_invalid: String,

    /// Rejected Unicode general categories, as two-letter abbreviations
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_categories() -> Vec<String> {
    vec!["Lo".to_string(), "So".to_string(), "Cc".to_string()]
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            platform: None,
            extra_invalid: String::new(),
            categories: default_categories(),
        }
    }
}

impl ClassifierConfig {
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Build the classifier these settings describe.
    pub fn build(&self) -> Result<Classifier, RmcharsError> {
        let platform = self.platform();
        let categories = self
            .categories
            .iter()
            .map(|abbrev| {
                parse_category(abbrev).ok_or_else(|| {
                    RmcharsError::Config(format!("Unknown general category: {}", abbrev))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let charset = CharSet::new(platform.invalid_chars().to_vec(), categories)
            .with_extra_chars(self.extra_invalid.chars());
        Ok(Classifier::new(charset))
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Classifier(String),
    Walker(String),
    Fixtures(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Classifier(msg) => write!(f, "Classifier: {}", msg),
            ValidationError::Walker(msg) => write!(f, "Walker: {}", msg),
            ValidationError::Fixtures(msg) => write!(f, "Fixtures: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl RmcharsConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for abbrev in &self.classifier.categories {
            if parse_category(abbrev).is_none() {
                errors.push(ValidationError::Classifier(format!(
                    "Unknown general category '{}'",
                    abbrev
                )));
            }
        }
        if self.classifier.extra_invalid.contains('.') {
            errors.push(ValidationError::Classifier(
                "'.' cannot be an invalid character".to_string(),
            ));
        }

        if self.walker.max_depth == Some(0) {
            errors.push(ValidationError::Walker(
                "max_depth must be at least 1".to_string(),
            ));
        }

        if self.fixtures.branching == Some(0) {
            errors.push(ValidationError::Fixtures(
                "branching must be at least 1".to_string(),
            ));
        }
        if self.fixtures.wide_depth_limit > MAX_FIXTURE_DEPTH {
            errors.push(ValidationError::Fixtures(format!(
                "wide_depth_limit must not exceed {}",
                MAX_FIXTURE_DEPTH
            )));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding every problem into one error.
    pub fn ensure_valid(&self) -> Result<(), RmcharsError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            RmcharsError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}
