//! Configuration System
//!
//! Layered service settings (cache, result persistence, logging) loaded with the `config`
//! crate, plus the quiz definitions file that feeds the catalog. Validation is explicit:
//! every violation is collected and reported together.

use crate::error::QuizError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use crate::cache::CacheConfig;
pub use crate::results::ResultsConfig;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Longest accepted prompt or answer, in characters.
pub const MAX_PROMPT_LENGTH: usize = 50;
/// Longest accepted category name, in characters.
pub const MAX_CATEGORY_LENGTH: usize = 30;
/// Accepted bounds for a group's `max_duration_secs`.
pub const MIN_DURATION_SECS: u64 = 10;
pub const MAX_DURATION_SECS: u64 = 60 * 60;

/// Category name -> prompt groups configured under it
pub type QuizGroupMap = BTreeMap<String, Vec<FlashCardGroup>>;

/// A group of related flash cards that a quiz is issued from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashCardGroup {
    /// Quiz name clients request
    pub name: String,

    /// Minimum prompts per issued quiz; the pool is repeated when it is smaller
    #[serde(default)]
    pub minimum_prompts: u32,

    /// Maximum prompts per issued quiz; 0 means no cap beyond the pool/minimum
    #[serde(default)]
    pub maximum_prompts: u32,

    /// Time allowed to finish the quiz, used to stamp a due time on issued quizzes
    #[serde(default)]
    pub max_duration_secs: Option<u64>,

    /// Prompt -> expected answer
    pub prompts: BTreeMap<String, String>,
}

impl FlashCardGroup {
    pub fn new(
        name: impl Into<String>,
        prompts: BTreeMap<String, String>,
        minimum_prompts: u32,
        maximum_prompts: u32,
    ) -> Self {
        Self {
            name: name.into(),
            minimum_prompts,
            maximum_prompts,
            max_duration_secs: None,
            prompts,
        }
    }

    /// Allowed duration as a chrono duration, if configured
    pub fn max_duration(&self) -> Option<chrono::Duration> {
        self.max_duration_secs
            .and_then(|secs| i64::try_from(secs).ok())
            .map(chrono::Duration::seconds)
    }

    /// Validate field constraints, returning every violation found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("name must not be blank".to_string());
        }
        if self.prompts.is_empty() {
            errors.push("prompts must not be empty".to_string());
        }
        for (prompt, answer) in &self.prompts {
            if prompt.trim().is_empty() {
                errors.push("prompt must not be blank".to_string());
            } else if prompt.chars().count() > MAX_PROMPT_LENGTH {
                errors.push(format!(
                    "prompt '{}' must be {} characters or less",
                    prompt, MAX_PROMPT_LENGTH
                ));
            }
            if answer.trim().is_empty() {
                errors.push(format!("answer for prompt '{}' must not be blank", prompt));
            } else if answer.chars().count() > MAX_PROMPT_LENGTH {
                errors.push(format!(
                    "answer for prompt '{}' must be {} characters or less",
                    prompt, MAX_PROMPT_LENGTH
                ));
            }
        }
        if self.maximum_prompts > 0 && self.minimum_prompts > self.maximum_prompts {
            errors.push(format!(
                "minimum_prompts ({}) must be less than or equal to maximum_prompts ({})",
                self.minimum_prompts, self.maximum_prompts
            ));
        }
        if let Some(secs) = self.max_duration_secs {
            if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&secs) {
                errors.push(format!(
                    "max_duration_secs ({}) must be between {} and {}",
                    secs, MIN_DURATION_SECS, MAX_DURATION_SECS
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Where the quiz definitions live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Quiz definitions file; relative paths resolve against the workspace root
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("config").join("quizzes.toml")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl CatalogConfig {
    pub fn resolve_path(&self, base: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            base.join(&self.path)
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashCardsConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub results: ResultsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Quiz definitions read from `catalog.path`; absent when the file does not exist
    #[serde(skip)]
    pub quiz_groups: Option<QuizGroupMap>,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Category(String, String),
    Group {
        category: String,
        group: String,
        message: String,
    },
    Cache(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Category(name, msg) => write!(f, "Category '{}': {}", name, msg),
            ValidationError::Group {
                category,
                group,
                message,
            } => write!(f, "Quiz '{}' in '{}': {}", group, category, message),
            ValidationError::Cache(msg) => write!(f, "Cache: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a category name: non-blank, bounded length, alphanumerics/underscores/spaces only
pub fn validate_category_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("must not be blank".to_string());
    }
    if name.chars().count() > MAX_CATEGORY_LENGTH {
        return Err(format!("must be {} characters or less", MAX_CATEGORY_LENGTH));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ')
    {
        return Err("must contain only alpha-numeric characters and spaces".to_string());
    }
    Ok(())
}

impl FlashCardsConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(groups) = &self.quiz_groups {
            if groups.is_empty() {
                errors.push(ValidationError::Category(
                    String::new(),
                    "at least one category must be configured".to_string(),
                ));
            }
            for (category, entries) in groups {
                if let Err(e) = validate_category_name(category) {
                    errors.push(ValidationError::Category(category.clone(), e));
                }
                for group in entries {
                    if let Err(messages) = group.validate() {
                        errors.extend(messages.into_iter().map(|message| {
                            ValidationError::Group {
                                category: category.clone(),
                                group: group.name.clone(),
                                message,
                            }
                        }));
                    }
                }
            }
        }

        if let Err(e) = self.cache.validate() {
            errors.push(ValidationError::Cache(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every violation into a single configuration error
    pub fn validate_or_error(&self) -> Result<(), QuizError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            QuizError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}
