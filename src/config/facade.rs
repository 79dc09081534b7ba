//! Config loader facade: layered settings plus the quiz definitions file.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::{FlashCardsConfig, QuizGroupMap};
use crate::error::QuizError;
use config::{Environment, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads [`FlashCardsConfig`] from files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, `config/config.toml`,
    /// `config/{FLASHCARDS_ENV}.toml`, `FLASHCARDS__SECTION__KEY` environment variables.
    /// The quiz definitions path resolves against `workspace_root`.
    pub fn load(workspace_root: &Path) -> Result<FlashCardsConfig, QuizError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(Self::environment());

        let mut config: FlashCardsConfig = builder.build()?.try_deserialize()?;
        let catalog_path = config.catalog.resolve_path(workspace_root);
        config.quiz_groups = Self::load_quiz_groups(&catalog_path)?;
        Ok(config)
    }

    /// Load configuration from a single file (plus environment overrides).
    ///
    /// The quiz definitions path resolves against the file's directory.
    pub fn load_from_file(path: &Path) -> Result<FlashCardsConfig, QuizError> {
        if !path.exists() {
            return Err(QuizError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()))
            .add_source(Self::environment());

        let mut config: FlashCardsConfig = builder.build()?.try_deserialize()?;
        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let catalog_path = config.catalog.resolve_path(&base);
        config.quiz_groups = Self::load_quiz_groups(&catalog_path)?;
        Ok(config)
    }

    /// Load and validate, failing with every violation listed
    pub fn load_validated(workspace_root: &Path) -> Result<FlashCardsConfig, QuizError> {
        let config = Self::load(workspace_root)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Path of the user-level configuration file, if a home directory is known
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Parse the quiz definitions file. A missing file yields `None`.
    pub fn load_quiz_groups(path: &Path) -> Result<Option<QuizGroupMap>, QuizError> {
        if !path.exists() {
            debug!(catalog_path = %path.display(), "Quiz definitions file not found");
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            QuizError::Config(format!(
                "Failed to read quiz definitions {}: {}",
                path.display(),
                e
            ))
        })?;
        let groups = Self::parse_quiz_groups(&content).map_err(|e| {
            QuizError::Config(format!(
                "Failed to parse quiz definitions {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(
            catalog_path = %path.display(),
            categories = groups.len(),
            "Loaded quiz definitions"
        );
        Ok(Some(groups))
    }

    /// Parse quiz definitions from TOML text
    pub fn parse_quiz_groups(content: &str) -> Result<QuizGroupMap, toml::de::Error> {
        toml::from_str(content)
    }

    fn environment() -> Environment {
        Environment::with_prefix("FLASHCARDS")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }
}
