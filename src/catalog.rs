//! Quiz catalog: a read-only view over the configured prompt groups.
//!
//! The view is materialized on first access. Concurrent first callers block on a
//! single build and all observe the same result; the built map is never mutated.

use crate::config::{FlashCardGroup, FlashCardsConfig, QuizGroupMap};
use crate::error::QuizError;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

pub struct ConfigCatalog {
    source: Option<QuizGroupMap>,
    definitions: OnceCell<Arc<QuizGroupMap>>,
}

impl ConfigCatalog {
    /// Catalog over an optional group map; `None` fails on first access
    pub fn new(source: Option<QuizGroupMap>) -> Self {
        Self {
            source,
            definitions: OnceCell::new(),
        }
    }

    pub fn from_config(config: &FlashCardsConfig) -> Self {
        Self::new(config.quiz_groups.clone())
    }

    /// All configured prompt groups by category
    pub fn definitions(&self) -> Result<Arc<QuizGroupMap>, QuizError> {
        self.definitions
            .get_or_try_init(|| {
                let source = self.source.as_ref().ok_or_else(|| {
                    QuizError::InvalidState(
                        "quiz group configuration must not be absent".to_string(),
                    )
                })?;
                info!(
                    categories = source.len(),
                    quizzes = source.values().map(Vec::len).sum::<usize>(),
                    "Built quiz catalog"
                );
                Ok(Arc::new(source.clone()))
            })
            .map(Arc::clone)
    }

    /// Quiz names per category; categories without quizzes are left out
    pub fn quiz_names_by_category(&self) -> Result<BTreeMap<String, Vec<String>>, QuizError> {
        let definitions = self.definitions()?;
        Ok(definitions
            .iter()
            .filter(|(_, groups)| !groups.is_empty())
            .map(|(category, groups)| {
                (
                    category.clone(),
                    groups.iter().map(|g| g.name.clone()).collect(),
                )
            })
            .collect())
    }

    /// First group whose name matches, ignoring case, in category order
    pub fn find(&self, quiz_name: &str) -> Result<Option<FlashCardGroup>, QuizError> {
        let definitions = self.definitions()?;
        let wanted = quiz_name.to_lowercase();
        Ok(definitions
            .values()
            .flatten()
            .find(|group| group.name.to_lowercase() == wanted)
            .cloned())
    }
}
