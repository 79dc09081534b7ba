//! Quiz service
//!
//! The surface outer layers call: list the configured quizzes, issue a quiz by name,
//! and grade a completed quiz against the issued instance.
//!
//! An issued quiz is gradable while its cache entry lives. Grading leaves the entry in
//! place unless `consume_on_grade` is set, in which case a second grade of the same
//! quiz fails as not found.

use crate::cache::QuizCache;
use crate::catalog::ConfigCatalog;
use crate::config::FlashCardsConfig;
use crate::error::QuizError;
use crate::grading::GradingEngine;
use crate::quiz::{CompletedQuiz, Quiz, QuizGenerator, QuizResult};
use crate::results::{JsonResultStore, ResultStore};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct QuizService {
    catalog: ConfigCatalog,
    generator: QuizGenerator,
    cache: QuizCache,
    grader: GradingEngine,
    results: Option<Arc<dyn ResultStore>>,
    consume_on_grade: bool,
}

impl QuizService {
    pub fn new(
        catalog: ConfigCatalog,
        generator: QuizGenerator,
        cache: QuizCache,
        results: Option<Arc<dyn ResultStore>>,
    ) -> Self {
        Self {
            catalog,
            generator,
            cache,
            grader: GradingEngine::new(),
            results,
            consume_on_grade: false,
        }
    }

    /// Wire a service from loaded configuration.
    ///
    /// Relative result directories resolve against `workspace_root`.
    pub fn from_config(
        config: &FlashCardsConfig,
        workspace_root: &Path,
        generator: QuizGenerator,
    ) -> Result<Self, QuizError> {
        let results: Option<Arc<dyn ResultStore>> = if config.results.enabled {
            let dir = config.results.resolve_dir(workspace_root)?;
            Some(Arc::new(JsonResultStore::new(dir)?))
        } else {
            None
        };

        let mut service = Self::new(
            ConfigCatalog::from_config(config),
            generator,
            QuizCache::from_config(&config.cache),
            results,
        );
        service.consume_on_grade = config.cache.consume_on_grade;
        Ok(service)
    }

    pub fn with_consume_on_grade(mut self, consume: bool) -> Self {
        self.consume_on_grade = consume;
        self
    }

    pub fn catalog(&self) -> &ConfigCatalog {
        &self.catalog
    }

    pub fn cache(&self) -> &QuizCache {
        &self.cache
    }

    /// Quiz names grouped by category
    pub fn list_quizzes(&self) -> Result<BTreeMap<String, Vec<String>>, QuizError> {
        self.catalog.quiz_names_by_category()
    }

    /// Issue a quiz by name (case-insensitive). A found quiz is cached for grading.
    pub fn get_quiz(&self, quiz_name: &str) -> Result<Option<Quiz>, QuizError> {
        let group = match self.catalog.find(quiz_name)? {
            Some(group) => group,
            None => return Ok(None),
        };

        let quiz = self.generator.generate(&group)?;
        self.cache.put(quiz.id, Arc::new(quiz.clone()));

        info!(
            quiz_id = %quiz.id,
            quiz_name = %quiz.name,
            prompt_count = quiz.prompts.len(),
            "Issued quiz"
        );
        Ok(Some(quiz))
    }

    /// Like [`QuizService::get_quiz`], with an unknown name reported as `NotFound`
    pub fn issue_quiz(&self, quiz_name: &str) -> Result<Quiz, QuizError> {
        self.get_quiz(quiz_name)?.ok_or_else(|| {
            warn!(quiz_name, "No quiz configured with this name");
            QuizError::NotFound(format!("No match found for quiz: '{}'", quiz_name))
        })
    }

    /// Grade a completed quiz against the issued quiz with the given id.
    ///
    /// The detailed record is saved before the result is returned; a failed save
    /// fails the call. Both are timed against the same instant.
    pub fn grade_quiz(
        &self,
        id: Uuid,
        submission: &CompletedQuiz,
    ) -> Result<QuizResult, QuizError> {
        let quiz = self.cache.get_if_present(&id).ok_or_else(|| {
            warn!(quiz_id = %id, "Grading requested for unknown or expired quiz");
            QuizError::NotFound(format!("Quiz='{}' not found", id))
        })?;

        if quiz.name != submission.name {
            warn!(quiz_id = %id, submitted_name = %submission.name, "Quiz name mismatch");
            return Err(QuizError::NotFound("Quiz name mismatch".to_string()));
        }

        let now = Utc::now();
        let result = self.grader.grade_at(&quiz, submission, now)?;
        let record = self.grader.grade_detailed_at(&quiz, submission, now)?;

        if let Some(store) = &self.results {
            store.save(&record)?;
        }
        if self.consume_on_grade {
            self.cache.invalidate(&id);
        }

        info!(
            quiz_id = %id,
            quiz_name = %result.name,
            percentage = result.score.percentage,
            "Graded quiz"
        );
        Ok(result)
    }
}
