//! CLI route: single route table and run context. Dispatches to the quiz service and presentation.

use crate::config::{ConfigLoader, FlashCardsConfig};
use crate::error::QuizError;
use crate::quiz::{CompletedQuiz, Quiz, QuizGenerator};
use crate::service::QuizService;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_quiz_json, format_quiz_list_json, format_quiz_list_text, format_quiz_text,
    format_result_text, format_validation_result,
};

/// Runtime context for CLI execution: loaded configuration and the quiz service.
pub struct RunContext {
    service: QuizService,
    config: FlashCardsConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Result<Self, QuizError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        let generator = match seed {
            Some(seed) => QuizGenerator::with_seed(seed),
            None => QuizGenerator::new(),
        };
        let service = QuizService::from_config(&config, &workspace_root, generator)?;

        Ok(Self {
            service,
            config,
            workspace_root,
        })
    }

    pub fn service(&self) -> &QuizService {
        &self.service
    }

    pub fn workspace_root(&self) -> &PathBuf {
        &self.workspace_root
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, QuizError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, QuizError> {
        match command {
            Commands::List { format } => {
                self.config.validate_or_error()?;
                let quizzes = self.service.list_quizzes()?;
                match format.as_str() {
                    "json" => format_quiz_list_json(&quizzes),
                    "text" => Ok(format_quiz_list_text(&quizzes)),
                    other => Err(invalid_format(other)),
                }
            }
            Commands::Show { name, format } => {
                self.config.validate_or_error()?;
                let quiz = self.service.issue_quiz(name)?;
                match format.as_str() {
                    "json" => format_quiz_json(&quiz),
                    "text" => Ok(format_quiz_text(&quiz)),
                    other => Err(invalid_format(other)),
                }
            }
            Commands::Take { name } => {
                self.config.validate_or_error()?;
                self.handle_take(name)
            }
            Commands::Validate => self.handle_validate(),
        }
    }

    fn handle_take(&self, name: &str) -> Result<String, QuizError> {
        use dialoguer::Input;

        let quiz = self.service.issue_quiz(name)?;
        let submission = collect_answers(&quiz, |position, prompt| {
            Input::<String>::new()
                .with_prompt(format!("{}. {}", position, prompt))
                .allow_empty(true)
                .interact_text()
                .map_err(|e| QuizError::InvalidState(format!("Failed to get user input: {}", e)))
        })?;
        let result = self.service.grade_quiz(quiz.id, &submission)?;
        Ok(format_result_text(&result))
    }

    fn handle_validate(&self) -> Result<String, QuizError> {
        if self.config.quiz_groups.is_none() {
            let path = self.config.catalog.resolve_path(&self.workspace_root);
            return Err(QuizError::Config(format!(
                "Quiz definitions not found: {}",
                path.display()
            )));
        }
        let quiz_count = self
            .config
            .quiz_groups
            .as_ref()
            .map(|groups| groups.values().map(Vec::len).sum())
            .unwrap_or(0);
        let errors = self.config.validate().err().unwrap_or_default();
        debug!(errors = errors.len(), "Validated configuration");
        Ok(format_validation_result(&errors, quiz_count))
    }
}

/// Build a submission by asking `read` for each present prompt in order.
///
/// Answers stay positional: an absent prompt gets an empty answer. Outcomes are
/// requested inline so the taker sees which answers were wrong.
pub fn collect_answers<F>(quiz: &Quiz, mut read: F) -> Result<CompletedQuiz, QuizError>
where
    F: FnMut(usize, &str) -> Result<String, QuizError>,
{
    let mut answers = Vec::with_capacity(quiz.prompts.len());
    let mut position = 0;
    for prompt in &quiz.prompts {
        match prompt {
            Some(prompt) => {
                position += 1;
                answers.push(read(position, &prompt.prompt)?);
            }
            None => answers.push(String::new()),
        }
    }
    let mut submission = CompletedQuiz::new(quiz.name.clone(), answers);
    submission.inline_grading = true;
    Ok(submission)
}

fn invalid_format(format: &str) -> QuizError {
    QuizError::InvalidArgument(format!(
        "Unknown format '{}' (expected text or json)",
        format
    ))
}
