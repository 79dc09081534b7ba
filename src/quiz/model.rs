//! Quiz value types: issued quizzes, submissions and graded results.

use crate::error::QuizError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single prompt and the answer expected for it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prompt {
    pub prompt: String,
    pub answer: String,
}

impl Prompt {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// An issued quiz instance.
///
/// Prompt order is significant and duplicates are allowed. An absent entry
/// (`None`) is skipped by grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
    pub prompts: Vec<Option<Prompt>>,
}

impl Quiz {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        prompts: Vec<Prompt>,
    ) -> Result<Self, QuizError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QuizError::InvalidArgument(
                "quiz name must not be blank".to_string(),
            ));
        }
        Ok(Self {
            id,
            name,
            created_at,
            due_at: None,
            prompts: prompts.into_iter().map(Some).collect(),
        })
    }

    /// Prompts that are present, in order
    pub fn present_prompts(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.iter().flatten()
    }
}

/// A quiz returned by the taker for grading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedQuiz {
    pub name: String,
    pub answers: Vec<String>,
    /// Ask for per-prompt outcomes in the returned result
    #[serde(default)]
    pub inline_grading: bool,
}

impl CompletedQuiz {
    pub fn new(name: impl Into<String>, answers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            answers,
            inline_grading: false,
        }
    }
}

/// Outcome for one prompt of a graded quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedPrompt {
    pub prompt: String,
    pub expected_answer: String,
    pub answer_provided: String,
    pub correct_answer: bool,
}

/// Score breakdown shared by the external and internal results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub prompt_count: u32,
    pub correct_answers: u32,
    pub percentage: u32,
    pub time_minutes: u64,
    pub time_seconds: u64,
}

impl Score {
    /// Build a score, rejecting more correct answers than prompts
    pub fn new(
        prompt_count: u32,
        correct_answers: u32,
        elapsed: std::time::Duration,
    ) -> Result<Self, QuizError> {
        if correct_answers > prompt_count {
            return Err(QuizError::InvalidState(format!(
                "correct answers ({}) must not exceed prompt count ({})",
                correct_answers, prompt_count
            )));
        }
        let secs = elapsed.as_secs();
        Ok(Self {
            prompt_count,
            correct_answers,
            percentage: percentage(correct_answers, prompt_count),
            time_minutes: secs / 60,
            time_seconds: secs % 60,
        })
    }
}

/// Floor of `correct * 100 / total`, 0 when there are no prompts
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        (u64::from(correct) * 100 / u64::from(total)) as u32
    }
}

/// Graded result returned to the quiz taker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub name: String,
    #[serde(flatten)]
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_prompts: Option<Vec<CompletedPrompt>>,
}

/// Graded result kept for the record, with every prompt's outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedQuiz {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub graded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub score: Score,
    pub completed_prompts: Vec<CompletedPrompt>,
}
