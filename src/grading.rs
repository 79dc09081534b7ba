//! Grading: compares a completed quiz with the quiz that was issued.
//!
//! Two paths exist. [`GradingEngine::grade`] produces the result handed back to the
//! taker and matches answers exactly. [`GradingEngine::grade_detailed`] produces the
//! record kept for each graded quiz, with per-prompt outcomes, and matches answers
//! ignoring case. When the taker asks for inline grading, the outcomes attached to
//! their result use the same exact comparison as their score.
//!
//! Elapsed time is reported as total whole minutes plus the remaining seconds, so a
//! quiz left open for an hour and a half reports 90 minutes rather than 30.

use crate::error::QuizError;
use crate::quiz::{CompletedPrompt, CompletedQuiz, GradedQuiz, Prompt, Quiz, QuizResult, Score};
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct GradingEngine;

impl GradingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Grade for the quiz taker, timed against the current clock
    pub fn grade(&self, quiz: &Quiz, submission: &CompletedQuiz) -> Result<QuizResult, QuizError> {
        self.grade_at(quiz, submission, Utc::now())
    }

    /// Grade for the quiz taker with answers matched exactly
    pub fn grade_at(
        &self,
        quiz: &Quiz,
        submission: &CompletedQuiz,
        now: DateTime<Utc>,
    ) -> Result<QuizResult, QuizError> {
        check_lengths(quiz, submission)?;

        let outcomes = completed_prompts_with(quiz, submission, exact_match);
        let score = score_of(&outcomes, elapsed(quiz.created_at, now))?;

        debug!(
            quiz_id = %quiz.id,
            prompt_count = score.prompt_count,
            correct_answers = score.correct_answers,
            "Graded quiz"
        );
        Ok(QuizResult {
            name: quiz.name.clone(),
            score,
            completed_prompts: submission.inline_grading.then_some(outcomes),
        })
    }

    /// Detailed record, timed against the current clock
    pub fn grade_detailed(
        &self,
        quiz: &Quiz,
        submission: &CompletedQuiz,
    ) -> Result<GradedQuiz, QuizError> {
        self.grade_detailed_at(quiz, submission, Utc::now())
    }

    /// Detailed record with per-prompt outcomes; answers match ignoring case
    pub fn grade_detailed_at(
        &self,
        quiz: &Quiz,
        submission: &CompletedQuiz,
        now: DateTime<Utc>,
    ) -> Result<GradedQuiz, QuizError> {
        check_lengths(quiz, submission)?;

        let completed_prompts = completed_prompts_with(quiz, submission, ignore_case_match);
        let score = score_of(&completed_prompts, elapsed(quiz.created_at, now))?;

        Ok(GradedQuiz {
            id: quiz.id,
            name: quiz.name.clone(),
            created_at: quiz.created_at,
            graded_at: now,
            score,
            completed_prompts,
        })
    }
}

fn check_lengths(quiz: &Quiz, submission: &CompletedQuiz) -> Result<(), QuizError> {
    if quiz.prompts.len() != submission.answers.len() {
        return Err(QuizError::InvalidArgument(format!(
            "prompts ({}) and answers ({}) size must be equivalent",
            quiz.prompts.len(),
            submission.answers.len()
        )));
    }
    Ok(())
}

/// Pairs of present prompts with the answer given at the same position
fn answered<'a>(
    quiz: &'a Quiz,
    submission: &'a CompletedQuiz,
) -> impl Iterator<Item = (&'a Prompt, &'a String)> {
    quiz.prompts
        .iter()
        .zip(&submission.answers)
        .filter_map(|(prompt, answer)| prompt.as_ref().map(|p| (p, answer)))
}

fn exact_match(expected: &str, given: &str) -> bool {
    expected == given
}

fn ignore_case_match(expected: &str, given: &str) -> bool {
    expected.to_lowercase() == given.to_lowercase()
}

fn completed_prompts_with(
    quiz: &Quiz,
    submission: &CompletedQuiz,
    matches: impl Fn(&str, &str) -> bool,
) -> Vec<CompletedPrompt> {
    answered(quiz, submission)
        .map(|(prompt, answer)| CompletedPrompt {
            prompt: prompt.prompt.clone(),
            expected_answer: prompt.answer.clone(),
            answer_provided: answer.clone(),
            correct_answer: matches(prompt.answer.as_str(), answer.as_str()),
        })
        .collect()
}

fn score_of(
    outcomes: &[CompletedPrompt],
    elapsed: std::time::Duration,
) -> Result<Score, QuizError> {
    let correct = outcomes.iter().filter(|p| p.correct_answer).count() as u32;
    Score::new(outcomes.len() as u32, correct, elapsed)
}

/// Time since creation; a creation time in the future counts as zero
fn elapsed(created_at: DateTime<Utc>, now: DateTime<Utc>) -> std::time::Duration {
    (now - created_at).to_std().unwrap_or_default()
}
