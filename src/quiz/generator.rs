//! Quiz generation: turns a configured prompt group into an issued quiz.
//!
//! The pool is repeated enough times to reach the group's minimum, shuffled,
//! then cut down to the allowed size. The random source is owned by the
//! generator so a seeded generator produces the same prompt order every time.

use crate::config::FlashCardGroup;
use crate::error::QuizError;
use crate::quiz::model::{Prompt, Quiz};
use chrono::Utc;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;
use uuid::Uuid;

/// Number of full passes over a pool of `pool_size` prompts needed to reach
/// `max(1, minimum_prompts)` entries.
pub fn copies_count(minimum_prompts: u32, pool_size: usize) -> Result<usize, QuizError> {
    if pool_size == 0 {
        return Err(QuizError::InvalidArgument(
            "prompt pool size must be greater than 0".to_string(),
        ));
    }
    let wanted = (minimum_prompts as usize).max(1);
    let mut copies = wanted / pool_size;
    if wanted % pool_size > 0 {
        copies += 1;
    }
    Ok(copies)
}

/// Largest number of prompts an issued quiz may hold
pub fn prompt_upper_bound(minimum_prompts: u32, maximum_prompts: u32, pool_size: usize) -> usize {
    let upper = pool_size.max(minimum_prompts as usize);
    if maximum_prompts > 0 {
        upper.min(maximum_prompts as usize)
    } else {
        upper
    }
}

/// Issues quizzes from prompt groups using an owned random source
pub struct QuizGenerator {
    rng: Mutex<StdRng>,
}

impl QuizGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator, for tests and reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Generate a fresh quiz from a prompt group
    pub fn generate(&self, group: &FlashCardGroup) -> Result<Quiz, QuizError> {
        let prompts = self.sample_prompts(group)?;
        let created_at = Utc::now();

        let mut quiz = Quiz::new(Uuid::new_v4(), group.name.clone(), created_at, prompts)?;
        quiz.due_at = group.max_duration().map(|allowed| created_at + allowed);

        debug!(
            quiz_id = %quiz.id,
            quiz_name = %quiz.name,
            prompt_count = quiz.prompts.len(),
            "Generated quiz"
        );
        Ok(quiz)
    }

    /// Repeat, shuffle and truncate the group's prompt pool
    pub fn sample_prompts(&self, group: &FlashCardGroup) -> Result<Vec<Prompt>, QuizError> {
        let pool_size = group.prompts.len();
        let copies = copies_count(group.minimum_prompts, pool_size)?;

        let mut working: Vec<Prompt> = group
            .prompts
            .iter()
            .flat_map(|(prompt, answer)| {
                std::iter::repeat(Prompt::new(prompt.clone(), answer.clone())).take(copies)
            })
            .collect();

        working.shuffle(&mut *self.rng.lock());

        working.truncate(prompt_upper_bound(
            group.minimum_prompts,
            group.maximum_prompts,
            pool_size,
        ));
        Ok(working)
    }
}

impl Default for QuizGenerator {
    fn default() -> Self {
        Self::new()
    }
}
