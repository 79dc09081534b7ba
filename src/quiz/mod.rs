//! Quiz domain: value types and generation from configured prompt groups.

pub mod generator;
pub mod model;

pub use generator::{copies_count, prompt_upper_bound, QuizGenerator};
pub use model::{
    percentage, CompletedPrompt, CompletedQuiz, GradedQuiz, Prompt, Quiz, QuizResult, Score,
};
