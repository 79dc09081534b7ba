//! Flashcards: practice-math quiz issuance and grading
//!
//! Quizzes are sampled from configured prompt pools, held in a time-bounded cache
//! under a generated id, and graded against the issued instance when the taker
//! returns their answers.

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod grading;
pub mod logging;
pub mod quiz;
pub mod results;
pub mod service;

pub use error::{QuizError, StorageError};
pub use service::QuizService;
