//! Property-based tests for grading arithmetic

use chrono::{Duration, Utc};
use flashcards::grading::GradingEngine;
use flashcards::quiz::{percentage, CompletedQuiz, Prompt, Quiz};
use proptest::prelude::*;
use uuid::Uuid;

proptest! {
    #[test]
    fn percentage_is_bounded(total in 0u32..10_000, correct in 0u32..10_000) {
        let correct = correct.min(total);
        let value = percentage(correct, total);
        prop_assert!(value <= 100);
        if total > 0 && correct == total {
            prop_assert_eq!(value, 100);
        }
        if correct == 0 {
            prop_assert_eq!(value, 0);
        }
    }

    /// Both grading paths agree when answers match case exactly
    #[test]
    fn grading_paths_agree_on_exact_answers(
        hits in proptest::collection::vec(any::<bool>(), 1..30),
        elapsed_secs in 0i64..7200,
    ) {
        let prompts: Vec<Prompt> = (0..hits.len())
            .map(|i| Prompt::new(format!("{}+{}", i, i), (2 * i).to_string()))
            .collect();
        let answers: Vec<String> = prompts
            .iter()
            .zip(&hits)
            .map(|(p, hit)| if *hit { p.answer.clone() } else { "x".to_string() })
            .collect();
        let created_at = Utc::now() - Duration::seconds(elapsed_secs);
        let quiz = Quiz::new(Uuid::new_v4(), "Sums", created_at, prompts).unwrap();
        let submission = CompletedQuiz::new("Sums", answers);
        let now = created_at + Duration::seconds(elapsed_secs);

        let grader = GradingEngine::new();
        let result = grader.grade_at(&quiz, &submission, now).unwrap();
        let record = grader.grade_detailed_at(&quiz, &submission, now).unwrap();

        let expected = hits.iter().filter(|h| **h).count() as u32;
        prop_assert_eq!(result.score.correct_answers, expected);
        prop_assert_eq!(&result.score, &record.score);
        prop_assert_eq!(
            result.score.time_minutes * 60 + result.score.time_seconds,
            elapsed_secs as u64
        );
        prop_assert!(result.score.time_seconds < 60);
    }
}
