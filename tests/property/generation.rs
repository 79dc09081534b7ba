//! Property-based tests for quiz generation bounds

use flashcards::config::FlashCardGroup;
use flashcards::quiz::{copies_count, prompt_upper_bound, QuizGenerator};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

fn group(pool: usize, min: u32, max: u32) -> FlashCardGroup {
    let prompts: BTreeMap<String, String> = (0..pool)
        .map(|i| (format!("{}x2", i), (i * 2).to_string()))
        .collect();
    FlashCardGroup::new("Doubles", prompts, min, max)
}

/// Issued quizzes always hold exactly the allowed number of prompts
#[test]
fn test_quiz_size_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(1usize..20, 0u32..60, 0u32..60, any::<u64>()),
            |(pool, min, max, seed)| {
                let generator = QuizGenerator::with_seed(seed);
                let quiz = generator.generate(&group(pool, min, max)).unwrap();

                let expected = prompt_upper_bound(min, max, pool);
                prop_assert_eq!(quiz.prompts.len(), expected);
                if max > 0 {
                    prop_assert!(quiz.prompts.len() <= max as usize);
                }
                if max == 0 || max >= min {
                    prop_assert!(quiz.prompts.len() >= (min as usize).min(expected));
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Every issued prompt comes from the pool, repeated no more than the copy count
#[test]
fn test_prompt_membership_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(1usize..12, 0u32..40, any::<u64>()),
            |(pool, min, seed)| {
                let source = group(pool, min, 0);
                let quiz = QuizGenerator::with_seed(seed).generate(&source).unwrap();
                let copies = copies_count(min, pool).unwrap();

                let mut seen: HashMap<&str, usize> = HashMap::new();
                for prompt in quiz.present_prompts() {
                    prop_assert_eq!(
                        source.prompts.get(&prompt.prompt),
                        Some(&prompt.answer)
                    );
                    *seen.entry(prompt.prompt.as_str()).or_default() += 1;
                }
                prop_assert!(seen.values().all(|count| *count <= copies));
                Ok(())
            },
        )
        .unwrap();
}

proptest! {
    /// The repeated pool always covers the requested minimum
    #[test]
    fn copies_cover_minimum(pool in 1usize..100, min in 0u32..1000) {
        let copies = copies_count(min, pool).unwrap();
        prop_assert!(copies >= 1);
        prop_assert!(copies * pool >= min as usize);
        prop_assert!((copies - 1) * pool < (min as usize).max(1));
    }

    /// The same seed yields the same prompt order
    #[test]
    fn seeded_generation_is_repeatable(pool in 1usize..15, min in 0u32..30, seed in any::<u64>()) {
        let source = group(pool, min, 0);
        let first = QuizGenerator::with_seed(seed).sample_prompts(&source).unwrap();
        let second = QuizGenerator::with_seed(seed).sample_prompts(&source).unwrap();
        prop_assert_eq!(first, second);
    }
}
