//! Quiz presentation: quiz lists, issued quizzes and graded results.

use crate::error::QuizError;
use crate::quiz::{Quiz, QuizResult};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, QuizError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| QuizError::InvalidState(format!("Failed to format JSON output: {}", e)))
}

pub fn format_quiz_list_text(quizzes: &BTreeMap<String, Vec<String>>) -> String {
    if quizzes.is_empty() {
        return "No quizzes configured.".to_string();
    }
    let mut lines = Vec::new();
    for (category, names) in quizzes {
        lines.push(format!("{}:", category.bold()));
        for name in names {
            lines.push(format!("  - {}", name));
        }
    }
    lines.join("\n")
}

pub fn format_quiz_list_json(quizzes: &BTreeMap<String, Vec<String>>) -> Result<String, QuizError> {
    to_json(quizzes)
}

pub fn format_quiz_text(quiz: &Quiz) -> String {
    let mut s = format!(
        "{} ({})\n  Id: {}",
        quiz.name.bold(),
        quiz.present_prompts().count(),
        quiz.id
    );
    if let Some(due_at) = quiz.due_at {
        s.push_str(&format!("\n  Due: {}", due_at.to_rfc3339()));
    }
    for (i, prompt) in quiz.present_prompts().enumerate() {
        s.push_str(&format!("\n  {:>3}. {}", i + 1, prompt.prompt));
    }
    s
}

pub fn format_quiz_json(quiz: &Quiz) -> Result<String, QuizError> {
    let prompts: Vec<Option<&str>> = quiz
        .prompts
        .iter()
        .map(|p| p.as_ref().map(|p| p.prompt.as_str()))
        .collect();
    let out = serde_json::json!({
        "id": quiz.id,
        "name": quiz.name,
        "due_at": quiz.due_at,
        "prompts": prompts,
    });
    to_json(&out)
}

/// Score summary plus a per-prompt table when outcomes are attached
pub fn format_result_text(result: &QuizResult) -> String {
    let score = &result.score;
    let percentage = format!("{}%", score.percentage);
    let percentage = if score.percentage >= 80 {
        percentage.green().to_string()
    } else if score.percentage >= 50 {
        percentage.yellow().to_string()
    } else {
        percentage.red().to_string()
    };

    let mut s = format!(
        "{}: {} of {} correct ({})\nTime: {}m {}s",
        result.name.bold(),
        score.correct_answers,
        score.prompt_count,
        percentage,
        score.time_minutes,
        score.time_seconds
    );

    if let Some(outcomes) = &result.completed_prompts {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["#", "Prompt", "Expected", "Answer", ""]);
        for (i, outcome) in outcomes.iter().enumerate() {
            let mark = if outcome.correct_answer {
                "✓".green().to_string()
            } else {
                "✗".red().to_string()
            };
            table.add_row(vec![
                (i + 1).to_string(),
                outcome.prompt.clone(),
                outcome.expected_answer.clone(),
                outcome.answer_provided.clone(),
                mark,
            ]);
        }
        s.push('\n');
        s.push_str(&table.to_string());
    }
    s
}
