//! Integration tests for CLI command routing

use super::test_utils::{workspace, EnvGuard};
use flashcards::cli::{collect_answers, exit_code, map_error, Commands, RunContext};

fn context(temp: &tempfile::TempDir) -> RunContext {
    let _env = EnvGuard::isolated(&temp.path().join("xdg"));
    RunContext::new(temp.path().to_path_buf(), None, Some(1)).unwrap()
}

#[test]
fn test_list_text_shows_categories() {
    let temp = workspace();
    let ctx = context(&temp);

    let output = ctx
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("Times Tables"));
    assert!(output.contains("  - Twos"));
    assert!(output.contains("  - Capitals"));
}

#[test]
fn test_show_json_hides_answers() {
    let temp = workspace();
    let ctx = context(&temp);

    let output = ctx
        .execute(&Commands::Show {
            name: "capitals".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["name"], "Capitals");
    assert_eq!(json["prompts"][0], "Capital of France");
    assert!(!output.contains("Paris"));
}

#[test]
fn test_show_unknown_quiz_maps_to_exit_code() {
    let temp = workspace();
    let ctx = context(&temp);

    let err = ctx
        .execute(&Commands::Show {
            name: "Fractions".to_string(),
            format: "text".to_string(),
        })
        .unwrap_err();
    assert_eq!(map_error(&err), "No match found for quiz: 'Fractions'");
    assert_eq!(exit_code(&err), 2);
}

#[test]
fn test_answers_collected_then_graded() {
    let temp = workspace();
    let ctx = context(&temp);

    let quiz = ctx.service().issue_quiz("Twos").unwrap();
    let submission = collect_answers(&quiz, |_, prompt| {
        let n: u32 = prompt.trim_start_matches("2x").parse().unwrap();
        Ok((2 * n).to_string())
    })
    .unwrap();
    let result = ctx.service().grade_quiz(quiz.id, &submission).unwrap();
    assert_eq!(result.score.percentage, 100);
    assert_eq!(result.completed_prompts.unwrap().len(), 5);
}

#[test]
fn test_validate_command() {
    let temp = workspace();
    let ctx = context(&temp);

    let report = ctx.execute(&Commands::Validate).unwrap();
    assert_eq!(report, "Configuration valid: 3 quiz(zes) configured");
}
