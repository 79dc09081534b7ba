//! Integration tests for Configuration System

use super::test_utils::{workspace, workspace_with, EnvGuard};
use flashcards::config::{ConfigLoader, ValidationError};
use std::fs;

#[test]
fn test_workspace_config_layers() {
    let temp = workspace();
    let _env = EnvGuard::isolated(&temp.path().join("xdg"));

    let config = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(config.cache.max_entries, 100);
    assert_eq!(config.cache.ttl_secs, 3 * 60 * 60);
    assert!(!config.cache.consume_on_grade);
    assert!(config.results.enabled);
    assert_eq!(
        config.results.resolve_dir(temp.path()).unwrap(),
        temp.path().join("results")
    );

    let groups = config.quiz_groups.as_ref().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups["Times Tables"][0].prompts.len(), 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_environment_overrides_files() {
    let temp = workspace();
    let mut env = EnvGuard::isolated(&temp.path().join("xdg"));
    env.set("FLASHCARDS__CACHE__TTL_SECS", "60");
    env.set("FLASHCARDS__CACHE__CONSUME_ON_GRADE", "true");

    let config = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(config.cache.ttl_secs, 60);
    assert!(config.cache.consume_on_grade);
}

#[test]
fn test_environment_specific_file() {
    let temp = workspace();
    fs::write(
        temp.path().join("config").join("classroom.toml"),
        "[cache]\nmax_entries = 25\n",
    )
    .unwrap();
    let mut env = EnvGuard::isolated(&temp.path().join("xdg"));
    env.set("FLASHCARDS_ENV", "classroom");

    let config = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(config.cache.max_entries, 25);
}

#[test]
fn test_global_config_file() {
    let temp = workspace();
    let xdg = temp.path().join("xdg");
    fs::create_dir_all(xdg.join("flashcards")).unwrap();
    fs::write(
        xdg.join("flashcards").join("config.toml"),
        "[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();
    let _env = EnvGuard::isolated(&xdg);

    assert_eq!(
        ConfigLoader::global_config_path().unwrap(),
        xdg.join("flashcards").join("config.toml")
    );
    let config = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_from_file_resolves_catalog_next_to_file() {
    let temp = workspace();
    let _env = EnvGuard::isolated(&temp.path().join("xdg"));
    let config_file = temp.path().join("custom.toml");
    fs::write(&config_file, "[catalog]\npath = \"config/quizzes.toml\"\n").unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.quiz_groups.unwrap().len(), 3);

    let missing = ConfigLoader::load_from_file(&temp.path().join("nope.toml"));
    assert!(missing.is_err());
}

#[test]
fn test_validation_collects_every_violation() {
    let temp = workspace_with(
        r#"
[["Bad-Category"]]
name = "Fine"

["Bad-Category".prompts]
"1+1" = "2"

[[Good]]
name = " "
minimum_prompts = 5
maximum_prompts = 2
max_duration_secs = 5

[Good.prompts]
"1+1" = " "
"#,
    );
    let _env = EnvGuard::isolated(&temp.path().join("xdg"));

    let config = ConfigLoader::load(temp.path()).unwrap();
    let errors = config.validate().unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e, ValidationError::Category(name, _) if name == "Bad-Category")));
    let group_errors = errors
        .iter()
        .filter(|e| matches!(e, ValidationError::Group { category, .. } if category == "Good"))
        .count();
    assert_eq!(group_errors, 4);

    assert!(ConfigLoader::load_validated(temp.path()).is_err());
}

#[test]
fn test_malformed_definitions_fail_to_load() {
    let temp = workspace_with("[[Addition]]\nname = 3\n");
    let _env = EnvGuard::isolated(&temp.path().join("xdg"));

    let err = ConfigLoader::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse quiz definitions"));
}
