//! Shared test utilities for integration tests
//!
//! Workspaces are written to temp directories. Tests that read or change process
//! environment variables hold a global lock so parallel tests do not observe each
//! other's overrides.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

pub const QUIZZES: &str = r#"
[[Addition]]
name = "Doubles"
minimum_prompts = 4
maximum_prompts = 6
max_duration_secs = 120

[Addition.prompts]
"1+1" = "2"
"2+2" = "4"
"3+3" = "6"

[["Times Tables"]]
name = "Twos"

["Times Tables".prompts]
"2x1" = "2"
"2x2" = "4"
"2x3" = "6"
"2x4" = "8"
"2x5" = "10"

[[Words]]
name = "Capitals"

[Words.prompts]
"Capital of France" = "Paris"
"#;

/// Guard that holds the environment lock and restores overridden variables on drop
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Lock the environment and point the user-level config at `config_home`
    pub fn isolated(config_home: &Path) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut guard = Self {
            saved: Vec::new(),
            _lock: lock,
        };
        guard.set("XDG_CONFIG_HOME", &config_home.to_string_lossy());
        guard
    }

    pub fn set(&mut self, key: &str, value: &str) {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.to_string(), std::env::var(key).ok()));
        }
        std::env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Temp workspace with `config/quizzes.toml` and a `config/config.toml` that keeps
/// results inside the workspace
pub fn workspace_with(quizzes: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("quizzes.toml"), quizzes).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[results]\ndir = \"results\"\n",
    )
    .unwrap();
    temp
}

pub fn workspace() -> TempDir {
    workspace_with(QUIZZES)
}
