//! Issued quiz cache
//!
//! Bounded map from quiz id to the issued quiz. Entries expire a fixed time after
//! they are written; reads do not extend their lifetime.

use crate::quiz::Quiz;
use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Cache sizing and expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Live issued quizzes kept at most
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,

    /// Seconds an issued quiz stays gradable
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Drop an issued quiz once it has been graded
    #[serde(default)]
    pub consume_on_grade: bool,
}

fn default_max_entries() -> u64 {
    100
}

fn default_ttl_secs() -> u64 {
    3 * 60 * 60
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
            consume_on_grade: false,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_entries == 0 {
            return Err("max_entries must be greater than 0".to_string());
        }
        if self.ttl_secs == 0 {
            return Err("ttl_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Thread-safe store of issued quizzes
pub struct QuizCache {
    quizzes: Cache<Uuid, Arc<Quiz>>,
}

impl QuizCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        Self {
            quizzes: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, config.ttl())
    }

    /// Store an issued quiz, replacing any entry with the same id
    pub fn put(&self, id: Uuid, quiz: Arc<Quiz>) {
        debug!(quiz_id = %id, "Caching issued quiz");
        self.quizzes.insert(id, quiz);
    }

    /// Look up an issued quiz; expired or evicted entries are absent
    pub fn get_if_present(&self, id: &Uuid) -> Option<Arc<Quiz>> {
        self.quizzes.get(id)
    }

    pub fn invalidate(&self, id: &Uuid) {
        self.quizzes.invalidate(id);
    }

    /// Approximate live entry count after pending maintenance
    pub fn entry_count(&self) -> u64 {
        self.quizzes.run_pending_tasks();
        self.quizzes.entry_count()
    }
}

impl Default for QuizCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}
