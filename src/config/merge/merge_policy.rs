//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("catalog.path", "config/quizzes.toml")?
        .set_default("cache.max_entries", 100_i64)?
        .set_default("cache.ttl_secs", 3 * 60 * 60_i64)?
        .set_default("cache.consume_on_grade", false)?
        .set_default("results.enabled", true)
}
