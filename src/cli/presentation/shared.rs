//! Shared presentation: configuration validation report.

use crate::config::ValidationError;

pub fn format_validation_result(errors: &[ValidationError], quiz_count: usize) -> String {
    if errors.is_empty() {
        return format!("Configuration valid: {} quiz(zes) configured", quiz_count);
    }
    let mut s = format!("Configuration invalid ({} error(s)):", errors.len());
    for e in errors {
        s.push_str(&format!("\n  - {}", e));
    }
    s
}
