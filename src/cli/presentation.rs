//! CLI presentation: text and json formatters per command family.

mod quiz;
mod shared;

pub use quiz::{
    format_quiz_json, format_quiz_list_json, format_quiz_list_text, format_quiz_text,
    format_result_text,
};
pub use shared::format_validation_result;
