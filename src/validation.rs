//! Round log name validation.
//!
//! Both `--start` and `--total` take a file name that must look like `<anything>.json`.
//! The check mirrors the pattern `^.*\.json$`: `.` never matches a line terminator,
//! so a value spanning several lines is rejected even if it ends with `.json`.

use crate::errors::GuessError;

/// Message shown for every malformed command line.
pub const INVALID_COMMAND: &str = "Некорректная команда";

const JSON_SUFFIX: &str = ".json";

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns true if `name` is an acceptable round log name.
pub fn is_json_log_name(name: &str) -> bool {
    name.ends_with(JSON_SUFFIX) && !name.chars().any(is_line_terminator)
}

/// Validate a round log name, returning it unchanged on success.
pub fn validate_log_name(name: &str) -> Result<&str, GuessError> {
    if is_json_log_name(name) {
        Ok(name)
    } else {
        Err(GuessError::Usage(INVALID_COMMAND.to_string()))
    }
}
