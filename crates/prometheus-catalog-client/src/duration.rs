//! Duration string parsing for configuration values.

use crate::error::{ClientError, Result};

/// Parse a human-readable duration string into whole seconds.
///
/// The accepted form is a non-negative integer magnitude followed by a unit
/// suffix: `s` (seconds), `m` (minutes), `h` (hours), `d` (days) or
/// `w` (weeks). Whitespace around and between the two parts is ignored and
/// units are case insensitive, so `"30s"`, `"90 M"` and `" 3w "` are all
/// accepted.
pub fn parse_seconds(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Config(
            "duration string must not be empty".to_string(),
        ));
    }

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| invalid(text))?;
    let (magnitude, unit) = trimmed.split_at(split);
    if magnitude.is_empty() {
        return Err(invalid(text));
    }

    let value: u64 = magnitude.parse().map_err(|_| invalid(text))?;
    let factor = match unit.trim().to_ascii_lowercase().as_str() {
        "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        "w" => 604_800,
        _ => return Err(invalid(text)),
    };

    value
        .checked_mul(factor)
        .ok_or_else(|| ClientError::Config(format!("duration '{}' overflows seconds", text.trim())))
}

fn invalid(text: &str) -> ClientError {
    ClientError::Config(format!(
        "invalid duration '{}': expected a magnitude and a unit (s, m, h, d, w)",
        text.trim()
    ))
}
