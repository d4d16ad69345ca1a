//! Artificial delay step.

use std::time::Duration;

use crate::error::AppError;

/// Delay used when the `milliseconds` input is empty.
pub const DEFAULT_MILLISECONDS: &str = "100";

/// Longest accepted delay: six hours, the job time limit on GitHub-hosted
/// runners.
pub const MAX_MILLISECONDS: u64 = 6 * 60 * 60 * 1000;

/// Parse the `milliseconds` input.
///
/// Accepts a leading integer and ignores whatever follows it, so `"250ms"`
/// is 250. Negative values clamp to zero; values above
/// [`MAX_MILLISECONDS`] are rejected.
pub fn parse_milliseconds(input: &str) -> Result<u64, AppError> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(AppError::invalid_input_field(
            "milliseconds is not a number",
            "milliseconds",
        ));
    }

    if negative {
        return Ok(0);
    }

    match rest[..digits_len].parse::<u64>() {
        Ok(milliseconds) if milliseconds <= MAX_MILLISECONDS => Ok(milliseconds),
        _ => Err(AppError::invalid_input_field(
            format!("milliseconds must be at most {}", MAX_MILLISECONDS),
            "milliseconds",
        )),
    }
}

/// Suspend the current task for `milliseconds`.
pub async fn wait(milliseconds: u64) {
    tokio::time::sleep(Duration::from_millis(milliseconds)).await;
}
