use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_MINIMUM_ALIVE_SECS: i64 = 300;
pub const MIN_ALIVE_SECS: i64 = 1;
pub const MAX_ALIVE_SECS: i64 = 3300;

pub const CLIENT_ID_REQUIRED: &str = "client_id is required";
pub const CLIENT_ID_PATTERN: &str = "client_id must be between length 3-32 with pattern [a-zA-Z0-9]{3,32}";
pub const ALIVE_SECS_NOT_INTEGER: &str = "Minimum alive interval must be an integer";
pub const ALIVE_SECS_OUT_OF_RANGE: &str = "Minimum alive interval must be an integer between 1 and 3300";

static CLIENT_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]{3,32}$").expect("static client_id pattern"));

/// Checks caller input; an empty result means valid. All rules are evaluated,
/// so one call may report several messages.
pub fn validate(client_id: Option<&str>, minimum_alive_secs: Option<f64>) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    match client_id {
        None => errors.push(CLIENT_ID_REQUIRED.to_string()),
        Some(id) if id.trim().is_empty() => errors.push(CLIENT_ID_REQUIRED.to_string()),
        Some(id) if !CLIENT_ID_RE.is_match(id) => errors.push(CLIENT_ID_PATTERN.to_string()),
        Some(_) => {}
    }

    if let Some(secs) = minimum_alive_secs {
        match as_integer(secs) {
            None => errors.push(ALIVE_SECS_NOT_INTEGER.to_string()),
            Some(secs) if secs < MIN_ALIVE_SECS || secs > MAX_ALIVE_SECS => {
                errors.push(ALIVE_SECS_OUT_OF_RANGE.to_string())
            }
            Some(_) => {}
        }
    }

    errors
}

/// Integral, finite values only.
pub fn as_integer(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
