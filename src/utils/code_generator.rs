//! Short id generation and validation utilities.
//!
//! Ids are 8 characters drawn from `[A-Za-z0-9]`.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Number of characters in a short id.
pub const CODE_LENGTH: usize = 8;

/// Alphabet short ids are drawn from.
const CHARSET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Compiled pattern every short id must match.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{8}$").expect("short id pattern is valid"));

/// Generates a random short id from the operating system's secure RNG.
///
/// # Distribution
///
/// Each random byte is mapped with `CHARSET[byte % 62]`. Since 256 is not a
/// multiple of 62, the first eight symbols (`A`-`H`) are drawn from five byte
/// values instead of four. The bias is accepted and not corrected.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system RNG fails.
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(code_from_bytes(&buffer))
}

/// Maps raw bytes onto the short id alphabet.
pub fn code_from_bytes(bytes: &[u8; CODE_LENGTH]) -> String {
    bytes
        .iter()
        .map(|b| CHARSET[usize::from(*b) % CHARSET.len()] as char)
        .collect()
}

/// Returns true if `code` has the shape of a short id.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Validates a caller-supplied short id.
///
/// # Errors
///
/// Returns [`AppError::InvalidRequest`] unless `code` is exactly 8 ASCII
/// letters or digits.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if !is_valid_code(code) {
        return Err(AppError::invalid_request(
            "Short id must be 8 letters or digits",
            json!({ "id": code }),
        ));
    }

    Ok(())
}
