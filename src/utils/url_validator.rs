//! Validation of URLs submitted for shortening.
//!
//! URLs are checked, not rewritten: the stored value is exactly what the
//! caller sent, so resolving a short id returns the original string.

use url::Url;

/// Longest accepted URL in bytes.
///
/// PostgreSQL indexes `(url, user_id)` with a btree, whose entries must fit
/// in about a third of a page. The same limit applies to every backend.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL is longer than {max} bytes ({len})")]
    TooLong { len: usize, max: usize },

    #[error("URL contains whitespace or control characters")]
    IllegalCharacters,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Checks that `input` is an absolute, well-formed URI.
///
/// # Rules
///
/// 1. Must not be empty or longer than [`MAX_URL_LENGTH`] bytes
/// 2. Must not contain whitespace or ASCII control characters anywhere
///    (the parser would silently strip or encode them)
/// 3. Must parse as an absolute URL with a scheme
///
/// Any scheme is accepted.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert!(validate_url("not-a-url").is_err());
/// assert!(validate_url("/relative/path").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong {
            len: input.len(),
            max: MAX_URL_LENGTH,
        });
    }

    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(UrlValidationError::IllegalCharacters);
    }

    Url::parse(input)?;

    Ok(())
}
