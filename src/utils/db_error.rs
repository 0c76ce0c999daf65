//! Classification of PostgreSQL constraint violations.

/// Unique constraint on `(url, user_id)`.
pub const URL_OWNER_CONSTRAINT: &str = "shorteners_url_user_id_key";

/// Primary key on `id`.
pub const PRIMARY_KEY_CONSTRAINT: &str = "shorteners_pkey";

/// Which uniqueness rule an insert broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueViolation {
    /// The owner already stored this URL.
    UrlOwner,
    /// The short id is already in use.
    PrimaryKey,
    Other,
}

/// Returns the violated uniqueness rule, or `None` for any other error.
pub fn unique_violation(e: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(match db_err.constraint() {
        Some(URL_OWNER_CONSTRAINT) => UniqueViolation::UrlOwner,
        Some(PRIMARY_KEY_CONSTRAINT) => UniqueViolation::PrimaryKey,
        _ => UniqueViolation::Other,
    })
}
