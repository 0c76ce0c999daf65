//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - Storage backends implementing
//!   [`crate::domain::repositories::LinkRepository`]

pub mod persistence;
