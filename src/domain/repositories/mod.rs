//! Repository trait definitions for the domain layer.
//!
//! The storage backend is abstracted behind [`LinkRepository`] and selected
//! once at startup (see [`crate::infrastructure::persistence::connect`]).
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::MemoryLinkRepository`]
//! - [`crate::infrastructure::persistence::FileLinkRepository`]
//! - [`crate::infrastructure::persistence::PgLinkRepository`]
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod link_repository;

pub use link_repository::{LinkRepository, StoreKind};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
