//! Domain layer containing the shortener's data model and storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Short links, batch items and insert outcomes
//! - [`repositories`] - The storage backend trait implemented by infrastructure
//!
//! The domain layer depends on nothing outside [`crate::error`]. Concrete
//! backends live in [`crate::infrastructure::persistence`] and the core that
//! drives them in [`crate::application::services`].

pub mod entities;
pub mod repositories;
