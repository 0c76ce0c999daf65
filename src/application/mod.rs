//! Application layer services implementing the shortener's business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening, batch shortening and resolution
//! - [`services::owner_service::OwnerService`] - Signed owner identities

pub mod services;
