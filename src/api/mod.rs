//! HTTP transport for the shortener.
//!
//! This layer translates HTTP requests into [`crate::application::services::LinkService`]
//! calls and maps outcomes to status codes.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Owner identity and JSON body extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
