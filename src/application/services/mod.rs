//! Business logic services for the application layer.

pub mod link_service;
pub mod owner_service;

pub use link_service::LinkService;
pub use owner_service::OwnerService;
