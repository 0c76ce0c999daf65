//! Request extractors.

pub mod json;
pub mod owner;

pub use json::ApiJson;
pub use owner::Owner;
