//! Data Transfer Objects for API requests and responses.

pub mod batch;
pub mod health;
pub mod shorten;
