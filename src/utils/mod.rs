//! Utility functions for short id handling, URL validation and database errors.
//!
//! - [`code_generator`] - Short id generation and validation
//! - [`url_validator`] - Absolute URL checks for submitted URLs
//! - [`db_error`] - PostgreSQL unique-violation classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
