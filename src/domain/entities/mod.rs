//! Core domain entities.
//!
//! - [`ShortLink`] - A stored mapping from short id to original URL
//! - [`NewShortLink`] - Input for creating a mapping
//! - [`BatchItem`] - One entry of a batch shorten request
//! - [`InsertOutcome`] - What a backend did with an insert
//! - [`ShortenOutcome`] / [`BatchOutcome`] - What the core reports to callers

pub mod outcome;
pub mod short_link;

pub use outcome::{BatchOutcome, BatchShortened, InsertOutcome, ShortenOutcome};
pub use short_link::{BatchItem, NewShortLink, ShortLink};
