//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! is modeled separately from the persisted record:
//!
//! - [`ShortLink`] - A persisted code to URL mapping
//! - [`NewShortLink`] - Validated input for the store's insert

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
