//! Core domain entities.
//!
//! - [`ShortLink`] - A stored short key to long URL mapping
//! - [`NewShortLink`] - Input for creating a mapping

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
