//! Application layer services implementing business logic.
//!
//! Services consume repository and cache traits and provide a small API for
//! HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
