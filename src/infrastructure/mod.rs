//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! - [`cache`] - In-process cache and its no-op counterpart
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
