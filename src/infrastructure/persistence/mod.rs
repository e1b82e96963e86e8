//! PostgreSQL repository implementations.
//!
//! - [`PgLinkRepository`] - Short link storage and lookup

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
