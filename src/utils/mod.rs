//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short key generation
//! - [`form_values`] - Ordered query/form parameter lookup

pub mod code_generator;
pub mod form_values;
