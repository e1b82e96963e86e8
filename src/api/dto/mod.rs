//! Data Transfer Objects for requests and responses.

pub mod shorten;
