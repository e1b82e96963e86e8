//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State shared by all request handlers.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates application state around a link service.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
