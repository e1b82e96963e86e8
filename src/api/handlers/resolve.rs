//! Handler for short key resolution.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::application::services::link_service::SHORT_URL_NOT_FOUND;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `ANY /{short_key}`
///
/// # Request Flow
///
/// 1. Look up the key in the in-process cache
/// 2. On a miss, query the database
/// 3. Return **301 Moved Permanently** with the long URL in `Location`
///
/// Cache hits and database hits redirect the same way.
///
/// # Errors
///
/// - **404 Not Found** - unknown key, or a path segment that does not decode
///   to UTF-8; body `Short URL not found`
/// - **500 Internal Server Error** - the stored URL is not a valid header value
pub async fn resolve_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(short_key) = path.map_err(|rejection| {
        debug!("Undecodable short key path: {}", rejection);
        AppError::not_found(SHORT_URL_NOT_FOUND)
    })?;

    let long_url = state.link_service.resolve(&short_key).await?;

    let location = HeaderValue::try_from(long_url.as_str()).map_err(|e| {
        AppError::internal(format!("Stored URL is not a valid Location header: {}", e))
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
