//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
};

use crate::api::dto::shorten::ShortenResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::form_values::{first_value, read_form_values};

/// Creates a short link for the `long_url` parameter.
///
/// # Endpoint
///
/// `ANY /shorten`
///
/// # Parameters
///
/// `long_url` may come from the query string, a URL-encoded form body or a
/// `multipart/form-data` text part. The first value found wins, even when it
/// is empty:
///
/// - URL-encoded body (POST, PUT, PATCH) is read before the query string
/// - the query string is read before multipart parts
///
/// ```text
/// POST /shorten            (body: long_url=https%3A%2F%2Fexample.com)
/// POST /shorten?long_url=https://example.com
/// ```
///
/// # Response
///
/// **201 Created** with `Content-Type: application/json`:
///
/// ```json
/// { "short_url": "aZ3_kQ9xYb", "long_url": "https://example.com" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request** - `long_url` missing or empty
/// - **500 Internal Server Error** - the store write failed; the body is the
///   store's error text
pub async fn shorten_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let values = read_form_values(request).await;
    let long_url = first_value(&values, "long_url")
        .unwrap_or_default()
        .to_string();

    let link = state.link_service.create_short_link(long_url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
