//! Request parameter lookup across the query string and form bodies.
//!
//! Values are collected in a fixed order and the first match wins:
//!
//! - `application/x-www-form-urlencoded` body (POST, PUT, PATCH only), then query
//! - query, then `multipart/form-data` text parts
//! - query only, for any other request
//!
//! Malformed input is skipped rather than rejected, so a bad body simply
//! contributes no values.

use axum::extract::{Form, FromRequest, Multipart, Query, Request};
use axum::http::{Method, header};
use tracing::debug;

/// Ordered name/value pairs; duplicates are kept.
pub type FormValues = Vec<(String, String)>;

enum BodyKind {
    UrlEncoded,
    Multipart,
    Other,
}

/// Collects parameters from the query string and the request body.
pub async fn read_form_values(request: Request) -> FormValues {
    let query = match Query::<FormValues>::try_from_uri(request.uri()) {
        Ok(Query(values)) => values,
        Err(e) => {
            debug!("Ignoring unparsable query string: {}", e);
            Vec::new()
        }
    };

    match body_kind(&request) {
        BodyKind::UrlEncoded => {
            let mut values = match Form::<FormValues>::from_request(request, &()).await {
                Ok(Form(values)) => values,
                Err(e) => {
                    debug!("Ignoring unparsable form body: {}", e);
                    Vec::new()
                }
            };
            values.extend(query);
            values
        }
        BodyKind::Multipart => {
            let mut values = query;
            values.extend(read_multipart_values(request).await);
            values
        }
        BodyKind::Other => query,
    }
}

/// Returns the first value for `key`, which may be empty.
pub fn first_value<'a>(values: &'a FormValues, key: &str) -> Option<&'a str> {
    values
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

fn body_kind(request: &Request) -> BodyKind {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let method = request.method();
    let has_form_body = method == Method::POST || method == Method::PUT || method == Method::PATCH;

    if content_type.starts_with("multipart/form-data") {
        BodyKind::Multipart
    } else if has_form_body && content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::UrlEncoded
    } else {
        BodyKind::Other
    }
}

/// Reads the text parts of a multipart body. File parts are skipped.
async fn read_multipart_values(request: Request) -> FormValues {
    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(e) => {
            debug!("Ignoring unparsable multipart body: {}", e);
            return Vec::new();
        }
    };

    let mut values = Vec::new();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.file_name().is_some() {
                    continue;
                }
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                match field.text().await {
                    Ok(text) => values.push((name, text)),
                    Err(e) => {
                        debug!("Stopping at unreadable multipart field: {}", e);
                        break;
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Stopping at malformed multipart body: {}", e);
                break;
            }
        }
    }

    values
}
