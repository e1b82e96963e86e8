//! Handler for the liveness endpoint.

/// Fixed body returned by the liveness endpoint.
pub const HELLO_BODY: &str = "Hello";

/// Answers any request with a plain-text greeting.
///
/// # Endpoint
///
/// `ANY /hello`
///
/// Always responds **200 OK** with body `Hello`. Touches no state, so it
/// reports process liveness only.
pub async fn hello_handler() -> &'static str {
    HELLO_BODY
}
