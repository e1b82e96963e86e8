//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortLink;

/// Response body for a created short link.
///
/// ```json
/// { "short_url": "aZ3_kQ9xYb", "long_url": "https://example.com" }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: String,
    pub long_url: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_url: link.short_key,
            long_url: link.long_url,
        }
    }
}
