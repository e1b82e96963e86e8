//! ShortLink entity representing a short key to long URL mapping.

/// A stored mapping from a generated short key to its destination.
///
/// Records are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub short_key: String,
    pub long_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(short_key: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_key: short_key.into(),
            long_url: long_url.into(),
        }
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub short_key: String,
    pub long_url: String,
}

impl From<NewShortLink> for ShortLink {
    fn from(new_link: NewShortLink) -> Self {
        Self {
            short_key: new_link.short_key,
            long_url: new_link.long_url,
        }
    }
}
