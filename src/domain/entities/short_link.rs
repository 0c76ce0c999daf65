//! Short link entity representing a stored URL mapping.

/// A stored mapping between a short id and the original URL.
///
/// `owner_id` is the optional tenant key. `None` is the shared,
/// single-tenant namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: String,
    pub original_url: String,
    pub owner_id: Option<String>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: String, original_url: String, owner_id: Option<String>) -> Self {
        Self {
            id,
            original_url,
            owner_id,
        }
    }

    /// Returns true if this link belongs to the given owner scope.
    ///
    /// A `None` scope matches every link.
    pub fn is_visible_to(&self, owner_id: Option<&str>) -> bool {
        match owner_id {
            Some(owner) => self.owner_id.as_deref() == Some(owner),
            None => true,
        }
    }

    /// Returns true if this link stores `url` for exactly `owner_id`.
    pub fn is_same_target(&self, url: &str, owner_id: Option<&str>) -> bool {
        self.original_url == url && self.owner_id.as_deref() == owner_id
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub id: String,
    pub original_url: String,
    pub owner_id: Option<String>,
}

impl NewShortLink {
    pub fn new(id: String, original_url: String, owner_id: Option<String>) -> Self {
        Self {
            id,
            original_url,
            owner_id,
        }
    }

    pub fn into_link(self) -> ShortLink {
        ShortLink::new(self.id, self.original_url, self.owner_id)
    }
}

/// One entry of a batch shorten request.
///
/// `correlation_id` is opaque to the service and echoed back in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub correlation_id: String,
    pub original_url: String,
}

impl BatchItem {
    pub fn new(correlation_id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            original_url: original_url.into(),
        }
    }
}
