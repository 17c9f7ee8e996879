//! Resource kind value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type tag of a pooled resource, e.g. `"book"`, `"car"`, `"truck"`.
///
/// Kinds are an open set decided by configuration rather than a closed
/// enum, so one engine serves both the library and the parking-lot
/// deployments. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKind(pub String);

impl ResourceKind {
    /// Create a kind from any string-like value.
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// The kind as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceKind {
    fn from(kind: &str) -> Self {
        Self(kind.to_string())
    }
}

impl From<String> for ResourceKind {
    fn from(kind: String) -> Self {
        Self(kind)
    }
}
