//! Identifier types
//!
//! Entity identifiers are opaque strings from the source tables. The newtype
//! keeps them from being mixed up with timestamps or titles, which are also
//! plain strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a tracked entity (one serialized work).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
