//! Flattened version recommendations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposal to pin `identifier` to `version`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recommendation {
    /// `group:artifact` (or plugin id) being recommended
    pub identifier: String,
    /// Recommended version
    pub version: String,
}

impl Recommendation {
    /// Creates a new recommendation
    pub fn new(identifier: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.identifier, self.version)
    }
}
