//! Audit records for applied updates

use serde::{Deserialize, Serialize};
use std::fmt;

/// A version line that was rewritten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    /// The document key that matched, which may be a glob such as `org.slf4j:*`
    pub dependency: String,
    /// Version before the update
    pub old_version: String,
    /// Version after the update
    pub new_version: String,
}

impl UpdateRecord {
    /// Creates a new record
    pub fn new(
        dependency: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Self {
        Self {
            dependency: dependency.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
        }
    }

    /// Returns true if the record describes an actual version change
    pub fn is_change(&self) -> bool {
        self.old_version != self.new_version
    }
}

impl fmt::Display for UpdateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.dependency, self.old_version, self.new_version
        )
    }
}
