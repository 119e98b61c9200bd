//! Non-fatal conditions reported while merging and applying updates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that was skipped rather than applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// No key in the versions file matches the identifier
    NoMatchingPattern {
        /// The recommended identifier
        identifier: String,
    },
    /// Two reports proposed different versions for the same identifier
    ConflictingRecommendation {
        /// The conflicting identifier
        identifier: String,
        /// Version that was accepted before the conflict
        first: String,
        /// Version that disagreed with it
        second: String,
    },
}

impl Warning {
    /// Creates a NoMatchingPattern warning
    pub fn no_matching_pattern(identifier: impl Into<String>) -> Self {
        Warning::NoMatchingPattern {
            identifier: identifier.into(),
        }
    }

    /// Creates a ConflictingRecommendation warning
    pub fn conflicting(
        identifier: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Warning::ConflictingRecommendation {
            identifier: identifier.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Returns the identifier this warning is about
    pub fn identifier(&self) -> &str {
        match self {
            Warning::NoMatchingPattern { identifier } => identifier,
            Warning::ConflictingRecommendation { identifier, .. } => identifier,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NoMatchingPattern { identifier } => {
                write!(f, "no matching pattern for '{}'", identifier)
            }
            Warning::ConflictingRecommendation {
                identifier,
                first,
                second,
            } => write!(
                f,
                "conflicting version recommendation for '{}' ({} vs {})",
                identifier, first, second
            ),
        }
    }
}
