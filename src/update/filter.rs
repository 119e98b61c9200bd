//! Identifier filters for recommendations
//!
//! `--only` and `--exclude` narrow which merged recommendations are applied.

use super::MergedUpdates;

/// Filter configuration for recommendations
#[derive(Debug, Clone, Default)]
pub struct UpdateFilter {
    /// Identifiers to exclude from updates
    pub exclude: Vec<String>,
    /// If non-empty, only apply these identifiers
    pub only: Vec<String>,
}

impl UpdateFilter {
    /// Create a new UpdateFilter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    /// Set identifiers to exclude
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Set identifiers to include (only list)
    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    /// Returns true if no filter is configured
    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.only.is_empty()
    }

    /// Check if an identifier should be processed
    pub fn should_process(&self, identifier: &str) -> bool {
        // --only wins over --exclude
        if !self.only.is_empty() {
            return self.only.iter().any(|p| p == identifier);
        }
        !self.exclude.iter().any(|p| p == identifier)
    }

    /// Drop filtered recommendations from a merge result
    pub fn apply(&self, merged: &mut MergedUpdates) {
        if self.is_empty() {
            return;
        }
        merged.retain(|rec| self.should_process(&rec.identifier));
    }
}
