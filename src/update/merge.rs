//! Merging recommendations from several reports
//!
//! Each project produces its own report, so the same identifier can be
//! recommended more than once. Agreeing recommendations collapse into one;
//! disagreeing ones drop the identifier for the whole merge.

use crate::domain::{Recommendation, UpdateReport, Warning};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Conflict-free recommendations in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedUpdates {
    /// Accepted recommendations
    entries: Vec<Recommendation>,
    /// Conflicts found while merging
    warnings: Vec<Warning>,
}

impl MergedUpdates {
    /// Returns the accepted recommendations in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.entries.iter()
    }

    /// Returns the version accepted for `identifier`
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|rec| rec.identifier == identifier)
            .map(|rec| rec.version.as_str())
    }

    /// Returns true if `identifier` has an accepted version
    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    /// Returns the number of accepted recommendations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was accepted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the conflicts found while merging
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Drops accepted recommendations that fail `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&Recommendation) -> bool) {
        self.entries.retain(|rec| keep(rec));
    }
}

/// Accumulates recommendations, dropping identifiers with conflicting versions
#[derive(Debug, Default)]
pub struct Merger {
    entries: Vec<Recommendation>,
    /// identifier -> index into `entries`
    index: HashMap<String, usize>,
    /// Identifiers dropped for the rest of this merge
    conflicted: HashSet<String>,
    warnings: Vec<Warning>,
}

impl Merger {
    /// Create an empty merger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one recommendation
    pub fn add(&mut self, rec: Recommendation) {
        if self.conflicted.contains(&rec.identifier) {
            debug!(
                "Ignoring '{}' = {}: already dropped as conflicting",
                rec.identifier, rec.version
            );
            return;
        }

        let Some(&idx) = self.index.get(&rec.identifier) else {
            self.index.insert(rec.identifier.clone(), self.entries.len());
            self.entries.push(rec);
            return;
        };

        let existing = &self.entries[idx];
        if existing.version == rec.version {
            return;
        }

        warn!(
            "Found conflicting version recommendation for '{}'",
            rec.identifier
        );
        let warning = Warning::conflicting(&rec.identifier, &existing.version, &rec.version);

        self.entries.remove(idx);
        self.index.remove(&rec.identifier);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        self.conflicted.insert(rec.identifier);
        self.warnings.push(warning);
    }

    /// Finish the merge
    pub fn finish(self) -> MergedUpdates {
        MergedUpdates {
            entries: self.entries,
            warnings: self.warnings,
        }
    }
}

/// Merge `(identifier, version)` recommendations in encounter order
pub fn merge<I>(recommendations: I) -> MergedUpdates
where
    I: IntoIterator<Item = Recommendation>,
{
    let mut merger = Merger::new();
    for rec in recommendations {
        merger.add(rec);
    }
    merger.finish()
}

/// Merge the dependency recommendations of all reports, keyed by `group:name`
pub fn merge_recommendations(reports: &[UpdateReport]) -> MergedUpdates {
    merge(
        reports
            .iter()
            .flat_map(|report| report.dependency_updates.iter())
            .map(|rec| rec.to_recommendation()),
    )
}

/// Merge the plugin recommendations of all reports, keyed by plugin id
///
/// Only plugin marker coordinates (`<id>:<id>.gradle.plugin`) are considered.
pub fn merge_plugin_recommendations(reports: &[UpdateReport]) -> MergedUpdates {
    merge(
        reports
            .iter()
            .flat_map(|report| report.plugin_updates.iter())
            .filter(|rec| rec.is_plugin_marker())
            .map(|rec| rec.to_plugin_recommendation()),
    )
}
