//! Applying merged recommendations to a versions file

use super::MergedUpdates;
use crate::domain::{UpdateRecord, Warning};
use crate::props::{UpdateOutcome, VersionsProps};

/// What happened when applying a batch of recommendations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Rewritten lines, in recommendation order
    pub records: Vec<UpdateRecord>,
    /// Recommendations that matched no key
    pub warnings: Vec<Warning>,
    /// Recommendations whose matched line was already current
    pub unchanged: usize,
}

impl ApplyOutcome {
    /// Returns records that changed a version
    pub fn changes(&self) -> impl Iterator<Item = &UpdateRecord> {
        self.records.iter().filter(|record| record.is_change())
    }

    /// Returns true if the document was modified
    pub fn has_changes(&self) -> bool {
        self.changes().next().is_some()
    }
}

/// Apply every merged recommendation to `props`, in merge order
///
/// Several recommendations can land on the same glob line; each change is
/// recorded and the last one wins.
pub fn apply_updates(props: &mut VersionsProps, merged: &MergedUpdates) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for rec in merged.iter() {
        match props.try_update(&rec.identifier, &rec.version) {
            UpdateOutcome::Updated(record) => outcome.records.push(record),
            UpdateOutcome::Unchanged { .. } => outcome.unchanged += 1,
            UpdateOutcome::NoMatchingPattern => outcome
                .warnings
                .push(Warning::no_matching_pattern(&rec.identifier)),
        }
    }

    outcome
}
