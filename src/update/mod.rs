//! Turning recommendation reports into versions file edits
//!
//! This module provides:
//! - Merging recommendations from many reports, dropping conflicts
//! - Identifier filters (`--only`, `--exclude`)
//! - Applying the merged result to a versions file with an audit trail

mod apply;
mod filter;
mod merge;

pub use apply::{apply_updates, ApplyOutcome};
pub use filter::UpdateFilter;
pub use merge::{merge, merge_plugin_recommendations, merge_recommendations, MergedUpdates, Merger};
