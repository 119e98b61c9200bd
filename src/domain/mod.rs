//! Core domain models for vprops
//!
//! This module contains the plain data types shared across the crate:
//! - Recommendation reports as written by the version checker
//! - Flattened `(identifier, version)` recommendations
//! - Audit records for applied updates
//! - Non-fatal warnings surfaced to the caller

mod recommendation;
mod report;
mod update_record;
mod warning;

pub use recommendation::Recommendation;
pub use report::{DependencyUpdateRec, UpdateReport};
pub use update_record::UpdateRecord;
pub use warning::Warning;
