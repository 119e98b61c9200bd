//! vprops - versions.props dependency updater library
//!
//! This library provides the core functionality for applying dependency
//! update recommendations to a `versions.props` file:
//! - Fuzzy (glob) resolution of dependency identifiers to file keys
//! - A line-preserving document model for `versions.props`
//! - Merging recommendations from several project reports
//! - Applying the merged recommendations to the document

pub mod cli;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod props;
pub mod report;
pub mod update;
