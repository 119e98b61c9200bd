//! The versions.props format
//!
//! - `resolver`: maps a dependency identifier to the best matching key
//! - `line`: grammar of a single line
//! - `document`: the whole file, with in-place updates and lossless write-back

mod document;
mod line;
mod resolver;

pub use document::{UpdateOutcome, VersionsProps, VERSIONS_PROPS};
pub use line::{Line, VersionLine};
pub use resolver::FuzzyPatternResolver;
