//! Line grammar of the versions file
//!
//! Every line is either opaque (blank or a full-line comment, kept verbatim)
//! or a version line: `group:artifact = version [# comment]`.

use crate::error::PropsError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Blank line or full-line comment
static COMMENT_OR_EMPTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#.*)?$").unwrap());

// identifier = version [# comment]
static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<identifier>[^#\s:]+:[^#\s]+)\s*=\s*(?P<version>[^#\s]+)(?:\s*#\s*(?P<comment>.+))?$",
    )
    .unwrap()
});

/// A `identifier = version` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
    /// Dependency identifier, possibly containing `*`
    pub identifier: String,
    /// Pinned version
    pub version: String,
    /// Trailing comment text, without the `#`
    pub comment: Option<String>,
}

impl VersionLine {
    /// Creates a version line without a comment
    pub fn new(identifier: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            version: version.into(),
            comment: None,
        }
    }

    /// Sets the trailing comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns a copy pinned to a different version, keeping identifier and comment
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            identifier: self.identifier.clone(),
            version: version.into(),
            comment: self.comment.clone(),
        }
    }
}

impl fmt::Display for VersionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.identifier, self.version)?;
        if let Some(comment) = &self.comment {
            write!(f, " # {}", comment)?;
        }
        Ok(())
    }
}

/// One line of the versions file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Blank line or comment, re-emitted byte-for-byte
    Opaque(String),
    /// Parsed version entry
    Version(VersionLine),
}

impl Line {
    /// Parse a single raw line (without its terminator)
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse(raw: &str, line_number: usize) -> Result<Self, PropsError> {
        if COMMENT_OR_EMPTY.is_match(raw) {
            return Ok(Line::Opaque(raw.to_string()));
        }

        let caps = VERSION_LINE
            .captures(raw)
            .ok_or_else(|| PropsError::malformed_line(line_number, raw))?;

        let identifier = caps.name("identifier").map(|m| m.as_str());
        let version = caps.name("version").map(|m| m.as_str());
        let comment = caps.name("comment").map(|m| m.as_str().to_string());

        match (identifier, version) {
            (Some(identifier), Some(version)) => Ok(Line::Version(VersionLine {
                identifier: identifier.to_string(),
                version: version.to_string(),
                comment,
            })),
            _ => Err(PropsError::malformed_line(line_number, raw)),
        }
    }

    /// Render the line as it should appear in the file
    pub fn emit(&self) -> String {
        match self {
            Line::Opaque(content) => content.clone(),
            Line::Version(line) => line.to_string(),
        }
    }

    /// Returns the version entry, if this is one
    pub fn as_version(&self) -> Option<&VersionLine> {
        match self {
            Line::Version(line) => Some(line),
            Line::Opaque(_) => None,
        }
    }
}
