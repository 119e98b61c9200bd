//! The versions.props document
//!
//! A `VersionsProps` owns its lines in file order. Updates rewrite the
//! version field of a single line in place; every other byte of the file is
//! preserved on write-back.

use super::line::{Line, VersionLine};
use super::resolver::FuzzyPatternResolver;
use crate::domain::UpdateRecord;
use crate::error::PropsError;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Default file name of the versions file in a root project
pub const VERSIONS_PROPS: &str = "versions.props";

/// Outcome of a single update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A line was rewritten
    Updated(UpdateRecord),
    /// The matched line already carries the requested version
    Unchanged {
        /// Identifier of the matched line
        pattern: String,
    },
    /// No line matches the identifier
    NoMatchingPattern,
}

impl UpdateOutcome {
    /// Returns the record if a line was rewritten
    pub fn into_record(self) -> Option<UpdateRecord> {
        match self {
            UpdateOutcome::Updated(record) => Some(record),
            _ => None,
        }
    }
}

/// Parsed versions file
#[derive(Debug, Clone)]
pub struct VersionsProps {
    lines: Vec<Line>,
    /// Snapshot of the identifiers at parse time
    resolver: FuzzyPatternResolver,
}

impl VersionsProps {
    /// Parse a document from its lines (without terminators)
    ///
    /// Fails on the first line that is neither opaque nor a version line.
    pub fn parse<I, S>(lines: I) -> Result<Self, PropsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = lines
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| Line::parse(raw.as_ref(), idx + 1))
            .collect::<Result<Vec<_>, _>>()?;

        let resolver = FuzzyPatternResolver::new(
            parsed
                .iter()
                .filter_map(Line::as_version)
                .map(|line| line.identifier.as_str()),
        );

        Ok(Self {
            lines: parsed,
            resolver,
        })
    }

    /// Read and parse a versions file
    pub fn read(path: &Path) -> Result<Self, PropsError> {
        let content = fs::read_to_string(path).map_err(|e| PropsError::read_error(path, e))?;
        content.parse()
    }

    /// Overwrite `path` with the serialized document
    pub fn write(&self, path: &Path) -> Result<(), PropsError> {
        fs::write(path, self.write_to_string()).map_err(|e| PropsError::write_error(path, e))
    }

    /// Pin the entry best matching `identifier` to `version`
    ///
    /// Returns a record only when a line actually changed.
    pub fn update(&mut self, identifier: &str, version: &str) -> Option<UpdateRecord> {
        self.try_update(identifier, version).into_record()
    }

    /// Like [`VersionsProps::update`], but reports why nothing changed
    pub fn try_update(&mut self, identifier: &str, version: &str) -> UpdateOutcome {
        let Some(pattern) = self.resolver.pattern_for(identifier) else {
            debug!("No matching pattern for '{}'", identifier);
            return UpdateOutcome::NoMatchingPattern;
        };

        let found = self.lines.iter_mut().find_map(|line| match line {
            Line::Version(entry) if entry.identifier == pattern => Some(entry),
            _ => None,
        });

        // the resolver is derived from these lines, so this only trips if they diverge
        let Some(entry) = found else {
            return UpdateOutcome::NoMatchingPattern;
        };

        if entry.version == version {
            return UpdateOutcome::Unchanged {
                pattern: entry.identifier.clone(),
            };
        }

        info!("Setting {} = {}", entry.identifier, version);
        let old_version = std::mem::replace(&mut entry.version, version.to_string());
        UpdateOutcome::Updated(UpdateRecord::new(
            entry.identifier.clone(),
            old_version,
            version,
        ))
    }

    /// Serialize back to text, one line per entry plus a trailing newline
    pub fn write_to_string(&self) -> String {
        let mut out = self
            .lines
            .iter()
            .map(Line::emit)
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }

    /// Returns all lines in file order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the version entries in file order
    pub fn version_lines(&self) -> impl Iterator<Item = &VersionLine> {
        self.lines.iter().filter_map(Line::as_version)
    }

    /// Returns the identifiers of all version entries in file order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.version_lines().map(|line| line.identifier.as_str())
    }

    /// Returns the version pinned for an exact identifier
    pub fn version_of(&self, identifier: &str) -> Option<&str> {
        self.version_lines()
            .find(|line| line.identifier == identifier)
            .map(|line| line.version.as_str())
    }

    /// Returns the key `identifier` would be resolved to
    pub fn pattern_for(&self, identifier: &str) -> Option<&str> {
        self.resolver.pattern_for(identifier)
    }
}

impl FromStr for VersionsProps {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "# comment

org.slf4j:slf4j-api = 1.7.15 # bar
com.foo.bar:qux = 1.2

org.slf4j:* = 1.7.12
";

    #[test]
    fn test_parse_line_kinds() {
        let props: VersionsProps = SAMPLE.parse().unwrap();
        assert_eq!(props.lines().len(), 6);
        assert_eq!(props.version_lines().count(), 3);
        assert_eq!(
            props.identifiers().collect::<Vec<_>>(),
            vec!["org.slf4j:slf4j-api", "com.foo.bar:qux", "org.slf4j:*"]
        );
    }

    #[test]
    fn test_round_trip_unmodified() {
        let props: VersionsProps = SAMPLE.parse().unwrap();
        assert_eq!(props.write_to_string(), SAMPLE);

        let reparsed: VersionsProps = props.write_to_string().parse().unwrap();
        assert_eq!(reparsed.write_to_string(), props.write_to_string());
    }

    #[test]
    fn test_trailing_newline_added() {
        let props: VersionsProps = "g:a = 1.0".parse().unwrap();
        assert_eq!(props.write_to_string(), "g:a = 1.0\n");
    }

    #[test]
    fn test_empty_document() {
        let props: VersionsProps = "".parse().unwrap();
        assert!(props.lines().is_empty());
        assert_eq!(props.write_to_string(), "\n");
    }

    #[test]
    fn test_crlf_input() {
        let props: VersionsProps = "# c\r\ng:a = 1.0\r\n".parse().unwrap();
        assert_eq!(props.version_of("g:a"), Some("1.0"));
        assert_eq!(props.write_to_string(), "# c\ng:a = 1.0\n");
    }

    #[test]
    fn test_parse_malformed_line() {
        let err = VersionsProps::parse(["# ok", "g:a = 1.0", "not a line"]).unwrap_err();
        match err {
            PropsError::MalformedLine { line_number, line } => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "not a line");
            }
            other => panic!("Expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_mutation() {
        let mut props = VersionsProps::parse([
            "# comment",
            "   ",
            "",
            "org.slf4j:slf4j-api = 1.7.15 # bar",
            "com.foo.bar:qux = 1.2",
            "org.slf4j:* = 1.7.12",
        ])
        .unwrap();

        props.update("org.slf4j:none", "1.7.24");
        props.update("org.slf4j:slf4j-api", "1.7.26");

        let text = props.write_to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        assert!(lines.contains(&"org.slf4j:* = 1.7.24"));
        assert!(lines.contains(&"org.slf4j:slf4j-api = 1.7.26 # bar"));
        assert!(lines.contains(&"com.foo.bar:qux = 1.2"));
        assert!(lines.contains(&"   "));
    }

    #[test]
    fn test_update_returns_record() {
        let mut props: VersionsProps = SAMPLE.parse().unwrap();
        let record = props.update("org.slf4j:none", "1.7.24").unwrap();
        assert_eq!(record, UpdateRecord::new("org.slf4j:*", "1.7.12", "1.7.24"));
    }

    #[test]
    fn test_no_update_for_same_value() {
        let mut props = VersionsProps::parse(["com.foo.bar:qux = 1.2"]).unwrap();
        assert_eq!(props.update("com.foo.bar:qux", "1.2"), None);
        assert_eq!(
            props.try_update("com.foo.bar:qux", "1.2"),
            UpdateOutcome::Unchanged {
                pattern: "com.foo.bar:qux".to_string()
            }
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut props: VersionsProps = SAMPLE.parse().unwrap();
        assert!(props.update("org.slf4j:slf4j-api", "1.7.26").is_some());
        let after_first = props.write_to_string();

        assert_eq!(props.update("org.slf4j:slf4j-api", "1.7.26"), None);
        assert_eq!(props.update("org.slf4j:slf4j-api", "1.7.26"), None);
        assert_eq!(props.write_to_string(), after_first);
    }

    #[test]
    fn test_update_without_match() {
        let mut props: VersionsProps = SAMPLE.parse().unwrap();
        assert_eq!(
            props.try_update("com.google.guava:guava", "31.0"),
            UpdateOutcome::NoMatchingPattern
        );
        assert_eq!(props.write_to_string(), SAMPLE);
    }

    #[test]
    fn test_update_first_duplicate_only() {
        let mut props = VersionsProps::parse(["g:a = 1.0", "g:a = 1.0 # again"]).unwrap();
        props.update("g:a", "2.0");
        assert_eq!(props.write_to_string(), "g:a = 2.0\ng:a = 1.0 # again\n");
    }

    #[test]
    fn test_pattern_for() {
        let props: VersionsProps = SAMPLE.parse().unwrap();
        assert_eq!(props.pattern_for("org.slf4j:jul-to-slf4j"), Some("org.slf4j:*"));
        assert_eq!(props.pattern_for("org.slf4j:slf4j-api"), Some("org.slf4j:slf4j-api"));
    }

    #[test]
    fn test_read_and_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(VERSIONS_PROPS);
        fs::write(&path, SAMPLE).unwrap();

        let mut props = VersionsProps::read(&path).unwrap();
        props.update("com.foo.bar:qux", "1.3");
        props.write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("com.foo.bar:qux = 1.3"));
        assert!(content.starts_with("# comment\n\norg.slf4j:slf4j-api = 1.7.15 # bar\n"));
    }

    #[test]
    fn test_read_missing_file() {
        let result = VersionsProps::read(Path::new("/nonexistent/versions.props"));
        assert!(matches!(result, Err(PropsError::ReadError { .. })));
    }
}
