//! Fuzzy identifier resolution against the keys of a versions file
//!
//! Keys may be exact (`org.slf4j:slf4j-api`) or contain `*` wildcards
//! (`org.slf4j:*`). A lookup prefers an exact key unconditionally, then the
//! matching glob with the most literal characters.

use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Wildcard character in keys
const WILDCARD: char = '*';

/// Resolves lookup keys to the most specific known identifier
#[derive(Debug, Clone)]
pub struct FuzzyPatternResolver {
    /// Identifiers without a wildcard
    exact: HashSet<String>,
    /// Compiled globs, most specific first
    globs: Vec<Glob>,
}

/// A compiled wildcard identifier
#[derive(Debug, Clone)]
struct Glob {
    /// Anchored, non-greedy matcher
    pattern: Regex,
    /// Identifier as written in the versions file
    raw: String,
    /// Number of non-wildcard characters
    weight: usize,
}

impl Glob {
    fn compile(raw: &str) -> Result<Self, regex::Error> {
        let mut weight = 0;
        let mut source = String::from("^(?:");
        for (i, token) in raw.split(WILDCARD).enumerate() {
            if i > 0 {
                source.push_str(".*?");
            }
            weight += token.chars().count();
            source.push_str(&regex::escape(token));
        }
        source.push_str(")$");

        Ok(Self {
            pattern: Regex::new(&source)?,
            raw: raw.to_string(),
            weight,
        })
    }

    fn matches(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }
}

impl FuzzyPatternResolver {
    /// Build a resolver from the known identifiers, in registration order
    ///
    /// Registration order breaks ties between globs of equal weight.
    /// Duplicate identifiers keep their first position.
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact = HashSet::new();
        let mut globs: Vec<Glob> = Vec::new();
        let mut seen = HashSet::new();

        for identifier in identifiers {
            let identifier = identifier.as_ref();
            if !seen.insert(identifier.to_string()) {
                continue;
            }

            if !identifier.contains(WILDCARD) {
                exact.insert(identifier.to_string());
                continue;
            }

            match Glob::compile(identifier) {
                Ok(glob) => globs.push(glob),
                Err(e) => warn!("Ignoring pattern '{}': {}", identifier, e),
            }
        }

        // stable: equal weights keep registration order
        globs.sort_by(|a, b| b.weight.cmp(&a.weight));

        Self { exact, globs }
    }

    /// Returns the known identifier that best matches `key`
    pub fn pattern_for(&self, key: &str) -> Option<&str> {
        if let Some(exact) = self.exact.get(key) {
            return Some(exact.as_str());
        }

        let found = self
            .globs
            .iter()
            .find(|glob| glob.matches(key))
            .map(|glob| glob.raw.as_str());

        debug!("Resolved '{}' to {:?}", key, found);
        found
    }

    /// Returns the specificity weight of a known glob identifier
    pub fn weight_of(&self, pattern: &str) -> Option<usize> {
        self.globs
            .iter()
            .find(|glob| glob.raw == pattern)
            .map(|glob| glob.weight)
    }

    /// Returns true if no identifiers are known
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.globs.is_empty()
    }
}
