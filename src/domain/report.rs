//! Update recommendation reports
//!
//! One report is produced per project by the version checker and persisted
//! as YAML with camelCase keys.

use super::Recommendation;
use serde::{Deserialize, Serialize};

/// Suffix of the artifact name carried by plugin-block marker coordinates
const PLUGIN_MARKER_SUFFIX: &str = ".gradle.plugin";

/// A single recommended upgrade for a dependency or plugin coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyUpdateRec {
    /// Group of the coordinate
    pub group: String,
    /// Artifact name of the coordinate
    pub name: String,
    /// Currently resolved version, when the checker knew it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    /// Latest available version
    pub latest_version: String,
}

impl DependencyUpdateRec {
    /// Creates a new recommendation without a known current version
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            current_version: None,
            latest_version: latest_version.into(),
        }
    }

    /// Sets the current version
    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = Some(version.into());
        self
    }

    /// Returns the current version, or an empty string when unknown
    pub fn current_version(&self) -> &str {
        self.current_version.as_deref().unwrap_or("")
    }

    /// Returns the `group:name` identifier
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    /// Returns true if this coordinate is a plugin marker (`<id>:<id>.gradle.plugin`)
    pub fn is_plugin_marker(&self) -> bool {
        self.name.ends_with(PLUGIN_MARKER_SUFFIX)
    }

    /// Converts to a dependency recommendation keyed by `group:name`
    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation::new(self.identifier(), &self.latest_version)
    }

    /// Converts to a plugin recommendation keyed by plugin id (the group)
    pub fn to_plugin_recommendation(&self) -> Recommendation {
        Recommendation::new(&self.group, &self.latest_version)
    }
}

/// Update recommendations for one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReport {
    /// Project path the report was produced for
    #[serde(default)]
    pub project: String,
    /// Recommended library upgrades
    #[serde(default)]
    pub dependency_updates: Vec<DependencyUpdateRec>,
    /// Recommended plugin upgrades
    #[serde(default)]
    pub plugin_updates: Vec<DependencyUpdateRec>,
}

impl UpdateReport {
    /// Creates an empty report for a project
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    /// Adds a dependency recommendation
    pub fn with_dependency(mut self, rec: DependencyUpdateRec) -> Self {
        self.dependency_updates.push(rec);
        self
    }

    /// Adds a plugin recommendation
    pub fn with_plugin(mut self, rec: DependencyUpdateRec) -> Self {
        self.plugin_updates.push(rec);
        self
    }

    /// Returns true if the report recommends nothing
    pub fn is_empty(&self) -> bool {
        self.dependency_updates.is_empty() && self.plugin_updates.is_empty()
    }
}
