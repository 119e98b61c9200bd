//! Loading update recommendation reports
//!
//! The version checker writes one `report.yml` per project under
//! `<project>/build/com.markelliot.versions/`. This module finds and
//! deserializes them.

use crate::domain::UpdateReport;
use crate::error::ReportError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Directory (inside a project's build dir) holding the reports
pub const REPORT_DIRNAME: &str = "com.markelliot.versions";

/// File name of the dependency update report
pub const REPORT_YML: &str = "report.yml";

/// Build output directory of a project
const BUILD_DIRNAME: &str = "build";

/// Returns the report path for a project's build directory
pub fn report_path(build_dir: &Path) -> PathBuf {
    build_dir.join(REPORT_DIRNAME).join(REPORT_YML)
}

/// Parse a report from YAML text
pub fn parse_report(content: &str, path: &Path) -> Result<UpdateReport, ReportError> {
    serde_yaml::from_str(content).map_err(|e| ReportError::yaml_parse_error(path, e.to_string()))
}

/// Read and parse a single report file
pub fn load_report(path: &Path) -> Result<UpdateReport, ReportError> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::read_error(path, e))?;
    parse_report(&content, path)
}

/// Read and parse several report files, stopping at the first failure
pub fn load_reports(paths: &[PathBuf]) -> Result<Vec<UpdateReport>, ReportError> {
    paths.iter().map(|path| load_report(path)).collect()
}

/// Load the report of a single project, if it has one
pub fn load_project_report(build_dir: &Path) -> Result<Option<UpdateReport>, ReportError> {
    let path = report_path(build_dir);
    if !path.is_file() {
        return Ok(None);
    }
    load_report(&path).map(Some)
}

/// Skip hidden directories and Gradle caches while walking
fn is_walkable(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && name != "node_modules"
}

/// Find all project reports below `root`, sorted by path
pub fn discover_reports(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_walkable)
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir() && entry.file_name() == BUILD_DIRNAME)
        .map(|entry| report_path(entry.path()))
        .filter(|path| path.is_file())
        .collect();

    found.sort();
    for path in &found {
        debug!("Found report {}", path.display());
    }
    info!("Discovered {} report(s) under {}", found.len(), root.display());
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const REPORT: &str = "project: \":core\"
dependencyUpdates:
  - group: org.slf4j
    name: slf4j-api
    currentVersion: 1.7.15
    latestVersion: 1.7.26
";

    fn write_report(root: &Path, project: &str, content: &str) -> PathBuf {
        let build_dir = root.join(project).join(BUILD_DIRNAME);
        let dir = build_dir.join(REPORT_DIRNAME);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(REPORT_YML);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_report_path() {
        assert_eq!(
            report_path(Path::new("/p/build")),
            PathBuf::from("/p/build/com.markelliot.versions/report.yml")
        );
    }

    #[test]
    fn test_parse_report() {
        let report = parse_report(REPORT, Path::new("report.yml")).unwrap();
        assert_eq!(report.project, ":core");
        assert_eq!(report.dependency_updates[0].identifier(), "org.slf4j:slf4j-api");
    }

    #[test]
    fn test_parse_report_invalid() {
        let err = parse_report("dependencyUpdates: [{group: x}]", Path::new("r.yml")).unwrap_err();
        assert!(matches!(err, ReportError::YamlParseError { .. }));
    }

    #[test]
    fn test_load_report_missing() {
        let err = load_report(Path::new("/nonexistent/report.yml")).unwrap_err();
        assert!(matches!(err, ReportError::ReadError { .. }));
    }

    #[test]
    fn test_load_project_report() {
        let temp_dir = TempDir::new().unwrap();
        write_report(temp_dir.path(), "core", REPORT);

        let build_dir = temp_dir.path().join("core").join(BUILD_DIRNAME);
        let report = load_project_report(&build_dir).unwrap().unwrap();
        assert_eq!(report.project, ":core");

        let missing = temp_dir.path().join("other").join(BUILD_DIRNAME);
        assert!(load_project_report(&missing).unwrap().is_none());
    }

    #[test]
    fn test_discover_reports() {
        let temp_dir = TempDir::new().unwrap();
        let b = write_report(temp_dir.path(), "b", REPORT);
        let a = write_report(temp_dir.path(), "a", REPORT);
        let root = write_report(temp_dir.path(), "", REPORT);
        write_report(temp_dir.path(), ".gradle/cache", REPORT);

        let found = discover_reports(temp_dir.path());
        let mut expected = vec![a, b, root];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_discover_reports_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(discover_reports(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_load_reports() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_report(temp_dir.path(), "a", REPORT);
        let reports = load_reports(&[path]).unwrap();
        assert_eq!(reports.len(), 1);
    }
}
