//! # Project Data Structures
//!
//! The `Project` struct is the root container for a deck screening job.
//! Projects serialize to `.deck` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: ProjectSettings (site defaults)
//! ├── catalog: ConnectorCatalog (top and base connectors, in preference order)
//! └── lines: Vec<FramingInput> (framing lines, in report order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use deck_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("site_defaults"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{evaluate_line, ConnectorCatalog, Evaluation, FramingInput, SiteDefaults};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for .deck files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: ProjectSettings,

    #[serde(default)]
    pub catalog: ConnectorCatalog,

    /// Framing lines in report order
    #[serde(default)]
    pub lines: Vec<FramingInput>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// ```rust
    /// use deck_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert_eq!(project.line_count(), 0);
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: ProjectSettings::default(),
            catalog: ConnectorCatalog::default(),
            lines: Vec::new(),
        }
    }

    /// Append a framing line.
    pub fn add_line(&mut self, line: FramingInput) {
        self.lines.push(line);
        self.touch();
    }

    /// Remove the first line with `label`, returning it.
    pub fn remove_line(&mut self, label: &str) -> Option<FramingInput> {
        let idx = self.lines.iter().position(|l| l.label == label)?;
        self.touch();
        Some(self.lines.remove(idx))
    }

    /// First line with `label`
    pub fn line(&self, label: &str) -> Option<&FramingInput> {
        self.lines.iter().find(|l| l.label == label)
    }

    /// Lines to evaluate: the one labelled `label`, or all of them.
    pub fn select_lines(&self, label: Option<&str>) -> CalcResult<Vec<&FramingInput>> {
        match label {
            Some(label) => self
                .line(label)
                .map(|line| vec![line])
                .ok_or_else(|| CalcError::invalid_input("--line", label, "No framing line with this label")),
            None => Ok(self.lines.iter().collect()),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Screen every line against the project catalog and site defaults.
    ///
    /// A failing line does not stop the others; each result is paired with
    /// its line label.
    pub fn evaluate_all(&self) -> Vec<(String, CalcResult<Evaluation>)> {
        self.lines
            .iter()
            .map(|line| {
                (
                    line.label.clone(),
                    evaluate_line(line, &self.catalog, &self.settings.site_defaults),
                )
            })
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    pub client: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// Project-wide settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Fallbacks for site values a line does not supply
    #[serde(default)]
    pub site_defaults: SiteDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::framing::fixtures::deck_line;
    use crate::calculations::TopConnectorSpec;

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "25-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.client, "Acme Corp");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings.site_defaults, SiteDefaults::default());
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Jane Engineer", "25-042", "Test Client");
        project.add_line(deck_line());
        project.catalog.top.push(TopConnectorSpec::new("BC4", 2_000.0, 500.0, 300.0, 0.0));

        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("Line A"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
        assert_eq!(roundtrip.lines, project.lines);
        assert_eq!(roundtrip.catalog, project.catalog);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let json = r#"{
            "meta": {
                "version": "0.1.0",
                "engineer": "E",
                "job_id": "J",
                "client": "C",
                "created": "2025-01-01T00:00:00Z",
                "modified": "2025-01-01T00:00:00Z"
            }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.lines.is_empty());
        assert!(project.catalog.top.is_empty());
        assert_eq!(project.settings.site_defaults.sf_uplift, 1.5);
    }

    #[test]
    fn test_line_lookup_and_removal() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        project.add_line(deck_line());
        let mut second = deck_line();
        second.label = "Line B".to_string();
        project.add_line(second);

        assert_eq!(project.line_count(), 2);
        assert!(project.line("Line B").is_some());
        assert!(project.line("Line C").is_none());

        let removed = project.remove_line("Line A").unwrap();
        assert_eq!(removed.label, "Line A");
        assert_eq!(project.line_count(), 1);
        assert!(project.remove_line("Line A").is_none());
    }

    #[test]
    fn test_select_lines() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        project.add_line(deck_line());
        let mut b = deck_line();
        b.label = "Line B".to_string();
        project.add_line(b);

        assert_eq!(project.select_lines(None).unwrap().len(), 2);
        assert_eq!(project.select_lines(Some("Line B")).unwrap()[0].label, "Line B");

        let err = project.select_lines(Some("Line Z")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("Line Z"));
    }

    #[test]
    fn test_evaluate_all_keeps_going_after_a_failure() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let mut bad = deck_line();
        bad.label = "Bad".to_string();
        bad.connectors.top_model = Some("MISSING".to_string());
        project.add_line(bad);
        project.add_line(deck_line());

        let results = project.evaluate_all();
        assert_eq!(results.len(), 2);
        assert!(results[0].1.is_err());
        assert!(results[1].1.is_ok());
        assert_eq!(results[1].0, "Line A");
    }
}
