//! Domain types for the project tracker.
//!
//! A [`Project`] is a plain record. Field-level invariants (non-empty title,
//! description length, people count range) are enforced at the input
//! boundary by [`crate::validation`], not here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Opaque project identifier, issued by the registry and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which list a project belongs to. The only mutable part of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    /// Both statuses in list display order.
    pub fn all() -> &'static [ProjectStatus] {
        &[ProjectStatus::Active, ProjectStatus::Finished]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "finished" => Ok(ProjectStatus::Finished),
            other => Err(format!(
                "unknown project status '{other}'; expected: active, finished"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One tracked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned, 1..=5.
    pub people: u8,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}

/// Input that already passed boundary validation and may be handed to
/// [`crate::ProjectRegistry::add_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u8,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_display() {
        assert_eq!(ProjectId::from("p1").to_string(), "p1");
        assert_eq!(ProjectId::from(String::from("p2")).as_str(), "p2");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<ProjectStatus>(), Ok(ProjectStatus::Active));
        assert_eq!("FINISHED".parse::<ProjectStatus>(), Ok(ProjectStatus::Finished));
        assert!("done".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Finished).expect("serialize");
        assert_eq!(json, "\"finished\"");
    }

    #[test]
    fn project_json_shape() {
        let project = Project {
            id: ProjectId::from("p7"),
            title: "Build site".to_string(),
            description: "Build a landing page".to_string(),
            people: 3,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&project).expect("serialize");
        assert_eq!(value["id"], "p7");
        assert_eq!(value["status"], "active");
        assert_eq!(value["people"], 3);
        assert!(value["created_at"].is_string());
    }
}
