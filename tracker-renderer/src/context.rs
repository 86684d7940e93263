//! Template contexts — serializable rendering payloads built from projects.

use serde::{Deserialize, Serialize};

use tracker_core::{
    validation::{PEOPLE_MAX, PEOPLE_MIN},
    Project, ProjectForm, ProjectStatus,
};

/// "1 person" / "N persons".
pub fn persons_label(people: u8) -> String {
    if people == 1 {
        "1 person".to_string()
    } else {
        format!("{people} persons")
    }
}

/// One project item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItemCtx {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: u8,
    pub persons: String,
    pub status: String,
    /// RFC 3339 creation time.
    pub created_at: String,
}

impl ProjectItemCtx {
    pub fn from_project(project: &Project) -> Self {
        ProjectItemCtx {
            id: project.id.0.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            people: project.people,
            persons: persons_label(project.people),
            status: project.status.to_string(),
            created_at: project.created_at.to_rfc3339(),
        }
    }
}

/// One status list. `items` are already-rendered item fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListCtx {
    pub id: String,
    pub list_id: String,
    pub heading: String,
    pub status: String,
    pub droppable: bool,
    pub count: usize,
    pub items: Vec<String>,
}

impl ProjectListCtx {
    pub fn new(status: ProjectStatus, droppable: bool, items: Vec<String>) -> Self {
        ProjectListCtx {
            id: list_element_id(status),
            list_id: format!("{status}-projects-list"),
            heading: format!("{} PROJECTS", status.as_str().to_uppercase()),
            status: status.to_string(),
            droppable,
            count: items.len(),
            items,
        }
    }
}

/// Element id of the list section for `status`.
pub fn list_element_id(status: ProjectStatus) -> String {
    format!("{status}-projects")
}

/// The new-project form with its current field values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInputCtx {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: String,
    pub people_min: i64,
    pub people_max: i64,
}

impl ProjectInputCtx {
    pub fn from_form(id: &str, form: &ProjectForm) -> Self {
        ProjectInputCtx {
            id: id.to_string(),
            title: form.title.clone(),
            description: form.description.clone(),
            people: form.people.clone(),
            people_min: PEOPLE_MIN,
            people_max: PEOPLE_MAX,
        }
    }
}

/// The full page: every attached section in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageCtx {
    pub title: String,
    pub version: String,
    pub sections: Vec<SectionCtx>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCtx {
    pub id: String,
    pub html: String,
}
