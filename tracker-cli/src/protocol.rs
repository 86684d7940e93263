//! Newline-delimited JSON session protocol.
//!
//! One request per line, tagged by `cmd`; one response per request:
//!
//! ```text
//! {"cmd":"add","title":"Build site","description":"Build a landing page","people":3}
//! {"ok":true,"data":{"id":"p1"}}
//! {"cmd":"drag","id":"p1","to":"finished"}
//! {"ok":true,"data":{"outcome":"moved"}}
//! ```
//!
//! Blank lines and `#` comments are skipped.

use std::io::BufRead;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use tracker_core::{
    DataTransfer, DropOutcome, MoveOutcome, ProjectForm, ProjectId, ProjectStatus,
    PROJECT_ID_MEDIA_TYPE,
};
use tracker_renderer::{App, SubmitOutcome};

fn default_media_type() -> String {
    PROJECT_ID_MEDIA_TYPE.to_string()
}

/// A form field as typed; numbers are accepted for convenience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SessionRequest {
    /// Fill and submit the project form.
    Add {
        #[serde(default)]
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        people: FieldValue,
    },
    /// Change a project's status directly.
    Move { id: ProjectId, status: ProjectStatus },
    /// Drag a rendered project item onto a list.
    Drag { id: ProjectId, to: ProjectStatus },
    /// Hover a payload over a list.
    DragOver {
        to: ProjectStatus,
        #[serde(default = "default_media_type")]
        media_type: String,
    },
    /// Leave a list without dropping.
    DragLeave { to: ProjectStatus },
    /// Drop a raw payload on a list.
    Drop {
        to: ProjectStatus,
        #[serde(default = "default_media_type")]
        media_type: String,
        data: String,
    },
    /// Projects of one list, or every project when `status` is omitted.
    List {
        #[serde(default)]
        status: Option<ProjectStatus>,
    },
    /// The full HTML page.
    Render,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

fn move_key(outcome: MoveOutcome) -> &'static str {
    match outcome {
        MoveOutcome::Moved => "moved",
        MoveOutcome::AlreadyInStatus => "already_in_status",
        MoveOutcome::NotFound => "not_found",
    }
}

fn drop_key(outcome: DropOutcome) -> &'static str {
    match outcome {
        DropOutcome::Rejected => "rejected",
        DropOutcome::Applied(outcome) => move_key(outcome),
    }
}

/// Apply one request to the application.
pub fn handle(app: &mut App, request: SessionRequest) -> SessionResponse {
    match request {
        SessionRequest::Add {
            title,
            description,
            people,
        } => match app.submit(ProjectForm::new(title, description, people.into_text())) {
            SubmitOutcome::Added(id) => SessionResponse::ok(json!({ "id": id })),
            SubmitOutcome::Invalid { alert, error } => {
                SessionResponse::error(format!("{alert}: {error}"))
            }
        },
        SessionRequest::Move { id, status } => {
            let outcome = app.move_project(&id, status);
            SessionResponse::ok(json!({ "outcome": move_key(outcome) }))
        }
        SessionRequest::Drag { id, to } => match app.drag_project(&id, to) {
            Ok(outcome) => SessionResponse::ok(json!({ "outcome": drop_key(outcome) })),
            Err(err) => SessionResponse::error(err.to_string()),
        },
        SessionRequest::DragOver { to, media_type } => {
            let transfer = DataTransfer::with_data(media_type, "");
            let accepted = app.drag_over(to, &transfer);
            SessionResponse::ok(json!({ "accepted": accepted }))
        }
        SessionRequest::DragLeave { to } => {
            app.drag_leave(to);
            SessionResponse::ok(json!({ "droppable": app.list(to).is_droppable() }))
        }
        SessionRequest::Drop {
            to,
            media_type,
            data,
        } => {
            let transfer = DataTransfer::with_data(media_type, data);
            let outcome = app.drop(to, &transfer);
            SessionResponse::ok(json!({ "outcome": drop_key(outcome) }))
        }
        SessionRequest::List { status } => {
            let projects = match status {
                Some(status) => app.projects(status),
                None => app.registry().projects().to_vec(),
            };
            SessionResponse::ok(json!({ "projects": projects }))
        }
        SessionRequest::Render => match app.to_html() {
            Ok(html) => SessionResponse::ok(json!({ "html": html })),
            Err(err) => SessionResponse::error(err.to_string()),
        },
    }
}

/// Run every request in `reader` against `app`, passing each response to
/// `respond`. Returns the number of requests handled.
///
/// Malformed lines produce an error response; the session continues.
pub fn run_script<R, F>(app: &mut App, reader: R, mut respond: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(SessionResponse) -> Result<()>,
{
    let mut handled = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let response = match serde_json::from_str::<SessionRequest>(trimmed) {
            Ok(request) => handle(app, request),
            Err(err) => {
                tracing::warn!(line = line_no, error = %err, "malformed session request");
                SessionResponse::error(format!("line {line_no}: invalid request: {err}"))
            }
        };
        respond(response)?;
        handled += 1;
    }
    Ok(handled)
}
