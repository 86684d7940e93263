//! Drag-and-drop protocol between project items and project lists.
//!
//! A drag source attaches the project id to a [`DataTransfer`] under
//! [`PROJECT_ID_MEDIA_TYPE`]. Each list owns a [`DropTarget`]:
//!
//! ```text
//!          drag_over (text/plain)
//!   Idle ───────────────────────▶ DragHover
//!    ▲                               │
//!    └──── drag_leave / drop ────────┘
//! ```
//!
//! Only a drop on a hovering target with a matching payload produces a
//! [`DropRequest`], and applying that request is the only way a gesture
//! reaches [`ProjectRegistry::move_project`].

use crate::registry::{MoveOutcome, ProjectRegistry};
use crate::types::{Project, ProjectId, ProjectStatus};

/// The one payload type a project list accepts.
pub const PROJECT_ID_MEDIA_TYPE: &str = "text/plain";

// ---------------------------------------------------------------------------
// DataTransfer
// ---------------------------------------------------------------------------

/// Which operation the drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    Uninitialized,
    Move,
}

/// Payload carried by a drag gesture: `(media type, data)` entries in the
/// order they were set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transfer carrying a single `data` entry of `media_type`.
    pub fn with_data(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        let mut transfer = Self::new();
        transfer.set_data(media_type, data);
        transfer
    }

    /// Set (or replace) the entry for `media_type`.
    pub fn set_data(&mut self, media_type: impl Into<String>, data: impl Into<String>) {
        let media_type = media_type.into();
        let data = data.into();
        match self.items.iter_mut().find(|(t, _)| *t == media_type) {
            Some(entry) => entry.1 = data,
            None => self.items.push((media_type, data)),
        }
    }

    pub fn get_data(&self, media_type: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(t, _)| t == media_type)
            .map(|(_, d)| d.as_str())
    }

    /// Declared media types, in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(t, _)| t.as_str())
    }

    /// Whether the first declared type is the project-id type.
    pub fn carries_project_id(&self) -> bool {
        self.types().next() == Some(PROJECT_ID_MEDIA_TYPE)
    }
}

/// Build the transfer a project item attaches on drag start.
pub fn start_drag(project: &Project) -> DataTransfer {
    let mut transfer = DataTransfer::with_data(PROJECT_ID_MEDIA_TYPE, project.id.as_str());
    transfer.effect_allowed = DropEffect::Move;
    transfer
}

// ---------------------------------------------------------------------------
// Seams for views
// ---------------------------------------------------------------------------

/// Something that can be picked up.
pub trait Draggable {
    fn drag_start(&self) -> DataTransfer;

    fn drag_end(&self) {}
}

/// Something a [`Draggable`] can be dropped on.
pub trait DragTarget {
    /// Returns `true` when the drop is allowed.
    fn drag_over(&mut self, transfer: &DataTransfer) -> bool;

    fn drag_leave(&mut self);

    fn drop(&mut self, transfer: &DataTransfer, registry: &mut ProjectRegistry) -> DropOutcome;
}

// ---------------------------------------------------------------------------
// DropTarget state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropTargetState {
    #[default]
    Idle,
    DragHover,
}

/// A status-change request produced by an accepted drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRequest {
    pub id: ProjectId,
    pub status: ProjectStatus,
}

impl DropRequest {
    pub fn apply(self, registry: &mut ProjectRegistry) -> MoveOutcome {
        registry.move_project(&self.id, self.status)
    }
}

/// What happened to a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Never reached the registry.
    Rejected,
    /// Reached the registry; the move itself may still be a no-op.
    Applied(MoveOutcome),
}

/// Drop state of one list, bound to the status that list represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    status: ProjectStatus,
    state: DropTargetState,
}

impl DropTarget {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            state: DropTargetState::Idle,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn state(&self) -> DropTargetState {
        self.state
    }

    pub fn is_hovered(&self) -> bool {
        self.state == DropTargetState::DragHover
    }

    /// Enter `DragHover` if the transfer carries a project id.
    pub fn drag_over(&mut self, transfer: &DataTransfer) -> bool {
        if transfer.carries_project_id() {
            self.state = DropTargetState::DragHover;
            true
        } else {
            false
        }
    }

    pub fn drag_leave(&mut self) {
        self.state = DropTargetState::Idle;
    }

    /// Leave `DragHover` and turn the payload into a move request.
    ///
    /// Returns `None` when the target was not hovering or the transfer does
    /// not carry a project id.
    pub fn drop(&mut self, transfer: &DataTransfer) -> Option<DropRequest> {
        let was_hovered = self.is_hovered();
        self.state = DropTargetState::Idle;
        if !was_hovered || !transfer.carries_project_id() {
            tracing::warn!(target_status = %self.status, "drop rejected");
            return None;
        }
        let id = transfer.get_data(PROJECT_ID_MEDIA_TYPE)?;
        Some(DropRequest {
            id: ProjectId::from(id),
            status: self.status,
        })
    }

    /// [`DropTarget::drop`] followed by [`DropRequest::apply`].
    pub fn drop_into(
        &mut self,
        transfer: &DataTransfer,
        registry: &mut ProjectRegistry,
    ) -> DropOutcome {
        match self.drop(transfer) {
            Some(request) => DropOutcome::Applied(request.apply(registry)),
            None => DropOutcome::Rejected,
        }
    }
}
