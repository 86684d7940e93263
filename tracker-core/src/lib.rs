//! Tracker core library — project registry, drag-and-drop protocol, input
//! validation.
//!
//! - [`types`] — [`Project`], [`ProjectId`], [`ProjectStatus`]
//! - [`registry`] — [`ProjectRegistry`] and its listeners
//! - [`drag`] — [`DropTarget`] state machine and drag payloads
//! - [`validation`] — form rules applied before a project is created
//! - [`config`] — `~/.tracker/config.yaml`
//! - [`error`] — [`ValidationError`], [`ConfigError`]

pub mod config;
pub mod drag;
pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

pub use config::TrackerConfig;
pub use drag::{
    DataTransfer, DragTarget, Draggable, DropOutcome, DropRequest, DropTarget, DropTargetState,
    PROJECT_ID_MEDIA_TYPE,
};
pub use error::{ConfigError, ValidationError};
pub use registry::{projects_with_status, ListenerId, MoveOutcome, ProjectRegistry};
pub use types::{NewProject, Project, ProjectId, ProjectStatus};
pub use validation::ProjectForm;
