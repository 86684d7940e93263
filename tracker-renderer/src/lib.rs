//! # tracker-renderer
//!
//! Tera-based views over the project registry: the new-project form, the
//! two status lists and their draggable items, attached to an in-memory
//! [`Document`] and rendered to HTML.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tracker_core::{ProjectForm, ProjectStatus};
//! use tracker_renderer::{App, TemplateEngine};
//!
//! fn build_page() -> Result<String, tracker_renderer::RenderError> {
//!     let mut app = App::new(TemplateEngine::embedded()?)?;
//!     app.submit(ProjectForm::new("Build site", "Build a landing page", "3"));
//!     let id = app.registry().projects()[0].id.clone();
//!     app.drag_project(&id, ProjectStatus::Finished)?;
//!     app.to_html()
//! }
//! ```

pub mod app;
pub mod context;
pub mod document;
pub mod engine;
pub mod error;
pub mod input;
pub mod item;
pub mod list;
pub mod mount;

pub use app::App;
pub use document::{Document, InsertPosition};
pub use engine::{TemplateEngine, TemplateKind};
pub use error::RenderError;
pub use input::{ProjectInputView, SubmitOutcome, INVALID_INPUT_ALERT};
pub use item::ProjectItemView;
pub use list::ProjectListView;
pub use mount::{Mount, ViewContext};
