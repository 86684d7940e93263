//! Project item view — one draggable `<li>` per project.

use tracker_core::{drag, DataTransfer, Draggable, Project};

use crate::context::ProjectItemCtx;
use crate::engine::{TemplateEngine, TemplateKind};
use crate::error::RenderError;

#[derive(Debug, Clone)]
pub struct ProjectItemView {
    project: Project,
}

impl ProjectItemView {
    pub fn new(project: &Project) -> Self {
        Self {
            project: project.clone(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn render(&self, engine: &TemplateEngine) -> Result<String, RenderError> {
        engine.render(
            TemplateKind::ProjectItem,
            &ProjectItemCtx::from_project(&self.project),
        )
    }
}

impl Draggable for ProjectItemView {
    fn drag_start(&self) -> DataTransfer {
        drag::start_drag(&self.project)
    }

    fn drag_end(&self) {
        tracing::debug!(id = %self.project.id, "drag end");
    }
}
