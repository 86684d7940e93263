//! Project input view — the form that creates projects.

use tracker_core::{ProjectForm, ProjectId, ProjectRegistry, ValidationError};

use crate::context::ProjectInputCtx;
use crate::document::InsertPosition;
use crate::engine::{TemplateEngine, TemplateKind};
use crate::error::RenderError;
use crate::mount::{Mount, ViewContext};

pub const INPUT_ELEMENT_ID: &str = "user-input";

/// Shown to the user when any field fails validation.
pub const INVALID_INPUT_ALERT: &str = "Invalid input please try again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ProjectId),
    Invalid {
        alert: &'static str,
        error: ValidationError,
    },
}

pub struct ProjectInputView {
    form: ProjectForm,
    ctx: ViewContext,
}

impl ProjectInputView {
    pub fn mount(ctx: ViewContext) -> Result<Self, RenderError> {
        let view = Self {
            form: ProjectForm::default(),
            ctx,
        };
        view.attach(&view.ctx)?;
        Ok(view)
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    /// Replace the field values, as if typed.
    pub fn fill(&mut self, form: ProjectForm) {
        self.form = form;
    }

    /// Validate the fields and create the project.
    ///
    /// On success the fields are cleared; on failure they are kept and the
    /// registry is not touched.
    pub fn submit(&mut self, registry: &mut ProjectRegistry) -> SubmitOutcome {
        let outcome = match self.form.gather() {
            Ok(project) => {
                let id = registry.add_project(project.title, project.description, project.people);
                self.form.clear();
                SubmitOutcome::Added(id)
            }
            Err(error) => {
                tracing::warn!(%error, "project form rejected");
                SubmitOutcome::Invalid {
                    alert: INVALID_INPUT_ALERT,
                    error,
                }
            }
        };
        if let Err(err) = self.refresh(&self.ctx) {
            tracing::error!(error = %err, "project form refresh failed");
        }
        outcome
    }
}

impl Mount for ProjectInputView {
    fn element_id(&self) -> String {
        INPUT_ELEMENT_ID.to_string()
    }

    fn position(&self) -> InsertPosition {
        InsertPosition::AfterBegin
    }

    fn render(&self, engine: &TemplateEngine) -> Result<String, RenderError> {
        engine.render(
            TemplateKind::ProjectInput,
            &ProjectInputCtx::from_form(INPUT_ELEMENT_ID, &self.form),
        )
    }
}
