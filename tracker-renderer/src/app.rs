//! Application shell: one registry, one document, the form and both lists.
//!
//! Every user gesture enters through a method here and runs to completion,
//! including all re-renders, before returning.

use std::cell::Ref;

use tracker_core::{
    DataTransfer, DragTarget, Draggable, DropOutcome, MoveOutcome, Project, ProjectForm,
    ProjectId, ProjectRegistry, ProjectStatus,
};

use crate::document::Document;
use crate::engine::TemplateEngine;
use crate::error::RenderError;
use crate::input::{ProjectInputView, SubmitOutcome};
use crate::item::ProjectItemView;
use crate::list::ProjectListView;
use crate::mount::ViewContext;

pub struct App {
    registry: ProjectRegistry,
    ctx: ViewContext,
    input: ProjectInputView,
    active: ProjectListView,
    finished: ProjectListView,
}

impl App {
    /// Mount the form, then the active list, then the finished list.
    pub fn new(engine: TemplateEngine) -> Result<Self, RenderError> {
        let ctx = ViewContext::new(engine);
        let mut registry = ProjectRegistry::new();
        let input = ProjectInputView::mount(ctx.clone())?;
        let active = ProjectListView::mount(ProjectStatus::Active, ctx.clone(), &mut registry)?;
        let finished =
            ProjectListView::mount(ProjectStatus::Finished, ctx.clone(), &mut registry)?;
        Ok(Self {
            registry,
            ctx,
            input,
            active,
            finished,
        })
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn document(&self) -> Ref<'_, Document> {
        self.ctx.document.borrow()
    }

    pub fn input(&self) -> &ProjectInputView {
        &self.input
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectListView {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Projects currently shown in the list for `status`.
    pub fn projects(&self, status: ProjectStatus) -> Vec<Project> {
        self.list(status).projects()
    }

    /// Type `form` into the input view and submit it.
    pub fn submit(&mut self, form: ProjectForm) -> SubmitOutcome {
        self.input.fill(form);
        self.input.submit(&mut self.registry)
    }

    pub fn move_project(&mut self, id: &ProjectId, status: ProjectStatus) -> MoveOutcome {
        self.registry.move_project(id, status)
    }

    /// Pick up the rendered item for `id` and drop it on the list for `to`.
    pub fn drag_project(
        &mut self,
        id: &ProjectId,
        to: ProjectStatus,
    ) -> Result<DropOutcome, RenderError> {
        let item = self
            .registry
            .get(id)
            .map(ProjectItemView::new)
            .ok_or_else(|| RenderError::ElementNotFound { id: id.to_string() })?;
        let transfer = item.drag_start();
        let outcome = if self.drag_over(to, &transfer) {
            self.drop(to, &transfer)
        } else {
            DropOutcome::Rejected
        };
        item.drag_end();
        Ok(outcome)
    }

    pub fn drag_over(&mut self, to: ProjectStatus, transfer: &DataTransfer) -> bool {
        self.target(to).0.drag_over(transfer)
    }

    pub fn drag_leave(&mut self, to: ProjectStatus) {
        self.target(to).0.drag_leave();
    }

    pub fn drop(&mut self, to: ProjectStatus, transfer: &DataTransfer) -> DropOutcome {
        let (list, registry) = self.target(to);
        list.drop(transfer, registry)
    }

    /// Render the full page.
    pub fn to_html(&self) -> Result<String, RenderError> {
        self.ctx.document.borrow().render_page(&self.ctx.engine)
    }

    fn target(&mut self, status: ProjectStatus) -> (&mut ProjectListView, &mut ProjectRegistry) {
        let list = match status {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        };
        (list, &mut self.registry)
    }
}
