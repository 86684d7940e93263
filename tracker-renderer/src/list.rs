//! Project list view — drop target for one status and registry subscriber.
//!
//! The list keeps the projects it last received plus its [`DropTarget`] in
//! shared state so the registry listener can re-render it. That state is
//! never borrowed across a registry call.

use std::cell::RefCell;
use std::rc::Rc;

use tracker_core::{
    projects_with_status, DataTransfer, DragTarget, DropOutcome, DropTarget, ListenerId, Project,
    ProjectRegistry, ProjectStatus,
};

use crate::context::{list_element_id, ProjectListCtx};
use crate::engine::{TemplateEngine, TemplateKind};
use crate::error::RenderError;
use crate::item::ProjectItemView;
use crate::mount::{Mount, ViewContext};

#[derive(Debug)]
struct ListState {
    projects: Vec<Project>,
    target: DropTarget,
}

impl ListState {
    fn render(&self, engine: &TemplateEngine) -> Result<String, RenderError> {
        let items = self
            .projects
            .iter()
            .map(|p| ProjectItemView::new(p).render(engine))
            .collect::<Result<Vec<_>, _>>()?;
        let ctx = ProjectListCtx::new(self.target.status(), self.target.is_hovered(), items);
        engine.render(TemplateKind::ProjectList, &ctx)
    }
}

pub struct ProjectListView {
    status: ProjectStatus,
    state: Rc<RefCell<ListState>>,
    ctx: ViewContext,
    listener: ListenerId,
}

impl ProjectListView {
    /// Attach the list for `status` and subscribe it to `registry`.
    pub fn mount(
        status: ProjectStatus,
        ctx: ViewContext,
        registry: &mut ProjectRegistry,
    ) -> Result<Self, RenderError> {
        let state = Rc::new(RefCell::new(ListState {
            projects: projects_with_status(registry.projects(), status)
                .cloned()
                .collect(),
            target: DropTarget::new(status),
        }));

        let listener = {
            let state = state.clone();
            let ctx = ctx.clone();
            registry.add_listener(move |projects| {
                state.borrow_mut().projects =
                    projects_with_status(projects, status).cloned().collect();
                let rendered = state.borrow().render(&ctx.engine);
                let result = rendered.and_then(|html| {
                    ctx.document
                        .borrow_mut()
                        .replace(&list_element_id(status), html)
                });
                if let Err(err) = result {
                    tracing::error!(%status, error = %err, "project list re-render failed");
                }
            })
        };

        let view = Self {
            status,
            state,
            ctx,
            listener,
        };
        if let Err(err) = view.attach(&view.ctx) {
            registry.remove_listener(view.listener);
            return Err(err);
        }
        Ok(view)
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Projects as last rendered, in creation order.
    pub fn projects(&self) -> Vec<Project> {
        self.state.borrow().projects.clone()
    }

    pub fn is_droppable(&self) -> bool {
        self.state.borrow().target.is_hovered()
    }

    /// Unsubscribe and detach.
    pub fn unmount(self, registry: &mut ProjectRegistry) -> Result<(), RenderError> {
        registry.remove_listener(self.listener);
        self.ctx
            .document
            .borrow_mut()
            .remove(&self.element_id())
            .map(|_| ())
    }

    fn refresh_logged(&self) {
        if let Err(err) = self.refresh(&self.ctx) {
            tracing::error!(status = %self.status, error = %err, "project list refresh failed");
        }
    }
}

impl Mount for ProjectListView {
    fn element_id(&self) -> String {
        list_element_id(self.status)
    }

    fn render(&self, engine: &TemplateEngine) -> Result<String, RenderError> {
        self.state.borrow().render(engine)
    }
}

impl DragTarget for ProjectListView {
    fn drag_over(&mut self, transfer: &DataTransfer) -> bool {
        let (was_hovered, accepted) = {
            let mut state = self.state.borrow_mut();
            let was_hovered = state.target.is_hovered();
            (was_hovered, state.target.drag_over(transfer))
        };
        if accepted && !was_hovered {
            self.refresh_logged();
        }
        accepted
    }

    fn drag_leave(&mut self) {
        let was_hovered = {
            let mut state = self.state.borrow_mut();
            let was_hovered = state.target.is_hovered();
            state.target.drag_leave();
            was_hovered
        };
        if was_hovered {
            self.refresh_logged();
        }
    }

    fn drop(&mut self, transfer: &DataTransfer, registry: &mut ProjectRegistry) -> DropOutcome {
        let request = self.state.borrow_mut().target.drop(transfer);
        self.refresh_logged();
        match request {
            Some(request) => DropOutcome::Applied(request.apply(registry)),
            None => DropOutcome::Rejected,
        }
    }
}
