//! In-memory project registry with synchronous change notification.
//!
//! # Contract
//!
//! - The project sequence is ordered by creation and only mutated through
//!   [`ProjectRegistry::add_project`] and [`ProjectRegistry::move_project`].
//! - Every mutation notifies all listeners, in registration order, with the
//!   full sequence. A move that changes nothing notifies nobody.
//! - Listeners see the slice, never the registry, so they cannot re-enter a
//!   mutation while a notification is running.

use std::fmt;

use chrono::Utc;

use crate::types::{Project, ProjectId, ProjectStatus};

/// Callback invoked with the full project sequence after a mutation.
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Handle returned by [`ProjectRegistry::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Result of [`ProjectRegistry::move_project`]. Only `Moved` notifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    AlreadyInStatus,
    NotFound,
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// The single authoritative collection of projects for one application.
#[derive(Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    listeners: Vec<(ListenerId, Listener)>,
    next_project: u64,
    next_listener: u64,
}

impl fmt::Debug for ProjectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectRegistry")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The full ordered sequence.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new `Active` project and notify every listener.
    ///
    /// Input is assumed valid; see [`crate::validation::ProjectForm`].
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u8,
    ) -> ProjectId {
        self.next_project += 1;
        let id = ProjectId(format!("p{}", self.next_project));
        self.projects.push(Project {
            id: id.clone(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        });
        tracing::debug!(id = %id, total = self.projects.len(), "project added");
        self.notify();
        id
    }

    /// Change a project's status in place.
    ///
    /// Unknown ids and moves to the current status are silent no-ops and do
    /// not notify.
    pub fn move_project(&mut self, id: &ProjectId, status: ProjectStatus) -> MoveOutcome {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!(id = %id, "move ignored: unknown project");
            return MoveOutcome::NotFound;
        };
        if project.status == status {
            tracing::debug!(id = %id, %status, "move ignored: status unchanged");
            return MoveOutcome::AlreadyInStatus;
        }
        project.status = status;
        tracing::debug!(id = %id, %status, "project moved");
        self.notify();
        MoveOutcome::Moved
    }

    // -----------------------------------------------------------------------
    // Listeners
    // -----------------------------------------------------------------------

    /// Register a listener for future mutations. It is not called with the
    /// current state.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&[Project]) + 'static,
    {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let projects = &self.projects;
        for (_, listener) in self.listeners.iter_mut() {
            listener(projects);
        }
    }
}

/// Projects of `status`, in sequence order.
pub fn projects_with_status(
    projects: &[Project],
    status: ProjectStatus,
) -> impl Iterator<Item = &Project> {
    projects.iter().filter(move |p| p.has_status(status))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn ids_are_sequential_and_unique() {
        let mut registry = ProjectRegistry::new();
        let a = registry.add_project("A", "first one", 1);
        let b = registry.add_project("B", "second one", 2);
        assert_eq!(a, ProjectId::from("p1"));
        assert_eq!(b, ProjectId::from("p2"));
    }

    #[test]
    fn listener_not_replayed_on_subscribe() {
        let mut registry = ProjectRegistry::new();
        registry.add_project("A", "first one", 1);
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        registry.add_listener(move |_| *seen.borrow_mut() += 1);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn remove_listener_reports_presence() {
        let mut registry = ProjectRegistry::new();
        let id = registry.add_listener(|_| {});
        assert_eq!(registry.listener_count(), 1);
        assert!(registry.remove_listener(id));
        assert!(!registry.remove_listener(id));
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn filter_by_status_keeps_order() {
        let mut registry = ProjectRegistry::new();
        let a = registry.add_project("A", "first one", 1);
        registry.add_project("B", "second one", 2);
        let c = registry.add_project("C", "third one", 3);
        registry.move_project(&a, ProjectStatus::Finished);
        registry.move_project(&c, ProjectStatus::Finished);
        let finished: Vec<_> =
            projects_with_status(registry.projects(), ProjectStatus::Finished)
                .map(|p| p.id.clone())
                .collect();
        assert_eq!(finished, vec![a, c]);
    }

    #[test]
    fn debug_does_not_require_listener_debug() {
        let mut registry = ProjectRegistry::new();
        registry.add_listener(|_| {});
        assert!(format!("{registry:?}").contains("listeners: 1"));
    }
}
