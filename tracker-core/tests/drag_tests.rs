//! Drop-target protocol tests: which gestures reach the registry.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;
use tracker_core::{
    drag::{start_drag, DropEffect},
    DataTransfer, DropOutcome, DropTarget, DropTargetState, MoveOutcome, ProjectRegistry,
    ProjectStatus, PROJECT_ID_MEDIA_TYPE,
};

fn registry_with_counter() -> (ProjectRegistry, Rc<RefCell<usize>>) {
    let mut registry = ProjectRegistry::new();
    registry.add_project("Build site", "Build a landing page", 3);
    let hits = Rc::new(RefCell::new(0));
    let sink = hits.clone();
    registry.add_listener(move |_| *sink.borrow_mut() += 1);
    (registry, hits)
}

#[test]
fn drag_start_attaches_id_as_plain_text() {
    let (registry, _) = registry_with_counter();
    let transfer = start_drag(&registry.projects()[0]);

    assert_eq!(transfer.types().collect::<Vec<_>>(), vec![PROJECT_ID_MEDIA_TYPE]);
    assert_eq!(transfer.get_data(PROJECT_ID_MEDIA_TYPE), Some("p1"));
    assert_eq!(transfer.effect_allowed, DropEffect::Move);
}

#[test]
fn drop_on_other_list_moves_project() {
    let (mut registry, hits) = registry_with_counter();
    let transfer = start_drag(&registry.projects()[0]);
    let mut finished = DropTarget::new(ProjectStatus::Finished);

    assert!(finished.drag_over(&transfer));
    let outcome = finished.drop_into(&transfer, &mut registry);

    assert_eq!(outcome, DropOutcome::Applied(MoveOutcome::Moved));
    assert_eq!(registry.projects()[0].status, ProjectStatus::Finished);
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(finished.state(), DropTargetState::Idle);
}

#[test]
fn drop_on_own_list_is_a_silent_noop() {
    let (mut registry, hits) = registry_with_counter();
    let transfer = start_drag(&registry.projects()[0]);
    let mut active = DropTarget::new(ProjectStatus::Active);

    active.drag_over(&transfer);
    let outcome = active.drop_into(&transfer, &mut registry);

    assert_eq!(outcome, DropOutcome::Applied(MoveOutcome::AlreadyInStatus));
    assert_eq!(*hits.borrow(), 0);
}

#[rstest]
#[case::uri_list("text/uri-list")]
#[case::html("text/html")]
#[case::files("Files")]
fn foreign_media_type_never_reaches_registry(#[case] media_type: &str) {
    let (mut registry, hits) = registry_with_counter();
    let transfer = DataTransfer::with_data(media_type, "p1");
    let mut finished = DropTarget::new(ProjectStatus::Finished);

    assert!(!finished.drag_over(&transfer));
    assert_eq!(finished.state(), DropTargetState::Idle);
    assert_eq!(finished.drop_into(&transfer, &mut registry), DropOutcome::Rejected);
    assert_eq!(registry.projects()[0].status, ProjectStatus::Active);
    assert_eq!(*hits.borrow(), 0);
}

#[test]
fn drop_without_hover_is_rejected() {
    let (mut registry, hits) = registry_with_counter();
    let transfer = start_drag(&registry.projects()[0]);
    let mut finished = DropTarget::new(ProjectStatus::Finished);

    assert_eq!(finished.drop_into(&transfer, &mut registry), DropOutcome::Rejected);
    assert_eq!(*hits.borrow(), 0);
}

#[test]
fn drop_after_leave_is_rejected() {
    let (mut registry, _) = registry_with_counter();
    let transfer = start_drag(&registry.projects()[0]);
    let mut finished = DropTarget::new(ProjectStatus::Finished);

    finished.drag_over(&transfer);
    finished.drag_leave();

    assert_eq!(finished.drop_into(&transfer, &mut registry), DropOutcome::Rejected);
}

#[test]
fn drop_of_unknown_id_reaches_registry_as_noop() {
    let (mut registry, hits) = registry_with_counter();
    let transfer = DataTransfer::with_data(PROJECT_ID_MEDIA_TYPE, "p99");
    let mut finished = DropTarget::new(ProjectStatus::Finished);

    finished.drag_over(&transfer);
    let outcome = finished.drop_into(&transfer, &mut registry);

    assert_eq!(outcome, DropOutcome::Applied(MoveOutcome::NotFound));
    assert_eq!(*hits.borrow(), 0);
}
