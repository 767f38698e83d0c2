//! Status-filtered project list and drop target.
//!
//! # Responsibility
//! - Re-render its status subset on every store notification.
//! - Accept plain-text drops and turn them into status-move requests.
//!
//! # Invariants
//! - Rendered items always equal the store subset with matching status, in
//!   store insertion order.
//! - The subscription listener touches only the surface and the item cache,
//!   never the store.

use crate::component::project_item::ProjectItem;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::ProjectStore;
use crate::surface::drag::{DragTransfer, TEXT_PLAIN};
use crate::surface::{NodeId, RenderSurface};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Class marking a hovered drop target.
const DROPPABLE_CLASS: &str = "droppable";

/// One of the two board lists, filtered by project status.
pub struct ProjectList<S: RenderSurface> {
    status: ProjectStatus,
    surface: Rc<RefCell<S>>,
    node: NodeId,
    items: Rc<RefCell<Vec<ProjectItem>>>,
}

impl<S: RenderSurface + 'static> ProjectList<S> {
    /// Mounts the list under `root` and subscribes it to the store.
    ///
    /// The list renders nothing until the first notification arrives; the
    /// store does not replay state to new subscribers.
    pub fn mount(
        surface: Rc<RefCell<S>>,
        store: &mut ProjectStore,
        root: NodeId,
        status: ProjectStatus,
    ) -> Self {
        let node = {
            let mut surface = surface.borrow_mut();
            let node = surface.create_element("ul");
            surface.set_attribute(node, "id", &format!("{}-projects-list", status.slug()));
            surface.append_child(root, node);
            node
        };

        let items = Rc::new(RefCell::new(Vec::new()));
        let listener_surface = Rc::clone(&surface);
        let listener_items = Rc::clone(&items);
        store.subscribe(Box::new(move |projects| {
            let mut surface = listener_surface.borrow_mut();
            let mut items = listener_items.borrow_mut();
            surface.clear_children(node);
            items.clear();
            for project in projects.iter().filter(|project| project.status == status) {
                items.push(ProjectItem::mount(&mut *surface, node, project.clone()));
            }
        }));

        Self {
            status,
            surface,
            node,
            items,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Snapshot of the projects currently rendered, in store order.
    pub fn assigned(&self) -> Vec<Project> {
        self.items
            .borrow()
            .iter()
            .map(|item| item.project().clone())
            .collect()
    }

    /// Starts a drag from the item at `index`.
    ///
    /// Returns `false` when the index is out of range.
    pub fn start_drag(&self, index: usize, transfer: &mut DragTransfer) -> bool {
        match self.items.borrow().get(index) {
            Some(item) => {
                item.drag_start(transfer);
                true
            }
            None => false,
        }
    }

    /// Finishes the drag gesture for the item at `index`.
    pub fn end_drag(&self, index: usize) {
        if let Some(item) = self.items.borrow().get(index) {
            item.drag_end();
        }
    }

    /// Marks this list as the hovered drop target.
    pub fn drag_over(&self) {
        self.surface.borrow_mut().add_class(self.node, DROPPABLE_CLASS);
    }

    /// Clears the drop-target mark when the drag leaves the list.
    pub fn drag_leave(&self) {
        self.surface
            .borrow_mut()
            .remove_class(self.node, DROPPABLE_CLASS);
    }

    /// Accepts a plain-text drop and requests the status move.
    ///
    /// Transfers whose first payload kind is not plain text are ignored
    /// outright. The legacy behavior of leaving the drop mark in place on
    /// that branch is kept intact; the accepted branch clears the mark even
    /// when the carried id matches nothing.
    pub fn accept_drop(&self, transfer: &DragTransfer, store: &mut ProjectStore) {
        if transfer.first_kind() != Some(TEXT_PLAIN) {
            debug!(
                "event=drop_ignored module=component status=ok list={} reason=payload_kind",
                self.status.slug()
            );
            return;
        }

        if let Some(raw_id) = transfer.data(TEXT_PLAIN) {
            if let Ok(id) = raw_id.parse::<ProjectId>() {
                store.move_project(id, self.status);
            } else {
                debug!(
                    "event=drop_ignored module=component status=ok list={} reason=malformed_id",
                    self.status.slug()
                );
            }
        }
        self.surface
            .borrow_mut()
            .remove_class(self.node, DROPPABLE_CLASS);
    }
}
