//! Board wiring facade.
//!
//! # Responsibility
//! - Own the store and mount the form plus both lists over one shared
//!   surface.
//! - Route host gestures (fill, submit, drag, drop) to the right component.
//!
//! # Invariants
//! - Exactly one store instance exists per board.
//! - Store mutations run while no surface borrow is held, so listeners can
//!   re-render synchronously.

use crate::component::project_input::ProjectInput;
use crate::component::project_list::ProjectList;
use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::ProjectStore;
use crate::surface::drag::DragTransfer;
use crate::surface::{InMemorySurface, NodeId, RenderSurface};
use crate::validation::InputPolicy;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Fully wired project board: intake form, active list, finished list.
pub struct Board<S: RenderSurface + 'static> {
    surface: Rc<RefCell<S>>,
    store: ProjectStore,
    root: NodeId,
    input: ProjectInput<S>,
    active_list: ProjectList<S>,
    finished_list: ProjectList<S>,
}

impl<S: RenderSurface + 'static> Board<S> {
    /// Mounts a board with the legacy input policy.
    pub fn mount(surface: S) -> Self {
        Self::mount_with_policy(surface, InputPolicy::default())
    }

    /// Mounts a board with a caller-provided input policy.
    pub fn mount_with_policy(surface: S, policy: InputPolicy) -> Self {
        let surface = Rc::new(RefCell::new(surface));
        let root = {
            let mut surface = surface.borrow_mut();
            let root = surface.create_element("div");
            surface.set_attribute(root, "id", "app");
            root
        };

        let mut store = ProjectStore::new();
        let input = ProjectInput::mount(Rc::clone(&surface), root, policy);
        let active_list =
            ProjectList::mount(Rc::clone(&surface), &mut store, root, ProjectStatus::Active);
        let finished_list = ProjectList::mount(
            Rc::clone(&surface),
            &mut store,
            root,
            ProjectStatus::Finished,
        );
        info!("event=board_mounted module=board status=ok");

        Self {
            surface,
            store,
            root,
            input,
            active_list,
            finished_list,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns a handle to the shared surface.
    pub fn surface(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.surface)
    }

    /// Full project sequence in insertion order.
    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList<S> {
        match status {
            ProjectStatus::Active => &self.active_list,
            ProjectStatus::Finished => &self.finished_list,
        }
    }

    /// Writes the three form fields.
    pub fn fill_form(&self, title: &str, description: &str, people: &str) {
        self.input.fill(title, description, people);
    }

    /// Submits the form with whatever the fields currently hold.
    pub fn submit(&mut self) {
        self.input.submit(&mut self.store);
    }

    /// Starts a drag from the item at `index` of the given list.
    ///
    /// Returns `None` when the index is out of range.
    pub fn begin_drag(&self, status: ProjectStatus, index: usize) -> Option<DragTransfer> {
        let mut transfer = DragTransfer::new();
        if self.list(status).start_drag(index, &mut transfer) {
            Some(transfer)
        } else {
            None
        }
    }

    /// Marks the given list as the hovered drop target.
    pub fn drag_over(&self, status: ProjectStatus) {
        self.list(status).drag_over();
    }

    /// Clears the hover mark on the given list.
    pub fn drag_leave(&self, status: ProjectStatus) {
        self.list(status).drag_leave();
    }

    /// Drops a transfer onto the given list.
    pub fn drop_on(&mut self, status: ProjectStatus, transfer: &DragTransfer) {
        let Self {
            store,
            active_list,
            finished_list,
            ..
        } = self;
        let list = match status {
            ProjectStatus::Active => active_list,
            ProjectStatus::Finished => finished_list,
        };
        list.accept_drop(transfer, store);
    }
}

impl Board<InMemorySurface> {
    /// Renders the whole board as indented text.
    pub fn render_text(&self) -> String {
        self.surface.borrow().render_text(self.root)
    }

    /// Drains alerts raised since the last call.
    pub fn drain_alerts(&mut self) -> Vec<String> {
        self.surface.borrow_mut().drain_alerts()
    }
}
