//! Observable project store.
//!
//! # Responsibility
//! - Own the single ordered sequence of projects.
//! - Broadcast the full sequence to subscribers after every mutation.
//!
//! # Invariants
//! - At most one project per id; lookup is a linear scan in insertion order.
//! - Notification order equals subscription order.
//! - Subscribers must not mutate the store during a notification.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};

/// Callback receiving the full project sequence after every mutation.
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Single authoritative holder of all projects plus its subscriber list.
///
/// One instance is constructed per running board and passed by reference to
/// the components that need it; there is no hidden global.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked with the full sequence on every future
    /// mutation.
    ///
    /// There is no initial replay and no unsubscribe; a listener stays
    /// registered for the store lifetime.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Appends a new `Active` project and notifies all subscribers.
    ///
    /// Returns the generated project id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people_count);
        let id = project.id;
        self.projects.push(project);
        info!(
            "event=project_added module=store status=ok id={id} people={people_count} total={}",
            self.projects.len()
        );
        self.notify();
        id
    }

    /// Moves the first project with a matching id to `new_status`.
    ///
    /// Silent no-op when the id is unknown or the status already matches;
    /// subscribers are notified only when a field actually changed.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        let changed = match self.projects.iter_mut().find(|project| project.id == id) {
            Some(project) if project.status != new_status => {
                project.status = new_status;
                true
            }
            Some(_) => {
                debug!("event=project_move_noop module=store status=ok id={id} reason=same_status");
                false
            }
            None => {
                debug!("event=project_move_noop module=store status=ok id={id} reason=not_found");
                false
            }
        };

        if changed {
            info!(
                "event=project_moved module=store status=ok id={id} new_status={}",
                new_status.slug()
            );
            self.notify();
        }
    }

    /// Returns the full sequence in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.projects);
        }
    }
}
