//! Single draggable project row.
//!
//! # Responsibility
//! - Render one project's markup under a list element.
//! - Emit the project id as a plain-text drag payload on drag start.
//!
//! # Invariants
//! - Rows are rebuilt from project data on every list render, never patched
//!   in place.

use crate::model::project::Project;
use crate::surface::drag::{DragEffect, DragTransfer, TEXT_PLAIN};
use crate::surface::{NodeId, RenderSurface};
use log::debug;

/// Returns the assigned-people label with singular/plural handling.
pub fn person_label(people_count: u32) -> String {
    if people_count == 1 {
        "1 Person".to_string()
    } else {
        format!("{people_count} Persons")
    }
}

/// One draggable project row mounted on a rendering surface.
#[derive(Debug)]
pub struct ProjectItem {
    project: Project,
    node: NodeId,
}

impl ProjectItem {
    /// Mounts a new row under `parent` and renders its content.
    pub fn mount<S: RenderSurface>(surface: &mut S, parent: NodeId, project: Project) -> Self {
        let node = surface.create_element("li");
        surface.set_attribute(node, "draggable", "true");
        surface.set_inner_markup(node, &render_markup(&project));
        surface.append_child(parent, node);
        Self { project, node }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Writes this project's id into the transfer and allows a move effect.
    pub fn drag_start(&self, transfer: &mut DragTransfer) {
        transfer.set_data(TEXT_PLAIN, self.project.id.to_string());
        transfer.allow_effect(DragEffect::Move);
        debug!(
            "event=drag_start module=component status=ok id={}",
            self.project.id
        );
    }

    /// Informational only; the move itself happens on the drop-target side.
    pub fn drag_end(&self) {
        debug!(
            "event=drag_end module=component status=ok id={}",
            self.project.id
        );
    }
}

fn render_markup(project: &Project) -> String {
    format!(
        "<h3>{}</h3>\n<div><strong>{} Assigned</strong></div>\n<div>{}</div>",
        project.title,
        person_label(project.people_count),
        project.description
    )
}
