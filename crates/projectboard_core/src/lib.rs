//! Core board logic for the project tracker.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod component;
pub mod logging;
pub mod model;
pub mod store;
pub mod surface;
pub mod validation;

pub use board::Board;
pub use component::{person_label, ProjectInput, ProjectItem, ProjectList, INVALID_INPUT_MESSAGE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use store::project_store::{Listener, ProjectStore};
pub use surface::drag::{DragEffect, DragTransfer, TEXT_PLAIN};
pub use surface::{InMemorySurface, NodeId, RenderSurface};
pub use validation::{parse_people, validate, FieldValue, InputPolicy, Validatable};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
