//! Board UI components.
//!
//! # Responsibility
//! - Translate surface events (submit, drag gestures) into store operations.
//! - Render store notifications back onto the surface.
//!
//! # Invariants
//! - Components never hold surface element state beyond `NodeId` handles.
//! - Store mutation and re-rendering stay inside one event-handler call.

pub mod project_input;
pub mod project_item;
pub mod project_list;

pub use project_input::{ProjectInput, INVALID_INPUT_MESSAGE};
pub use project_item::{person_label, ProjectItem};
pub use project_list::ProjectList;
