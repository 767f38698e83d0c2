//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the canonical project record shared by store and components.
//! - Keep one status vocabulary for list filtering and drop targets.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - `status` is the only field mutated after construction.

pub mod project;
