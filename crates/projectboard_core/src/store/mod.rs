//! Observable state layer.
//!
//! # Responsibility
//! - Own the authoritative project sequence and its subscriber list.
//! - Keep components decoupled from each other through notifications.

pub mod project_store;
