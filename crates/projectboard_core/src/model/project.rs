//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by both board lists.
//! - Provide the status vocabulary used for filtering and move requests.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - Projects are created only by the store's add operation; after that only
//!   `status` changes, and only through the store's move operation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every project tracked by the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Lifecycle state deciding which list renders a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress, shown in the active list.
    Active,
    /// Completed work, shown in the finished list.
    Finished,
}

impl ProjectStatus {
    /// Returns the lowercase slug used in element ids and CLI input.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a slug back into a status. Accepts surrounding whitespace and
    /// any letter case.
    pub fn from_slug(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

/// One trackable work item with a lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for drag payloads and move requests.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned; the intake form only admits positive values.
    pub people_count: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a project with a generated stable ID and `Active` status.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people_count)
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people_count,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project belongs to the active list.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
