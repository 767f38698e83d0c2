//! Drag transfer channel.
//!
//! # Responsibility
//! - Carry a typed string payload between a drag source and a drop target.
//! - Record the effect the drag source allows on its payload.
//!
//! # Invariants
//! - Payload entries keep insertion order; the first entry's kind decides
//!   whether a drop target accepts the transfer.

/// Payload kind marker for plain-text transfers.
pub const TEXT_PLAIN: &str = "text/plain";

/// Effect a drag source allows on its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    /// The payload is moved to the drop target, not copied.
    Move,
}

/// In-flight drag payload, written at drag start and read on drop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragTransfer {
    entries: Vec<(String, String)>,
    allowed_effect: Option<DragEffect>,
}

impl DragTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one typed payload entry.
    pub fn set_data(&mut self, kind: impl Into<String>, data: impl Into<String>) {
        self.entries.push((kind.into(), data.into()));
    }

    /// Returns the kind of the first payload entry, if any.
    pub fn first_kind(&self) -> Option<&str> {
        self.entries.first().map(|(kind, _)| kind.as_str())
    }

    /// Returns the data of the first entry with the given kind.
    pub fn data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_kind, _)| entry_kind == kind)
            .map(|(_, data)| data.as_str())
    }

    /// Declares the effect the drag source allows.
    pub fn allow_effect(&mut self, effect: DragEffect) {
        self.allowed_effect = Some(effect);
    }

    pub fn allowed_effect(&self) -> Option<DragEffect> {
        self.allowed_effect
    }
}

#[cfg(test)]
mod tests {
    use super::{DragEffect, DragTransfer, TEXT_PLAIN};

    #[test]
    fn first_kind_follows_insertion_order() {
        let mut transfer = DragTransfer::new();
        assert_eq!(transfer.first_kind(), None);

        transfer.set_data("application/json", "{}");
        transfer.set_data(TEXT_PLAIN, "some-id");

        assert_eq!(transfer.first_kind(), Some("application/json"));
        assert_eq!(transfer.data(TEXT_PLAIN), Some("some-id"));
        assert_eq!(transfer.data("text/html"), None);
    }

    #[test]
    fn allowed_effect_is_recorded() {
        let mut transfer = DragTransfer::new();
        assert_eq!(transfer.allowed_effect(), None);

        transfer.allow_effect(DragEffect::Move);
        assert_eq!(transfer.allowed_effect(), Some(DragEffect::Move));
    }
}
