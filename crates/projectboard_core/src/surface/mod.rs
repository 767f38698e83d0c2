//! Rendering-surface boundary.
//!
//! # Responsibility
//! - Define the host rendering operations the board components consume.
//! - Keep components independent of any concrete rendering technology.
//!
//! # Invariants
//! - `NodeId` handles are only meaningful on the surface that issued them.
//! - Replacing inner markup discards previously appended children.

pub mod drag;
mod memory;

pub use memory::InMemorySurface;

/// Opaque element handle issued by a rendering surface.
pub type NodeId = usize;

/// Host rendering collaborator.
///
/// The surface owns element lifetime; components only hold `NodeId` handles
/// and describe what to render.
pub trait RenderSurface {
    /// Creates a detached element of the given tag and returns its handle.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Sets or replaces one attribute on an element.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Appends `child` under `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Replaces the node's rendered markup, discarding existing children.
    fn set_inner_markup(&mut self, node: NodeId, markup: &str);

    /// Detaches all children of a node.
    fn clear_children(&mut self, node: NodeId);

    /// Reads the text value of a field element. Non-field nodes read as empty.
    fn field_value(&self, node: NodeId) -> String;

    /// Writes the text value of a field element.
    fn set_field_value(&mut self, node: NodeId, value: &str);

    /// Adds one class to an element's class set.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Removes one class from an element's class set.
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Blocking user notification, used for validation failures.
    fn alert(&mut self, message: &str);
}
