//! In-memory rendering surface.
//!
//! # Responsibility
//! - Implement the rendering contract with a plain element tree.
//! - Record alerts so a host shell can surface them after each event.
//! - Render a subtree as indented text for terminal display.
//!
//! # Invariants
//! - Handles index into the node arena and stay valid for the surface
//!   lifetime; detached nodes are kept, not freed.
//! - A node has at most one parent; appending re-parents it.

use crate::surface::{NodeId, RenderSurface};
use std::collections::BTreeSet;

#[derive(Debug, Default)]
struct ElementNode {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: BTreeSet<String>,
    children: Vec<NodeId>,
    inner_markup: Option<String>,
    field_value: String,
}

/// Element-tree surface used by the CLI shell and the test suites.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    nodes: Vec<ElementNode>,
    alerts: Vec<String>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains alerts recorded since the last call, oldest first.
    pub fn drain_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node].tag
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node]
            .attributes
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node].classes.contains(class)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    pub fn inner_markup(&self, node: NodeId) -> Option<&str> {
        self.nodes[node].inner_markup.as_deref()
    }

    /// Renders one subtree as indented text.
    pub fn render_text(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.render_into(node, 0, &mut out);
        out
    }

    fn render_into(&self, node: NodeId, depth: usize, out: &mut String) {
        let element = &self.nodes[node];
        let indent = "  ".repeat(depth);

        out.push_str(&indent);
        out.push('<');
        out.push_str(&element.tag);
        for (name, value) in &element.attributes {
            out.push_str(&format!(" {name}=\"{value}\""));
        }
        if !element.classes.is_empty() {
            let classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
            out.push_str(&format!(" class=\"{}\"", classes.join(" ")));
        }
        if !element.field_value.is_empty() {
            out.push_str(&format!(" value=\"{}\"", element.field_value));
        }
        out.push_str(">\n");

        if let Some(markup) = &element.inner_markup {
            for line in markup.lines() {
                out.push_str(&indent);
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        for child in &element.children {
            self.render_into(*child, depth + 1, out);
        }
    }

    fn detach(&mut self, child: NodeId) {
        for node in &mut self.nodes {
            node.children.retain(|existing| *existing != child);
        }
    }
}

impl RenderSurface for InMemorySurface {
    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(ElementNode {
            tag: tag.to_string(),
            ..ElementNode::default()
        });
        self.nodes.len() - 1
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let attributes = &mut self.nodes[node].attributes;
        match attributes.iter_mut().find(|(attr_name, _)| attr_name == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[parent].children.push(child);
    }

    fn set_inner_markup(&mut self, node: NodeId, markup: &str) {
        let element = &mut self.nodes[node];
        element.children.clear();
        element.inner_markup = Some(markup.to_string());
    }

    fn clear_children(&mut self, node: NodeId) {
        self.nodes[node].children.clear();
    }

    fn field_value(&self, node: NodeId) -> String {
        self.nodes[node].field_value.clone()
    }

    fn set_field_value(&mut self, node: NodeId, value: &str) {
        self.nodes[node].field_value = value.to_string();
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node].classes.insert(class.to_string());
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node].classes.remove(class);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
