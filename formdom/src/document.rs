//! Live document tree.
//!
//! Nodes are stored in an arena and addressed by [`NodeId`]. Handles are never
//! invalidated; detaching a node only unlinks it from its parent. Every query
//! is total: an unknown handle reads as an empty, parentless node.

use std::collections::BTreeMap;

use crate::element::{is_control_tag, Element};
use crate::validity::{self, ValidityState};

/// Handle to a node owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) tag: String,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) text: String,
    pub(crate) value: String,
    pub(crate) checked: bool,
    pub(crate) custom_validity: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Lowercased `type` attribute of an `<input>`, defaulting to `text`.
    pub(crate) fn input_type(&self) -> Option<String> {
        (self.tag == "input").then(|| {
            self.attr("type")
                .map(str::to_ascii_lowercase)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "text".to_string())
        })
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".to_string(),
                ..Default::default()
            }],
            root: NodeId(0),
        }
    }

    /// Build a document with `element` mounted under the root.
    pub fn from_element(element: Element) -> (Self, NodeId) {
        let mut doc = Self::new();
        let id = doc.mount(element);
        (doc, id)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    // Building

    /// Append `element` (and its subtree) under the root.
    pub fn mount(&mut self, element: Element) -> NodeId {
        let id = self.create(element);
        self.append_child(self.root, id);
        id
    }

    /// Materialize `element` as a detached subtree.
    pub fn create(&mut self, element: Element) -> NodeId {
        let Element {
            tag,
            attributes,
            text,
            value,
            checked,
            children,
        } = element;

        let value = value
            .or_else(|| attributes.get("value").cloned())
            .or_else(|| (tag == "textarea").then(|| text.clone().unwrap_or_default()))
            .unwrap_or_default();
        let checked = checked || attributes.contains_key("checked");

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag,
            attributes,
            text: text.unwrap_or_default(),
            value,
            checked,
            ..Default::default()
        });

        for child in children {
            let child_id = self.create(child);
            self.append_child(id, child_id);
        }

        if self.tag(id) == "select" && self.nodes[id.0].value.is_empty() {
            let selected = self.select_default_value(id);
            self.nodes[id.0].value = selected;
        }

        id
    }

    /// A `<select>` without an explicit value takes the `selected` option,
    /// else its first option.
    fn select_default_value(&self, select: NodeId) -> String {
        let options: Vec<NodeId> = self
            .descendants(select)
            .into_iter()
            .filter(|&n| self.tag(n) == "option")
            .collect();
        options
            .iter()
            .find(|&&n| self.has_attribute(n, "selected"))
            .or_else(|| options.first())
            .map(|&n| self.option_value(n))
            .unwrap_or_default()
    }

    fn option_value(&self, option: NodeId) -> String {
        self.attribute(option, "value")
            .map(str::to_string)
            .unwrap_or_else(|| self.text_content(option))
    }

    /// Move `child` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        if self.ancestors(parent).contains(&child) {
            log::debug!("refusing to append {child} under its own descendant {parent}");
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Unlink `node` from its parent. The subtree stays intact.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return;
        };
        self.nodes[parent.0].children.retain(|&c| c != node);
        self.nodes[node.0].parent = None;
    }

    // Traversal

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Ancestors from the parent upward.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(node);
        while let Some(id) = current {
            out.push(id);
            current = self.parent(id);
        }
        out
    }

    /// Returns true if `node` is reachable from the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        node == self.root || self.ancestors(node).last() == Some(&self.root)
    }

    pub fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|&s| s == node)?;
        siblings.get(pos + 1).copied()
    }

    /// All descendants of `node` in document (pre-)order, excluding `node`.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// Nearest inclusive ancestor with the given tag.
    pub fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.node(node)?;
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|&n| self.tag(n) == tag)
    }

    /// Descendants of `root` matching `pred`, in document order.
    pub fn query_all(&self, root: NodeId, pred: impl Fn(&Self, NodeId) -> bool) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&n| pred(self, n))
            .collect()
    }

    pub fn query_first(
        &self,
        root: NodeId,
        pred: impl Fn(&Self, NodeId) -> bool,
    ) -> Option<NodeId> {
        self.descendants(root).into_iter().find(|&n| pred(self, n))
    }

    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_first(self.root, |doc, n| doc.attribute(n, "id") == Some(id))
    }

    pub fn first_form(&self) -> Option<NodeId> {
        self.query_first(self.root, |doc, n| doc.tag(n) == "form")
    }

    /// The form owning `node`: its nearest `<form>` ancestor.
    pub fn form_of(&self, node: NodeId) -> Option<NodeId> {
        self.ancestors(node)
            .into_iter()
            .find(|&n| self.tag(n) == "form")
    }

    // Controls

    pub fn is_control(&self, node: NodeId) -> bool {
        is_control_tag(self.tag(node))
    }

    /// All input/select/textarea descendants of `form`, in document order.
    pub fn form_controls(&self, form: NodeId) -> Vec<NodeId> {
        self.query_all(form, |doc, n| doc.is_control(n))
    }

    /// Lowercased input type, `None` for non-inputs.
    pub fn input_type(&self, node: NodeId) -> Option<String> {
        self.node(node).and_then(Node::input_type)
    }

    // Attributes and content

    pub fn tag(&self, node: NodeId) -> &str {
        self.node(node).map(|n| n.tag.as_str()).unwrap_or("")
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).and_then(|n| n.attr(name))
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(n) = self.node_mut(node) {
            n.attributes.insert(name.to_ascii_lowercase(), value.into());
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(n) = self.node_mut(node) {
            n.attributes.remove(name);
        }
    }

    /// Add or remove a boolean attribute. Without `force` the attribute flips.
    /// Returns whether the attribute is present afterwards.
    pub fn toggle_attribute(&mut self, node: NodeId, name: &str, force: Option<bool>) -> bool {
        if self.node(node).is_none() {
            return false;
        }
        let present = force.unwrap_or(!self.has_attribute(node, name));
        if present {
            if !self.has_attribute(node, name) {
                self.set_attribute(node, name, "");
            }
        } else {
            self.remove_attribute(node, name);
        }
        present
    }

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let Some(n) = self.node(node) else {
            return String::new();
        };
        let mut out = n.text.clone();
        for &child in &n.children {
            out.push_str(&self.text_content(child));
        }
        out
    }

    /// Replace the text of `node`, dropping its children.
    pub fn set_text_content(&mut self, node: NodeId, text: impl Into<String>) {
        if self.node(node).is_none() {
            return;
        }
        for child in self.children(node).to_vec() {
            self.detach(child);
        }
        self.nodes[node.0].text = text.into();
    }

    pub fn value(&self, node: NodeId) -> &str {
        self.node(node).map(|n| n.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        if let Some(n) = self.node_mut(node) {
            n.value = value.into();
        }
    }

    pub fn checked(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.checked)
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if let Some(n) = self.node_mut(node) {
            n.checked = checked;
        }
    }

    // Constraint validation

    /// Install a custom validity message. An empty message clears it.
    pub fn set_custom_validity(&mut self, node: NodeId, message: impl Into<String>) {
        if let Some(n) = self.node_mut(node) {
            n.custom_validity = message.into();
        }
    }

    pub fn validity(&self, node: NodeId) -> ValidityState {
        validity::compute(self, node)
    }

    pub fn check_validity(&self, node: NodeId) -> bool {
        let valid = self.validity(node).valid();
        if !valid {
            log::trace!("{node} failed constraint validation");
        }
        valid
    }

    /// The message a browser would show for `node`; empty when valid.
    pub fn validation_message(&self, node: NodeId) -> String {
        let state = self.validity(node);
        if state.custom_error {
            return self
                .node(node)
                .map(|n| n.custom_validity.clone())
                .unwrap_or_default();
        }
        state.native_message().to_string()
    }
}
