#![forbid(unsafe_code)]

//! Arena-backed element tree with layout metrics.
//!
//! Nodes are never removed, so a [`NodeId`] stays valid for the lifetime of
//! the document. Layout is not computed: each element carries the
//! `offsetTop`/`offsetHeight` the test assigns to it.

use std::collections::BTreeMap;

use crate::selector::{AttrCondition, Combinator, Compound, Part, SelectorList};

/// Index of an element in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub text: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            text: String::new(),
            parent,
            children: Vec::new(),
            offset_top: 0.0,
            offset_height: 0.0,
        }
    }
}

/// The element tree. The root is a `<body>` element.
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body", None)],
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new `tag` element as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let node = self.node(id);
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attrs.get(name).cloned()
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let node = self.node_mut(id);
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_owned).collect();
        } else {
            node.attrs.insert(name.to_string(), value.to_string());
        }
    }

    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            self.node_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    /// Elements in document (pre-)order, root excluded.
    fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(from).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    /// All elements matching `selectors`, in document order.
    #[must_use]
    pub fn select_all(&self, selectors: &SelectorList) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.matches(id, selectors))
            .collect()
    }

    /// First element with `id` attribute equal to `value`.
    #[must_use]
    pub fn find_by_id(&self, value: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&id| self.node(id).attrs.get("id").is_some_and(|v| v == value))
    }

    /// Nearest inclusive ancestor matching `selectors`.
    #[must_use]
    pub fn closest(&self, id: NodeId, selectors: &SelectorList) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if self.matches(current, selectors) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    /// Path from `id` up to the root, target first.
    #[must_use]
    pub fn ancestry(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut cursor = self.parent(id);
        while let Some(node) = cursor {
            path.push(node);
            cursor = self.parent(node);
        }
        path
    }

    #[must_use]
    pub fn matches(&self, id: NodeId, selectors: &SelectorList) -> bool {
        selectors.0.iter().any(|chain| self.matches_chain(id, chain))
    }

    fn matches_chain(&self, id: NodeId, chain: &[Part]) -> bool {
        let Some((last, rest)) = chain.split_last() else {
            return false;
        };
        if !self.matches_compound(id, &last.compound) {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        match last.combinator.unwrap_or(Combinator::Descendant) {
            Combinator::Child => self
                .parent(id)
                .is_some_and(|parent| self.matches_chain(parent, rest)),
            Combinator::Descendant => {
                let mut cursor = self.parent(id);
                while let Some(ancestor) = cursor {
                    if self.matches_chain(ancestor, rest) {
                        return true;
                    }
                    cursor = self.parent(ancestor);
                }
                false
            }
        }
    }

    fn matches_compound(&self, id: NodeId, compound: &Compound) -> bool {
        let node = self.node(id);
        if compound.tag.as_ref().is_some_and(|tag| *tag != node.tag) {
            return false;
        }
        if compound
            .id
            .as_ref()
            .is_some_and(|want| node.attrs.get("id") != Some(want))
        {
            return false;
        }
        if !compound.classes.iter().all(|c| self.has_class(id, c)) {
            return false;
        }
        compound.attrs.iter().all(|cond| match cond {
            AttrCondition::Present(name) => self.attribute(id, name).is_some(),
            AttrCondition::Equals(name, value) => {
                self.attribute(id, name).as_deref() == Some(value.as_str())
            }
        })
    }
}
