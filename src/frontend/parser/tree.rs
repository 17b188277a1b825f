//! Expression tree
//!
//! An ordered, rooted tree stored in an arena. Nodes refer to each other by
//! [`NodeId`]; a node's children list is the owning edge and `parent` is a
//! plain back-reference used for upward navigation while parsing.
//!
//! Nodes detached by [`ExpressionTree::remove_child`] stay in the arena but
//! are unreachable from the root.

use indexmap::IndexMap;
use serde_json::{json, Value};
use std::fmt;

/// Index of a node inside its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the inner arena index.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Synthetic entry point, exactly one per tree
    Root,
    Number,
    Symbol,
    /// Binary operator or function call
    Operation,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Number => "number",
            NodeKind::Symbol => "symbol",
            NodeKind::Operation => "operation",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the expression tree
#[derive(Debug, Clone)]
pub struct ExpressionNode {
    kind: NodeKind,
    text: String,
    attributes: IndexMap<String, String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl ExpressionNode {
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Literal text, symbol name, operator or function name
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn attribute(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }
}

/// Rooted, ordered expression tree
#[derive(Debug, Clone)]
pub struct ExpressionTree {
    nodes: Vec<ExpressionNode>,
    root: NodeId,
}

impl ExpressionTree {
    /// Create a tree holding only its root
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.create_node(NodeKind::Root, "");
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a detached node
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        text: impl Into<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ExpressionNode {
            kind,
            text: text.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            parent: None,
        });
        id
    }

    /// Panics if `id` was not created by this tree.
    pub fn node(
        &self,
        id: NodeId,
    ) -> &ExpressionNode {
        &self.nodes[id.0]
    }

    pub fn get(
        &self,
        id: NodeId,
    ) -> Option<&ExpressionNode> {
        self.nodes.get(id.0)
    }

    pub fn kind(
        &self,
        id: NodeId,
    ) -> NodeKind {
        self.node(id).kind
    }

    pub fn parent(
        &self,
        id: NodeId,
    ) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(
        &self,
        id: NodeId,
    ) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn last_child(
        &self,
        id: NodeId,
    ) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// Nodes reachable from the root, root included
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            count += 1;
            pending.extend_from_slice(self.children(id));
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.children(self.root).is_empty()
    }

    /// True if `ancestor` lies on the path from `node` up to the root
    pub fn is_ancestor(
        &self,
        ancestor: NodeId,
        node: NodeId,
    ) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
    ) {
        self.adopt(parent, child);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `child` as the first child of `parent`, detaching it first
    pub fn prepend_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
    ) {
        self.adopt(parent, child);
        self.nodes[parent.0].children.insert(0, child);
    }

    /// Detach `child` from `parent`; returns false if it was not a child
    pub fn remove_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
    ) -> bool {
        let children = &mut self.nodes[parent.0].children;
        match children.iter().position(|&c| c == child) {
            Some(position) => {
                children.remove(position);
                self.nodes[child.0].parent = None;
                true
            }
            None => false,
        }
    }

    /// Put `new_parent` where `node` is and make `node` its last child.
    ///
    /// Does nothing if `node` has no parent (the root cannot be displaced).
    pub fn insert_above(
        &mut self,
        node: NodeId,
        new_parent: NodeId,
    ) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(old) = self.parent(new_parent) {
            self.remove_child(old, new_parent);
        }
        let Some(position) = self.children(parent).iter().position(|&c| c == node) else {
            return;
        };
        self.nodes[parent.0].children[position] = new_parent;
        self.nodes[new_parent.0].parent = Some(parent);
        self.nodes[node.0].parent = None;
        self.append_child(new_parent, node);
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.nodes[id.0].attributes.insert(key.into(), value.into());
    }

    pub fn attribute(
        &self,
        id: NodeId,
        key: &str,
    ) -> Option<&str> {
        self.node(id).attribute(key)
    }

    pub fn remove_attribute(
        &mut self,
        id: NodeId,
        key: &str,
    ) -> Option<String> {
        self.nodes[id.0].attributes.shift_remove(key)
    }

    /// Reachable nodes in pre-order, root first
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            order.push(id);
            pending.extend(self.children(id).iter().rev());
        }
        order
    }

    /// JSON rendering of the reachable tree as a flat node list.
    ///
    /// Children are referenced by arena index, so arbitrarily deep trees
    /// serialize without nesting.
    pub fn to_json(&self) -> Value {
        let nodes: Vec<Value> = self
            .preorder()
            .into_iter()
            .map(|id| {
                let node = self.node(id);
                json!({
                    "id": id.index(),
                    "kind": node.kind.name(),
                    "str": node.text,
                    "attributes": node.attributes,
                    "parent": node.parent.map(|parent| parent.index()),
                    "children": node.children.iter().map(|child| child.index()).collect::<Vec<_>>(),
                })
            })
            .collect();
        json!({
            "root": self.root.index(),
            "nodes": nodes,
        })
    }

    fn adopt(
        &mut self,
        parent: NodeId,
        child: NodeId,
    ) {
        debug_assert!(
            parent != child && !self.is_ancestor(child, parent),
            "adopting {} under {} would create a cycle",
            child,
            parent
        );
        if let Some(old) = self.parent(child) {
            self.remove_child(old, child);
        }
        self.nodes[child.0].parent = Some(parent);
    }

    fn write_open(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        depth: usize,
    ) -> fmt::Result {
        let node = self.node(id);
        write!(f, "{}<{}", "   ".repeat(depth), node.kind.name())?;
        if !node.text.is_empty() {
            write!(f, " str=\"{}\"", node.text)?;
        }
        for (key, value) in &node.attributes {
            if value.is_empty() {
                write!(f, " {}", key)?;
            } else {
                write!(f, " {}=\"{}\"", key, value)?;
            }
        }
        if node.children.is_empty() {
            write!(f, " />")
        } else {
            writeln!(f, ">")
        }
    }
}

/// Pending outline output
#[derive(Debug, Clone, Copy)]
enum Outline {
    Open(NodeId, usize),
    Newline,
    Close(NodeId, usize),
}

impl Default for ExpressionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut pending = vec![Outline::Open(self.root, 0)];
        while let Some(step) = pending.pop() {
            match step {
                Outline::Open(id, depth) => {
                    self.write_open(f, id, depth)?;
                    let children = self.children(id);
                    if !children.is_empty() {
                        pending.push(Outline::Close(id, depth));
                        for &child in children.iter().rev() {
                            pending.push(Outline::Newline);
                            pending.push(Outline::Open(child, depth + 1));
                        }
                    }
                }
                Outline::Newline => writeln!(f)?,
                Outline::Close(id, depth) => {
                    write!(f, "{}</{}>", "   ".repeat(depth), self.kind(id).name())?
                }
            }
        }
        Ok(())
    }
}
