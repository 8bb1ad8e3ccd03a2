//! Arena-backed feature forest
//!
//! All nodes live in one arena owned by the [`Forest`]; parent/child
//! relations are integer indices into it, so re-linking a node is an O(1)
//! index rewrite with no dangling-reference risk. Node handles are only
//! meaningful for the forest that produced them.

use crate::core::Feature;

/// Handle to a node in a [`Forest`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) feature: Feature,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A forest of feature trees produced by
/// [`build_forest`](crate::tree::build_forest).
///
/// Top-level roots are kept as a flat list rather than under a synthetic
/// root node; [`Forest::walk`] covers every tree in turn.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    /// Allocate a new unlinked node wrapping the feature
    pub(crate) fn push(&mut self, feature: Feature) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            feature,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Link `child` under `parent`.
    ///
    /// A node is never a child of two nodes at once: if the child already
    /// has a parent it is removed from that parent's child list first.
    pub(crate) fn attach(&mut self, child: NodeId, parent: NodeId) {
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub(crate) fn set_roots(&mut self, roots: Vec<NodeId>) {
        self.roots = roots;
    }

    /// Number of nodes in the forest. A multi-parent record contributes
    /// one node per parent edge.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level roots in input order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The feature a node wraps
    pub fn feature(&self, id: NodeId) -> &Feature {
        &self.nodes[id.0].feature
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children of a node, in the order their records appeared
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Depth-first pre-order traversal over every tree in the forest.
    ///
    /// Lazy, finite, and restartable: each call returns a fresh iterator
    /// over the same built structure.
    pub fn walk(&self) -> Walk<'_> {
        let mut stack: Vec<NodeId> = self.roots.clone();
        stack.reverse();
        Walk {
            forest: self,
            stack,
        }
    }

    /// Depth-first pre-order traversal of a single subtree
    pub fn walk_from(&self, id: NodeId) -> Walk<'_> {
        Walk {
            forest: self,
            stack: vec![id],
        }
    }
}

/// Depth-first pre-order iterator over a [`Forest`]
pub struct Walk<'a> {
    forest: &'a Forest,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = &self.forest.nodes[id.0].children;
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}
