//! Tree nodes and forests
//!
//! A [TreeNode] owns an optional payload and an ordered list of children.
//! Payload-less nodes are the placeholders the encoder inserts across rank
//! gaps; they are structurally real (they occupy a sibling position and a
//! depth) but carry no label. Ownership runs strictly parent to child, so a
//! forest is a plain value with no interior sharing, and every view over it
//! (traversal, indexing) is read-only.

use serde::{Deserialize, Serialize};

/// An ordered sequence of root nodes.
pub type Forest<L> = Vec<TreeNode<L>>;

/// One node of an outline tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode<L> {
    payload: Option<L>,
    children: Vec<TreeNode<L>>,
}

impl<L> TreeNode<L> {
    /// Create a node from payload and children.
    pub fn new(payload: Option<L>, children: Vec<TreeNode<L>>) -> Self {
        Self { payload, children }
    }

    /// A childless node carrying a label.
    pub fn leaf(label: L) -> Self {
        Self::new(Some(label), Vec::new())
    }

    /// A childless placeholder node (no label).
    pub fn placeholder() -> Self {
        Self::new(None, Vec::new())
    }

    /// Append one child, builder style.
    pub fn with_child(mut self, child: TreeNode<L>) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, builder style.
    pub fn with_children(mut self, children: Vec<TreeNode<L>>) -> Self {
        self.children.extend(children);
        self
    }

    /// The node's label, or `None` for a placeholder.
    pub fn payload(&self) -> Option<&L> {
        self.payload.as_ref()
    }

    /// The node's children in sibling order.
    pub fn children(&self) -> &[TreeNode<L>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True when this node is a gap-filling placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.payload.is_none()
    }

    /// Total node count of the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::subtree_size)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_sibling_order() {
        let node = TreeNode::leaf("H1")
            .with_child(TreeNode::leaf("H2"))
            .with_child(TreeNode::placeholder());

        assert_eq!(node.payload(), Some(&"H1"));
        assert_eq!(node.child_count(), 2);
        assert_eq!(node.children()[0].payload(), Some(&"H2"));
        assert!(node.children()[1].is_placeholder());
    }

    #[test]
    fn test_subtree_size_counts_placeholders() {
        let node = TreeNode::leaf("H1")
            .with_child(TreeNode::placeholder().with_child(TreeNode::leaf("H3")));

        assert_eq!(node.subtree_size(), 3);
    }

    #[test]
    fn test_node_serializes_payload_and_children() {
        let node = TreeNode::leaf("H1").with_child(TreeNode::placeholder());
        let json = serde_json::to_string(&node).unwrap();

        assert_eq!(
            json,
            r#"{"payload":"H1","children":[{"payload":null,"children":[]}]}"#
        );
    }
}
