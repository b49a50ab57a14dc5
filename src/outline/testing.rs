//! Test-support classifiers and renderers
//!
//! The core never owns a rank table, but nearly every test needs one, so
//! this module ships the obvious HTML-heading classifier plus a tiny body
//! layer on top of it, and a plain-text forest renderer for readable
//! assertions and snapshots.
//!
//! None of this is wired into the pipeline: production callers supply their
//! own classifiers, and rendering is a consumer of the forest like any
//! other.

use crate::outline::tree::TreeNode;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static HEADING_RANKS: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    HashMap::from([
        ("H1", 1),
        ("H2", 2),
        ("H3", 3),
        ("H4", 4),
        ("H5", 5),
        ("H6", 6),
    ])
});

static BODY_RANKS: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    HashMap::from([("P", 1), ("UL", 1), ("LI", 2)])
});

/// Rank classifier for HTML-style heading labels (H1..H6).
///
/// Unknown labels are `None`, never a defaulted rank.
pub fn heading_rank<S: AsRef<str> + ?Sized>(label: &S) -> Option<usize> {
    HEADING_RANKS.get(label.as_ref()).copied()
}

/// Rank classifier for a two-layer document: headings plus body content
/// (`P`, `UL`, `LI`).
pub fn document_rank<S: AsRef<str> + ?Sized>(label: &S) -> Option<usize> {
    let label = label.as_ref();
    heading_rank(label).or_else(|| BODY_RANKS.get(label).copied())
}

/// Layer classifier matching [document_rank]: headings are layer 0, body
/// content is layer 1.
pub fn document_layer<S: AsRef<str> + ?Sized>(label: &S) -> Option<usize> {
    let label = label.as_ref();
    if HEADING_RANKS.contains_key(label) {
        Some(0)
    } else if BODY_RANKS.contains_key(label) {
        Some(1)
    } else {
        None
    }
}

/// Render a forest as an indented listing, one node per line, two spaces per
/// depth level, `@` for placeholder nodes.
///
/// ```text
/// H1
///   H2
///     @
///       H4
/// ```
pub fn render_forest<L: fmt::Display>(forest: &[TreeNode<L>]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for root in forest {
        render_node(root, 0, &mut lines);
    }
    lines.join("\n")
}

fn render_node<L: fmt::Display>(node: &TreeNode<L>, depth: usize, lines: &mut Vec<String>) {
    let label = match node.payload() {
        Some(payload) => payload.to_string(),
        None => "@".to_string(),
    };
    lines.push(format!("{}{}", "  ".repeat(depth), label));
    for child in node.children() {
        render_node(child, depth + 1, lines);
    }
}
