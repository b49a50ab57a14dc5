//! Depth-first traversal and outline indexing
//!
//! Two callback-driven walks over a finished forest, plus a flat event-stream
//! view. All three are pure functions of the forest: no node is mutated,
//! repeated walks produce identical sequences, and every walk is bounded by
//! node count. Side effects live entirely in the caller's callbacks, which
//! may stop a walk early by returning [Visit::Stop]; stopping is not an
//! error, the walk simply ceases further visits.

use crate::outline::tree::TreeNode;

/// Callback verdict: keep walking or cease all further visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Continue,
    Stop,
}

impl Visit {
    pub fn is_stop(self) -> bool {
        self == Visit::Stop
    }
}

/// One step of a depth-first walk, borrowed from the forest.
///
/// Every node appears exactly twice: `Enter` before any of its children,
/// `Leave` after all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent<'a, L> {
    Enter(&'a TreeNode<L>),
    Leave(&'a TreeNode<L>),
}

/// Walk the forest depth-first, entering each node before its children and
/// leaving it after them.
///
/// Returns [Visit::Stop] if either callback stopped the walk, otherwise
/// [Visit::Continue].
pub fn depth_first_traverse<L, E, V>(
    forest: &[TreeNode<L>],
    mut on_enter: E,
    mut on_leave: V,
) -> Visit
where
    E: FnMut(&TreeNode<L>) -> Visit,
    V: FnMut(&TreeNode<L>) -> Visit,
{
    for root in forest {
        if walk_node(root, &mut on_enter, &mut on_leave).is_stop() {
            return Visit::Stop;
        }
    }
    Visit::Continue
}

fn walk_node<L, E, V>(node: &TreeNode<L>, on_enter: &mut E, on_leave: &mut V) -> Visit
where
    E: FnMut(&TreeNode<L>) -> Visit,
    V: FnMut(&TreeNode<L>) -> Visit,
{
    if on_enter(node).is_stop() {
        return Visit::Stop;
    }
    for child in node.children() {
        if walk_node(child, on_enter, on_leave).is_stop() {
            return Visit::Stop;
        }
    }
    on_leave(node)
}

/// Walk the forest in pre-order, passing each node its outline index.
///
/// The outline index is the path of 1-based sibling positions from the root
/// down to the node (`[1, 2, 1]` = first root, its second child, that
/// child's first child) - the numbering behind "1.2.1" style outlines.
/// Placeholder nodes occupy sibling positions like any other node. The path
/// is maintained incrementally; the slice passed to the callback is only
/// valid for the duration of that call.
pub fn traverse_with_outline_index<L, F>(forest: &[TreeNode<L>], mut on_visit: F) -> Visit
where
    F: FnMut(&TreeNode<L>, &[usize]) -> Visit,
{
    let mut path: Vec<usize> = Vec::new();
    for (position, root) in forest.iter().enumerate() {
        path.push(position + 1);
        let verdict = walk_indexed(root, &mut path, &mut on_visit);
        path.pop();
        if verdict.is_stop() {
            return Visit::Stop;
        }
    }
    Visit::Continue
}

fn walk_indexed<L, F>(node: &TreeNode<L>, path: &mut Vec<usize>, on_visit: &mut F) -> Visit
where
    F: FnMut(&TreeNode<L>, &[usize]) -> Visit,
{
    if on_visit(node, path).is_stop() {
        return Visit::Stop;
    }
    for (position, child) in node.children().iter().enumerate() {
        path.push(position + 1);
        let verdict = walk_indexed(child, path, on_visit);
        path.pop();
        if verdict.is_stop() {
            return Visit::Stop;
        }
    }
    Visit::Continue
}

/// Flatten the forest into an enter/leave event stream.
///
/// A restartable view for consumers that prefer iterating events over
/// supplying callbacks; traversing the same forest twice yields equal
/// vectors.
pub fn forest_to_events<L>(forest: &[TreeNode<L>]) -> Vec<TraversalEvent<'_, L>> {
    let mut events = Vec::new();
    for root in forest {
        collect_events(root, &mut events);
    }
    events
}

fn collect_events<'a, L>(node: &'a TreeNode<L>, events: &mut Vec<TraversalEvent<'a, L>>) {
    events.push(TraversalEvent::Enter(node));
    for child in node.children() {
        collect_events(child, events);
    }
    events.push(TraversalEvent::Leave(node));
}
