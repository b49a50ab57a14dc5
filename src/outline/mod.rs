//! Outline construction pipeline
//!
//! This module turns a flat, ordered sequence of labeled elements into a
//! forest of trees. Nesting is never written down by the caller; it is
//! implied by a numeric rank attached to every label (H1 contains H2, H2
//! contains H3, and so on), optionally partitioned into layers so that body
//! content can hang off the nearest heading without disturbing the heading
//! hierarchy itself.
//!
//! The pipeline has three externally invocable stages:
//!
//! 1. [encoding] — flatten rank comparisons into a well-bracketed sequence of
//!    [StructureToken]s, inserting placeholder levels across rank gaps.
//! 2. [parsing] — bracket-match the token sequence into a [Forest] of
//!    [TreeNode]s.
//! 3. [traversal] — depth-first enter/leave walks and outline-index
//!    numbering over the finished forest.
//!
//! Stages 1 and 2 are composed by [build_forest] / [build_forest_layered]
//! for callers that do not need to inspect the token stream.

pub mod classify;
pub mod encoding;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod traversal;
pub mod tree;

pub use classify::{rank_elements, ClassifyError, RankedElement};
pub use encoding::{build_tokens, build_tokens_layered, tokens_from_ranked, HierarchyStack};
pub use parsing::{parse_tokens, ParseError};
pub use token::StructureToken;
pub use traversal::{
    depth_first_traverse, forest_to_events, traverse_with_outline_index, TraversalEvent, Visit,
};
pub use tree::{Forest, TreeNode};

use std::fmt;

/// Error returned by the composed construction entry points.
///
/// Wraps the failure of whichever stage rejected the input: classification
/// (an unknown or invalid label) or parsing (a malformed token sequence).
/// The encoder itself cannot fail once every element is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    Classify(ClassifyError),
    Parse(ParseError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Classify(err) => write!(f, "{}", err),
            BuildError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Classify(err) => Some(err),
            BuildError::Parse(err) => Some(err),
        }
    }
}

impl From<ClassifyError> for BuildError {
    fn from(err: ClassifyError) -> Self {
        BuildError::Classify(err)
    }
}

impl From<ParseError> for BuildError {
    fn from(err: ParseError) -> Self {
        BuildError::Parse(err)
    }
}

/// Build a forest directly from labels and a rank function.
///
/// Composes [build_tokens] and [parse_tokens]. Every label lives in layer 0.
///
/// # Example
///
/// ```
/// use outline_core::outline::{build_forest, testing::heading_rank};
///
/// let forest = build_forest(vec!["H1", "H2", "H1"], heading_rank).unwrap();
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest[0].child_count(), 1);
/// ```
pub fn build_forest<L, R>(labels: Vec<L>, rank_of: R) -> Result<Forest<L>, BuildError>
where
    L: fmt::Debug,
    R: Fn(&L) -> Option<usize>,
{
    let tokens = build_tokens(labels, rank_of)?;
    let forest = parse_tokens(tokens)?;
    Ok(forest)
}

/// Build a forest from labels, a rank function, and a layer function.
///
/// Elements of a higher layer nest under the innermost still-open node of
/// any lower layer, so body content (layer 1) attaches to the nearest
/// preceding heading (layer 0) without perturbing heading nesting.
pub fn build_forest_layered<L, R, Y>(
    labels: Vec<L>,
    rank_of: R,
    layer_of: Y,
) -> Result<Forest<L>, BuildError>
where
    L: fmt::Debug,
    R: Fn(&L) -> Option<usize>,
    Y: Fn(&L) -> Option<usize>,
{
    let tokens = build_tokens_layered(labels, rank_of, layer_of)?;
    let forest = parse_tokens(tokens)?;
    Ok(forest)
}
