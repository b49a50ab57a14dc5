//! Token Encoder - flattens rank comparisons into a bracketed token sequence
//!
//! # The Problem
//!
//! Flat sequences represent structure with rank levels:
//!
//! ```text
//! H1
//! H2
//! H5
//! H3
//! ```
//!
//! The tree implied by those ranks has to be recovered by tracking which
//! levels are currently "open" and closing them when an element arrives at
//! the same or a shallower rank. A rank jump (H2 straight to H5) skips
//! levels that must still exist in the tree, so the encoder opens a
//! placeholder level for every skipped rank.
//!
//! # The Solution
//!
//! [HierarchyStack] maintains a stack of open `(rank, layer)` levels and
//! emits [StructureToken]s as elements arrive. The output is always
//! well-bracketed: every `Open` gets exactly one matching `Close` at the
//! same rank and layer, pairs nest without crossing, and each element's
//! `Value` is emitted directly inside its own `Open`/`Close` pair. The
//! parser relies on this invariant.
//!
//! # Layers
//!
//! Elements can declare a layer in addition to a rank. Ranks only compete
//! within a layer; a layer L element nests under the innermost still-open
//! node of any layer below L. This lets body content (layer 1) attach to
//! the nearest preceding heading (layer 0) while heading nesting is decided
//! by heading ranks alone. An element arriving at layer M first closes
//! every open level of layers above M.

use crate::outline::classify::{rank_elements, ClassifyError, RankedElement};
use crate::outline::token::StructureToken;
use std::fmt;

/// One open level on the encoder stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenLevel {
    rank: usize,
    layer: usize,
}

/// Manages the open-level stack during encoding.
///
/// Tracks currently open `(rank, layer)` levels and emits the tokens that
/// keep the output sequence well-bracketed as elements arrive.
#[derive(Debug, Default)]
pub struct HierarchyStack {
    /// Innermost level last; layers are non-decreasing bottom to top.
    open: Vec<OpenLevel>,
}

impl HierarchyStack {
    pub fn new() -> Self {
        Self { open: Vec::new() }
    }

    /// Process one ranked element.
    ///
    /// This will:
    /// 1. Close every open level of a deeper layer, then every same-layer
    ///    level at the same or deeper rank
    /// 2. Open one placeholder level per rank skipped between the surviving
    ///    same-layer ancestor and the element's rank
    /// 3. Open the element's own level and emit its value
    ///
    /// # Arguments
    ///
    /// * `element` - The classified element to encode
    /// * `tokens` - The token vector to append to
    pub fn on_element<L>(
        &mut self,
        element: RankedElement<L>,
        tokens: &mut Vec<StructureToken<L>>,
    ) {
        let RankedElement { label, rank, layer } = element;

        // Close deeper layers entirely, then same-layer levels at rank >= incoming
        while let Some(top) = self.open.last().copied() {
            if top.layer > layer || (top.layer == layer && top.rank >= rank) {
                tokens.push(StructureToken::Close {
                    rank: top.rank,
                    layer: top.layer,
                });
                self.open.pop();
            } else {
                break;
            }
        }

        // Gap fill: one placeholder level per skipped rank under a same-layer
        // ancestor. A level that roots its layer context (empty stack, or a
        // lower-layer attachment point) opens at its own rank with no fill.
        if let Some(top) = self.open.last().copied() {
            if top.layer == layer {
                for missing in top.rank + 1..rank {
                    tokens.push(StructureToken::Open {
                        rank: missing,
                        layer,
                    });
                    tokens.push(StructureToken::DummyValue {
                        rank: missing,
                        layer,
                    });
                    self.open.push(OpenLevel {
                        rank: missing,
                        layer,
                    });
                }
            }
        }

        tokens.push(StructureToken::Open { rank, layer });
        tokens.push(StructureToken::Value { label, rank, layer });
        self.open.push(OpenLevel { rank, layer });
    }

    /// Close all remaining open levels, innermost first.
    ///
    /// Call this at end of input so every emitted `Open` is matched.
    pub fn close_all<L>(&mut self, tokens: &mut Vec<StructureToken<L>>) {
        while let Some(level) = self.open.pop() {
            tokens.push(StructureToken::Close {
                rank: level.rank,
                layer: level.layer,
            });
        }
    }

    /// The number of currently open levels.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn has_open_levels(&self) -> bool {
        !self.open.is_empty()
    }
}

/// Encode an already-classified sequence into tokens.
///
/// Infallible: classification failures are caught before this stage.
pub fn tokens_from_ranked<L>(elements: Vec<RankedElement<L>>) -> Vec<StructureToken<L>> {
    let mut stack = HierarchyStack::new();
    let mut tokens = Vec::with_capacity(elements.len() * 3);

    for element in elements {
        stack.on_element(element, &mut tokens);
    }
    stack.close_all(&mut tokens);

    tokens
}

/// Encode a label sequence using a rank function; every label is layer 0.
pub fn build_tokens<L, R>(
    labels: Vec<L>,
    rank_of: R,
) -> Result<Vec<StructureToken<L>>, ClassifyError>
where
    L: fmt::Debug,
    R: Fn(&L) -> Option<usize>,
{
    let ranked = rank_elements(labels, rank_of, |_| Some(0))?;
    Ok(tokens_from_ranked(ranked))
}

/// Encode a label sequence using rank and layer functions.
pub fn build_tokens_layered<L, R, Y>(
    labels: Vec<L>,
    rank_of: R,
    layer_of: Y,
) -> Result<Vec<StructureToken<L>>, ClassifyError>
where
    L: fmt::Debug,
    R: Fn(&L) -> Option<usize>,
    Y: Fn(&L) -> Option<usize>,
{
    let ranked = rank_elements(labels, rank_of, layer_of)?;
    Ok(tokens_from_ranked(ranked))
}
