//! Classification of labels into ranked elements
//!
//! The core never hard-codes a rank table. Callers inject a rank function
//! (`label -> rank`) and optionally a layer function (`label -> layer`);
//! this module applies them to a label sequence and rejects anything the
//! functions cannot classify. A label the rank function maps to `None` is
//! an unknown label, and a rank of zero is rejected outright rather than
//! silently flattening the element to the top of the outline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A label paired with the rank and layer its classifier assigned.
///
/// Rank is the nesting depth within a layer (H1 is rank 1, H2 rank 2).
/// Layer partitions the rank space: layer 1 content nests under the nearest
/// open layer 0 node instead of competing with it for depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedElement<L> {
    pub label: L,
    pub rank: usize,
    pub layer: usize,
}

impl<L> RankedElement<L> {
    /// Create a layer 0 element.
    pub fn new(label: L, rank: usize) -> Self {
        Self {
            label,
            rank,
            layer: 0,
        }
    }

    /// Move this element into the given layer.
    pub fn with_layer(mut self, layer: usize) -> Self {
        self.layer = layer;
        self
    }
}

/// Errors raised while applying caller-supplied classifiers to a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The rank or layer function returned `None` for this label.
    UnknownLabel { label: String, index: usize },
    /// The rank function returned 0; ranks start at 1.
    InvalidRank {
        label: String,
        rank: usize,
        index: usize,
    },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::UnknownLabel { label, index } => {
                write!(
                    f,
                    "Unclassifiable label {} at input position {}",
                    label, index
                )
            }
            ClassifyError::InvalidRank { label, rank, index } => {
                write!(
                    f,
                    "Invalid rank {} for label {} at input position {} (ranks start at 1)",
                    rank, label, index
                )
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Apply a rank function and a layer function to a label sequence.
///
/// Returns the ranked sequence in input order, or the first classification
/// failure. Classification is all-or-nothing: a failure anywhere rejects the
/// whole sequence, so the encoder never sees a partially classified input.
///
/// # Arguments
///
/// * `labels` - The flat label sequence, in document order
/// * `rank_of` - Caller-supplied rank function; `None` marks an unknown label
/// * `layer_of` - Caller-supplied layer function; `None` marks an unknown label
pub fn rank_elements<L, R, Y>(
    labels: Vec<L>,
    rank_of: R,
    layer_of: Y,
) -> Result<Vec<RankedElement<L>>, ClassifyError>
where
    L: fmt::Debug,
    R: Fn(&L) -> Option<usize>,
    Y: Fn(&L) -> Option<usize>,
{
    let mut ranked = Vec::with_capacity(labels.len());

    for (index, label) in labels.into_iter().enumerate() {
        let rank = match rank_of(&label) {
            Some(rank) => rank,
            None => {
                return Err(ClassifyError::UnknownLabel {
                    label: format!("{:?}", label),
                    index,
                })
            }
        };
        if rank == 0 {
            return Err(ClassifyError::InvalidRank {
                label: format!("{:?}", label),
                rank,
                index,
            });
        }
        let layer = match layer_of(&label) {
            Some(layer) => layer,
            None => {
                return Err(ClassifyError::UnknownLabel {
                    label: format!("{:?}", label),
                    index,
                })
            }
        };

        ranked.push(RankedElement::new(label, rank).with_layer(layer));
    }

    Ok(ranked)
}
