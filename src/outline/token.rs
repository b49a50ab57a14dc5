//! Structural tokens - the intermediate representation between ranks and trees
//!
//! The encoder flattens rank comparisons into this token alphabet; the parser
//! bracket-matches it back into a forest. The sequence the encoder emits is
//! always well-bracketed: every `Open` has exactly one matching `Close` at
//! the same rank and layer, pairs nest without crossing, and every value
//! marker sits directly inside the pair opened for it.
//!
//! Token sequences may also be constructed by callers and handed straight to
//! [parse_tokens](crate::outline::parsing::parse_tokens), which validates
//! bracketing independently.

use serde::{Deserialize, Serialize};

/// One structural token in the encoded sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureToken<L> {
    /// Opens a tree level at the given rank and layer.
    Open { rank: usize, layer: usize },
    /// Closes the innermost open level; must match its `Open`.
    Close { rank: usize, layer: usize },
    /// The payload for the innermost open level.
    Value {
        label: L,
        rank: usize,
        layer: usize,
    },
    /// Marks the innermost open level as a placeholder for a skipped rank.
    DummyValue { rank: usize, layer: usize },
}

impl<L> StructureToken<L> {
    /// The rank this token was emitted at.
    pub fn rank(&self) -> usize {
        match self {
            StructureToken::Open { rank, .. }
            | StructureToken::Close { rank, .. }
            | StructureToken::Value { rank, .. }
            | StructureToken::DummyValue { rank, .. } => *rank,
        }
    }

    /// The layer this token was emitted at.
    pub fn layer(&self) -> usize {
        match self {
            StructureToken::Open { layer, .. }
            | StructureToken::Close { layer, .. }
            | StructureToken::Value { layer, .. }
            | StructureToken::DummyValue { layer, .. } => *layer,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, StructureToken::Open { .. })
    }

    pub fn is_close(&self) -> bool {
        matches!(self, StructureToken::Close { .. })
    }

    /// True for both real values and dummy markers.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            StructureToken::Value { .. } | StructureToken::DummyValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_cover_all_variants() {
        let tokens: Vec<StructureToken<&str>> = vec![
            StructureToken::Open { rank: 2, layer: 1 },
            StructureToken::Value {
                label: "P",
                rank: 2,
                layer: 1,
            },
            StructureToken::DummyValue { rank: 2, layer: 1 },
            StructureToken::Close { rank: 2, layer: 1 },
        ];

        for token in &tokens {
            assert_eq!(token.rank(), 2);
            assert_eq!(token.layer(), 1);
        }
        assert!(tokens[0].is_open());
        assert!(tokens[1].is_value());
        assert!(tokens[2].is_value());
        assert!(tokens[3].is_close());
    }

    #[test]
    fn test_tokens_serialize_with_tagged_shape() {
        let token: StructureToken<&str> = StructureToken::Open { rank: 1, layer: 0 };
        let json = serde_json::to_string(&token).unwrap();

        assert_eq!(json, r#"{"Open":{"rank":1,"layer":0}}"#);
    }
}
