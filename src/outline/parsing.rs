//! Tree Builder - bracket-matches a token sequence into a forest
//!
//! A single left-to-right pass over [StructureToken]s with an explicit stack
//! of frames under assembly. `Open` pushes a payload-less frame, `Value`
//! fills the innermost frame's payload, `DummyValue` marks it as a
//! deliberate placeholder, and `Close` pops the frame into its parent (or
//! into the root list when nothing is left open).
//!
//! The encoder only ever produces well-bracketed sequences, but token
//! sequences may also be constructed directly by callers, so bracketing is
//! validated here independently. Any violation rejects the entire parse; no
//! partial forest is returned.

use crate::outline::token::StructureToken;
use crate::outline::tree::{Forest, TreeNode};
use std::fmt;

/// Errors raised while parsing a token sequence.
///
/// `index` is the offending token's position in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `Close` token arrived with no level open.
    UnmatchedClose { index: usize },
    /// A `Close` token's rank/layer differ from the level it closes.
    MismatchedClose {
        index: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A `Value` or `DummyValue` token arrived with no level open.
    StrayValue { index: usize },
    /// A second `Value` or `DummyValue` for a level that already has one.
    DuplicateValue { index: usize },
    /// End of input with levels still open.
    UnclosedOpen { open_levels: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnmatchedClose { index } => {
                write!(f, "Close token at position {} has no matching Open", index)
            }
            ParseError::MismatchedClose {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Close token at position {} closes rank {} layer {}, expected rank {} layer {}",
                    index, found.0, found.1, expected.0, expected.1
                )
            }
            ParseError::StrayValue { index } => {
                write!(
                    f,
                    "Value token at position {} appears outside any Open/Close pair",
                    index
                )
            }
            ParseError::DuplicateValue { index } => {
                write!(
                    f,
                    "Value token at position {} targets a level that already holds a value",
                    index
                )
            }
            ParseError::UnclosedOpen { open_levels } => {
                write!(
                    f,
                    "End of input with {} unmatched Open token(s)",
                    open_levels
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parse results.
pub type ParseResult<T> = Result<T, ParseError>;

/// A node being assembled; becomes a [TreeNode] when its `Close` arrives.
struct Frame<L> {
    rank: usize,
    layer: usize,
    payload: Option<L>,
    /// Set once a `Value` or `DummyValue` has claimed this frame.
    filled: bool,
    children: Vec<TreeNode<L>>,
}

impl<L> Frame<L> {
    fn open(rank: usize, layer: usize) -> Self {
        Self {
            rank,
            layer,
            payload: None,
            filled: false,
            children: Vec::new(),
        }
    }

    fn into_node(self) -> TreeNode<L> {
        TreeNode::new(self.payload, self.children)
    }
}

/// Parse a token sequence into a forest.
///
/// # Arguments
///
/// * `tokens` - A well-bracketed sequence, from the encoder or caller-built
///
/// # Returns
///
/// The forest in sibling order, or the first bracketing violation found.
pub fn parse_tokens<L>(tokens: Vec<StructureToken<L>>) -> ParseResult<Forest<L>> {
    let mut stack: Vec<Frame<L>> = Vec::new();
    let mut roots: Forest<L> = Vec::new();

    for (index, token) in tokens.into_iter().enumerate() {
        match token {
            StructureToken::Open { rank, layer } => {
                stack.push(Frame::open(rank, layer));
            }
            StructureToken::Value { label, .. } => {
                let frame = stack.last_mut().ok_or(ParseError::StrayValue { index })?;
                if frame.filled {
                    return Err(ParseError::DuplicateValue { index });
                }
                frame.payload = Some(label);
                frame.filled = true;
            }
            StructureToken::DummyValue { .. } => {
                let frame = stack.last_mut().ok_or(ParseError::StrayValue { index })?;
                if frame.filled {
                    return Err(ParseError::DuplicateValue { index });
                }
                frame.filled = true;
            }
            StructureToken::Close { rank, layer } => {
                let frame = stack.pop().ok_or(ParseError::UnmatchedClose { index })?;
                if (frame.rank, frame.layer) != (rank, layer) {
                    return Err(ParseError::MismatchedClose {
                        index,
                        expected: (frame.rank, frame.layer),
                        found: (rank, layer),
                    });
                }
                let node = frame.into_node();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => roots.push(node),
                }
            }
        }
    }

    if !stack.is_empty() {
        return Err(ParseError::UnclosedOpen {
            open_levels: stack.len(),
        });
    }

    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::encoding::build_tokens;
    use crate::outline::testing::heading_rank;
    use crate::outline::token::StructureToken::{Close, DummyValue, Open, Value};

    #[test]
    fn test_parse_encoder_output() {
        let tokens = build_tokens(vec!["H1", "H2", "H2"], heading_rank).unwrap();
        let forest = parse_tokens(tokens).unwrap();

        assert_eq!(forest.len(), 1);
        let root = &forest[0];
        assert_eq!(root.payload(), Some(&"H1"));
        assert_eq!(root.child_count(), 2);
        assert_eq!(root.children()[0].payload(), Some(&"H2"));
        assert_eq!(root.children()[1].payload(), Some(&"H2"));
    }

    #[test]
    fn test_parse_caller_built_tokens() {
        // Tokens fed to the parser without going through the encoder.
        let tokens = vec![
            Open { rank: 1, layer: 0 },
            Value {
                label: "A",
                rank: 1,
                layer: 0,
            },
            Open { rank: 2, layer: 0 },
            DummyValue { rank: 2, layer: 0 },
            Close { rank: 2, layer: 0 },
            Close { rank: 1, layer: 0 },
        ];
        let forest = parse_tokens(tokens).unwrap();

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].payload(), Some(&"A"));
        assert!(forest[0].children()[0].is_placeholder());
    }

    #[test]
    fn test_open_without_value_becomes_placeholder() {
        let tokens: Vec<StructureToken<&str>> = vec![
            Open { rank: 1, layer: 0 },
            Close { rank: 1, layer: 0 },
        ];
        let forest = parse_tokens(tokens).unwrap();

        assert_eq!(forest.len(), 1);
        assert!(forest[0].is_placeholder());
    }

    #[test]
    fn test_unmatched_close_rejected() {
        let tokens: Vec<StructureToken<&str>> = vec![Close { rank: 1, layer: 0 }];
        let err = parse_tokens(tokens).unwrap_err();

        assert_eq!(err, ParseError::UnmatchedClose { index: 0 });
    }

    #[test]
    fn test_mismatched_close_rejected() {
        let tokens: Vec<StructureToken<&str>> = vec![
            Open { rank: 1, layer: 0 },
            Close { rank: 2, layer: 0 },
        ];
        let err = parse_tokens(tokens).unwrap_err();

        assert_eq!(
            err,
            ParseError::MismatchedClose {
                index: 1,
                expected: (1, 0),
                found: (2, 0),
            }
        );
    }

    #[test]
    fn test_stray_value_rejected() {
        let tokens = vec![Value {
            label: "A",
            rank: 1,
            layer: 0,
        }];
        let err = parse_tokens(tokens).unwrap_err();

        assert_eq!(err, ParseError::StrayValue { index: 0 });
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let tokens = vec![
            Open { rank: 1, layer: 0 },
            Value {
                label: "A",
                rank: 1,
                layer: 0,
            },
            DummyValue { rank: 1, layer: 0 },
        ];
        let err = parse_tokens(tokens).unwrap_err();

        assert_eq!(err, ParseError::DuplicateValue { index: 2 });
    }

    #[test]
    fn test_leftover_open_rejected() {
        let tokens: Vec<StructureToken<&str>> = vec![
            Open { rank: 1, layer: 0 },
            Open { rank: 2, layer: 0 },
        ];
        let err = parse_tokens(tokens).unwrap_err();

        assert_eq!(err, ParseError::UnclosedOpen { open_levels: 2 });
    }

    #[test]
    fn test_empty_sequence_yields_empty_forest() {
        let forest = parse_tokens(Vec::<StructureToken<&str>>::new()).unwrap();
        assert!(forest.is_empty());
    }
}
