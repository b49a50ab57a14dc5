//! # outline-core
//!
//! Builds hierarchical trees from flat sequences of labeled elements whose
//! nesting is implied by numeric ranks (the classic "outline from heading
//! levels" problem, generalized to rank gaps and to multiple interleaved
//! layers of structure).
//!
//! The pipeline is: labeled sequence → structural tokens → forest of trees →
//! traversal events. Each stage is independently invocable; see the
//! [outline module](crate::outline) for the entry points.
//!
//! ## Testing
//!
//! Test-support classifiers and renderers live in the
//! [testing module](crate::outline::testing). Structural tests assert on
//! rendered forests and event streams rather than walking nodes by hand.

pub mod outline;
