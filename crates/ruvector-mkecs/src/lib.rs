//! Maximal k-edge-connected subgraph decomposition for the ruvector
//! ecosystem.
//!
//! Given an undirected multigraph and an integer `k`, this crate partitions
//! the vertices into maximal k-edge-connected subgraphs (MkECS): maximal
//! vertex sets whose induced subgraph survives the removal of any `k - 1`
//! edges. They are a robust clustering primitive for finding tightly bundled
//! communities.
//!
//! The decomposition is a Monte-Carlo randomized contraction. Each round
//! prunes every candidate to its k-core, then contracts its edges in random
//! order while cutting off vertices whose degree drops below `k`. Returned
//! sets are always candidates of size at least `k`; more rounds raise the
//! probability that every maximal component is recovered.
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`contraction`] | union-find + weighted adjacency with merge and cut |
//! | [`kcore`] | k-core peeling pre-filter |
//! | [`pass`] | one randomized contraction sweep over a component |
//! | [`decompose`](mod@decompose) | multi-round driver |
//!
//! # Example
//!
//! ```rust
//! use ruvector_mkecs::{MkecsConfig, MkecsDecomposer};
//!
//! // Two 4-vertex groups, each wired by a doubled 4-cycle.
//! let mut edges = Vec::new();
//! for base in [0u64, 4] {
//!     for _ in 0..2 {
//!         for i in 0..4 {
//!             edges.push((base + i, base + (i + 1) % 4));
//!         }
//!     }
//! }
//!
//! let decomposer = MkecsDecomposer::new(MkecsConfig::new(4).with_seed(42)).unwrap();
//! let mut groups = decomposer.decompose(&edges).unwrap().components;
//! for g in &mut groups {
//!     g.sort_unstable();
//! }
//! groups.sort();
//! assert_eq!(groups, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod contraction;
pub mod decompose;
pub mod error;
pub mod kcore;
pub mod pass;
pub mod types;
pub mod validation;

pub use decompose::{decompose, MkecsDecomposer};
pub use error::{MkecsError, Result, ValidationError};
pub use types::{
    Component, Decomposition, DecompositionStats, Edge, MkecsConfig, PassStats, RoundStats,
    VertexId, DEFAULT_NUM_ITERATIONS,
};
