//! Core types: vertex ids, components, configuration and run statistics.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MkecsError, Result};

/// Vertex identifier. Ids are expected to be dense, starting at 0.
pub type VertexId = u64;

/// Undirected edge between two vertices. Parallel edges are allowed.
pub type Edge = (VertexId, VertexId);

/// Default number of refinement rounds.
pub const DEFAULT_NUM_ITERATIONS: usize = 100;

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A vertex set together with its induced edge multiset.
///
/// Components are the unit handed from one refinement round to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    /// Vertices of the component.
    pub vertices: Vec<VertexId>,
    /// Edges with both endpoints in `vertices`.
    pub edges: Vec<Edge>,
}

impl Component {
    /// Create a component from its parts.
    pub fn new(vertices: Vec<VertexId>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the component has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parameters of one decomposition run.
///
/// # Example
///
/// ```rust
/// use ruvector_mkecs::types::MkecsConfig;
///
/// let config = MkecsConfig::new(3).with_iterations(50).with_seed(42);
/// assert_eq!(config.k, 3);
/// assert_eq!(config.num_iterations, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MkecsConfig {
    /// Required edge-connectivity. Must be at least 1.
    pub k: usize,

    /// Number of refinement rounds. More rounds raise the probability that
    /// every maximal component is recovered; they never introduce false
    /// positives.
    ///
    /// Default: [`DEFAULT_NUM_ITERATIONS`].
    pub num_iterations: usize,

    /// Random seed for reproducible results (0 = use entropy source).
    pub seed: u64,

    /// Run the components of a round on the rayon pool. Only honoured when
    /// the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for MkecsConfig {
    fn default() -> Self {
        Self {
            k: 1,
            num_iterations: DEFAULT_NUM_ITERATIONS,
            seed: 0,
            parallel: false,
        }
    }
}

impl MkecsConfig {
    /// Configuration for connectivity `k` with default iterations.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the number of refinement rounds.
    pub fn with_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable parallel rounds.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(MkecsError::from)
    }

    /// Serialise the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(MkecsError::from)
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Counters collected by a single contraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStats {
    /// Vertices removed by the k-core filter.
    pub pruned_vertices: usize,
    /// Merges triggered by an accumulated weight of at least k.
    pub forced_contractions: usize,
    /// Merges chosen by the randomized sweep.
    pub random_contractions: usize,
    /// Vertices isolated because their degree fell below k.
    pub cuts: usize,
    /// Sweep edges whose endpoints were no longer adjacent.
    pub skipped_edges: usize,
}

impl PassStats {
    /// Add another pass's counters into this one.
    pub fn absorb(&mut self, other: &PassStats) {
        self.pruned_vertices += other.pruned_vertices;
        self.forced_contractions += other.forced_contractions;
        self.random_contractions += other.random_contractions;
        self.cuts += other.cuts;
        self.skipped_edges += other.skipped_edges;
    }
}

/// Summary of one refinement round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Round index (0-based).
    pub round: usize,
    /// Components processed in this round.
    pub input_components: usize,
    /// Components emitted for the next round.
    pub output_components: usize,
    /// Vertices covered by the emitted components.
    pub retained_vertices: usize,
    /// Pass counters summed over the round.
    pub passes: PassStats,
}

/// Statistics for a whole decomposition run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionStats {
    /// Number of distinct vertices in the input.
    pub universe_size: usize,
    /// Number of edges kept after dropping self-loops.
    pub edge_count: usize,
    /// Rounds that actually ran (fewer than requested once the pool empties).
    pub rounds_executed: usize,
    /// Per-round summaries.
    pub rounds: Vec<RoundStats>,
}

impl DecompositionStats {
    /// Pass counters summed over every round.
    pub fn total_passes(&self) -> PassStats {
        let mut total = PassStats::default();
        for round in &self.rounds {
            total.absorb(&round.passes);
        }
        total
    }
}

/// Output of a decomposition run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition {
    /// Vertex sets of the recovered maximal k-edge-connected subgraphs. The
    /// order across and within sets is unspecified but reproducible for a
    /// fixed seed.
    pub components: Vec<Vec<VertexId>>,
    /// Run statistics.
    pub stats: DecompositionStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MkecsConfig::default();
        assert_eq!(config.k, 1);
        assert_eq!(config.num_iterations, DEFAULT_NUM_ITERATIONS);
        assert_eq!(config.seed, 0);
        assert!(!config.parallel);
    }

    #[test]
    fn config_json_fills_missing_fields() {
        let config = MkecsConfig::from_json(r#"{ "k": 4, "seed": 9 }"#).unwrap();
        assert_eq!(config.k, 4);
        assert_eq!(config.seed, 9);
        assert_eq!(config.num_iterations, DEFAULT_NUM_ITERATIONS);

        let back = MkecsConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn config_json_rejects_garbage() {
        assert!(MkecsConfig::from_json("{ k: }").is_err());
    }

    #[test]
    fn pass_stats_absorb() {
        let mut total = PassStats::default();
        let one = PassStats {
            pruned_vertices: 1,
            forced_contractions: 2,
            random_contractions: 3,
            cuts: 4,
            skipped_edges: 5,
        };
        total.absorb(&one);
        total.absorb(&one);
        assert_eq!(total.cuts, 8);
        assert_eq!(total.skipped_edges, 10);
    }

    #[test]
    fn total_passes_sums_rounds() {
        let passes = PassStats {
            forced_contractions: 2,
            cuts: 1,
            ..Default::default()
        };
        let stats = DecompositionStats {
            rounds: (0..3)
                .map(|round| RoundStats {
                    round,
                    passes,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let total = stats.total_passes();
        assert_eq!(total.forced_contractions, 6);
        assert_eq!(total.cuts, 3);
        assert_eq!(DecompositionStats::default().total_passes(), PassStats::default());
    }
}
