//! Multi-round decomposition driver.
//!
//! [`MkecsDecomposer`] seeds a pool with the whole input graph and runs a
//! [`contraction_pass`] over every pooled component for a fixed number of
//! rounds. Each round *replaces* the pool with the components emitted by its
//! passes, so the covered vertex and edge volume never grows while the
//! number of components may.
//!
//! # Randomness
//!
//! Every round draws one `u64` per pooled component from the caller's RNG and
//! runs that component's pass on a `StdRng` seeded with it. The output thus
//! depends only on the input and the caller's RNG state, and is the same
//! whether the components of a round run sequentially or on the rayon pool
//! (`parallel` feature).

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::Result;
use crate::pass::{contraction_pass, PassOutput};
use crate::types::{
    Component, Decomposition, DecompositionStats, Edge, MkecsConfig, RoundStats, VertexId,
};
use crate::validation::validate_config;

/// Decompose `edges` into maximal k-edge-connected vertex sets.
///
/// Convenience wrapper over [`MkecsDecomposer`] using an entropy-seeded RNG.
///
/// # Example
///
/// ```rust
/// use ruvector_mkecs::decompose;
///
/// let triangle = [(0, 1), (1, 2), (2, 0)];
/// let groups = decompose(&triangle, 2, 100).unwrap();
/// assert_eq!(groups.len(), 1);
///
/// assert!(decompose(&triangle, 3, 100).unwrap().is_empty());
/// ```
pub fn decompose(edges: &[Edge], k: usize, num_iterations: usize) -> Result<Vec<Vec<VertexId>>> {
    let config = MkecsConfig::new(k).with_iterations(num_iterations);
    Ok(MkecsDecomposer::new(config)?.decompose(edges)?.components)
}

/// Randomized contraction engine for MkECS decomposition.
///
/// # Example
///
/// ```rust
/// use ruvector_mkecs::{MkecsConfig, MkecsDecomposer};
///
/// // Two triangles sharing no vertex.
/// let edges = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)];
/// let decomposer = MkecsDecomposer::new(MkecsConfig::new(2).with_seed(7)).unwrap();
/// let result = decomposer.decompose(&edges).unwrap();
/// assert_eq!(result.components.len(), 2);
/// assert_eq!(result.stats.universe_size, 6);
/// ```
#[derive(Debug, Clone)]
pub struct MkecsDecomposer {
    config: MkecsConfig,
}

impl MkecsDecomposer {
    /// Create a decomposer after validating `config`.
    pub fn new(config: MkecsConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &MkecsConfig {
        &self.config
    }

    fn make_rng(&self) -> StdRng {
        if self.config.seed == 0 {
            StdRng::from_entropy()
        } else {
            StdRng::seed_from_u64(self.config.seed)
        }
    }

    /// Decompose `edges` with the RNG selected by `config.seed`.
    pub fn decompose(&self, edges: &[Edge]) -> Result<Decomposition> {
        let mut rng = self.make_rng();
        self.decompose_with_rng(edges, &mut rng)
    }

    /// Decompose `edges` drawing all randomness from `rng`.
    ///
    /// Self-loops are dropped on entry. Zero rounds return no components.
    pub fn decompose_with_rng<R: Rng + ?Sized>(&self, edges: &[Edge], rng: &mut R) -> Result<Decomposition> {
        let k = self.config.k;
        let start = Instant::now();
        let mut stats = DecompositionStats::default();
        if edges.is_empty() {
            return Ok(Decomposition {
                components: Vec::new(),
                stats,
            });
        }

        let mut vertices: Vec<VertexId> = edges.iter().flat_map(|&(v, w)| [v, w]).collect();
        vertices.sort_unstable();
        vertices.dedup();
        let edges: Vec<Edge> = edges.iter().copied().filter(|(v, w)| v != w).collect();
        stats.universe_size = vertices.len();
        stats.edge_count = edges.len();

        let mut pool = vec![Component::new(vertices, edges)];
        if self.config.num_iterations == 0 {
            pool.clear();
        }

        for round in 0..self.config.num_iterations {
            if pool.is_empty() {
                break;
            }
            let seeds: Vec<u64> = pool.iter().map(|_| rng.gen()).collect();
            let outputs = self.run_round(&pool, &seeds);

            let mut round_stats = RoundStats {
                round,
                input_components: pool.len(),
                ..Default::default()
            };
            let mut next = Vec::new();
            for output in outputs {
                round_stats.passes.absorb(&output.stats);
                next.extend(output.components);
            }
            round_stats.output_components = next.len();
            round_stats.retained_vertices = next.iter().map(Component::len).sum();

            debug!(
                round,
                input = round_stats.input_components,
                output = round_stats.output_components,
                retained = round_stats.retained_vertices,
                cuts = round_stats.passes.cuts,
                "round complete",
            );
            stats.rounds.push(round_stats);
            stats.rounds_executed += 1;
            pool = next;
        }

        let components: Vec<Vec<VertexId>> = pool.into_iter().map(|c| c.vertices).collect();
        let totals = stats.total_passes();
        info!(
            k,
            vertices = stats.universe_size,
            edges = stats.edge_count,
            rounds = stats.rounds_executed,
            components = components.len(),
            forced = totals.forced_contractions,
            random = totals.random_contractions,
            cuts = totals.cuts,
            elapsed = ?start.elapsed(),
            "decomposition finished",
        );
        Ok(Decomposition { components, stats })
    }

    /// Run one pass per component, each on its own seeded RNG.
    fn run_round(&self, pool: &[Component], seeds: &[u64]) -> Vec<PassOutput> {
        let k = self.config.k;

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                use rayon::prelude::*;
                return pool
                    .par_iter()
                    .zip(seeds.par_iter())
                    .map(|(component, &seed)| {
                        contraction_pass(component, k, &mut StdRng::seed_from_u64(seed))
                    })
                    .collect();
            }
        }

        pool.iter()
            .zip(seeds)
            .map(|(component, &seed)| contraction_pass(component, k, &mut StdRng::seed_from_u64(seed)))
            .collect()
    }
}
