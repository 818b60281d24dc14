//! One randomized contraction pass over a single component.
//!
//! The pass shrinks the component to its k-core, loads it into a fresh
//! [`ContractionGraph`] and sweeps the edges in a uniformly random order:
//!
//! 1. queued forced pairs (accumulated weight >= k) are merged first,
//! 2. an endpoint whose degree dropped below k is cut,
//! 3. otherwise the two endpoints are merged.
//!
//! A merged vertex whose degree falls below k is cut immediately. When the
//! sweep ends the forced queue is empty and the vertices sharing a root form
//! the candidate components for the next round. A candidate never splits a true k-edge-connected set
//! unless a cut separated it, so repeated passes with fresh orderings
//! converge towards the maximal components from above.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::contraction::ContractionGraph;
use crate::kcore::k_core;
use crate::types::{Component, Edge, PassStats, VertexId};

/// Result of a single pass.
#[derive(Debug, Clone, Default)]
pub struct PassOutput {
    /// Candidate components with at least `k` vertices.
    pub components: Vec<Component>,
    /// Counters collected during the pass.
    pub stats: PassStats,
}

/// Run one contraction pass over `component`.
///
/// Components with at most one vertex, or fewer than `k` vertices, produce
/// no output.
pub fn contraction_pass<R: Rng + ?Sized>(component: &Component, k: usize, rng: &mut R) -> PassOutput {
    let mut stats = PassStats::default();
    let n_in = component.vertices.len();
    if n_in <= 1 || n_in < k {
        return PassOutput {
            components: Vec::new(),
            stats,
        };
    }

    let (vertices, edges) = k_core(&component.vertices, &component.edges, k);
    stats.pruned_vertices = n_in - vertices.len();

    let index: FxHashMap<VertexId, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();
    let local: Vec<(usize, usize)> = edges.iter().map(|(v, w)| (index[v], index[w])).collect();

    let mut graph = ContractionGraph::new(vertices.len(), k);
    for &(a, b) in &local {
        graph.add_edge(a, b, 1);
    }

    let mut order: Vec<usize> = (0..local.len()).collect();
    order.shuffle(rng);
    sweep(&mut graph, &local, &order, &mut stats);

    let components = collect_groups(&mut graph, &vertices, &edges, &local, k);
    trace!(
        input_vertices = n_in,
        core_vertices = vertices.len(),
        edges = edges.len(),
        emitted = components.len(),
        forced = stats.forced_contractions,
        random = stats.random_contractions,
        cuts = stats.cuts,
        "contraction pass finished",
    );

    PassOutput { components, stats }
}

/// Process the edges `local[i]` for each `i` in `order`.
///
/// Queued forced pairs are merged before every edge. Once every edge has been
/// visited no two distinct live roots remain adjacent, so nothing is left in
/// the forced queue.
fn sweep(
    graph: &mut ContractionGraph,
    local: &[(usize, usize)],
    order: &[usize],
    stats: &mut PassStats,
) {
    let k = graph.k();
    for &i in order {
        drain_forced(graph, stats);

        let (a, b) = local[i];
        let v = graph.root(a);
        let w = graph.root(b);
        if !graph.is_adjacent(v, w) {
            stats.skipped_edges += 1;
            continue;
        }

        if graph.degree(v) < k {
            graph.cut(v);
            stats.cuts += 1;
        } else if graph.degree(w) < k {
            graph.cut(w);
            stats.cuts += 1;
        } else {
            let merged = graph.contract(v, w);
            stats.random_contractions += 1;
            cut_if_light(graph, merged, stats);
        }
    }
    debug_assert_eq!(graph.pending_forced(), 0, "forced pairs left after sweep");
}

/// Merge every queued forced pair that still joins two distinct roots.
fn drain_forced(graph: &mut ContractionGraph, stats: &mut PassStats) {
    while let Some((a, b)) = graph.pop_forced() {
        let v = graph.root(a);
        let w = graph.root(b);
        if v == w {
            continue;
        }
        let merged = graph.contract(v, w);
        stats.forced_contractions += 1;
        cut_if_light(graph, merged, stats);
    }
}

#[inline]
fn cut_if_light(graph: &mut ContractionGraph, v: usize, stats: &mut PassStats) {
    if graph.degree(v) < graph.k() {
        graph.cut(v);
        stats.cuts += 1;
    }
}

/// Group vertices by root and keep groups with at least `k` members.
///
/// An edge is carried into a group only when both endpoints resolve to the
/// group's root. Groups are emitted in the order of their root's position in
/// `vertices`.
fn collect_groups(
    graph: &mut ContractionGraph,
    vertices: &[VertexId],
    edges: &[Edge],
    local: &[(usize, usize)],
    k: usize,
) -> Vec<Component> {
    let n = vertices.len();
    let mut group_vertices: Vec<Vec<VertexId>> = vec![Vec::new(); n];
    let mut group_edges: Vec<Vec<Edge>> = vec![Vec::new(); n];

    for (i, &v) in vertices.iter().enumerate() {
        let r = graph.root(i);
        group_vertices[r].push(v);
    }
    for (&edge, &(a, b)) in edges.iter().zip(local) {
        let r = graph.root(a);
        if r == graph.root(b) {
            group_edges[r].push(edge);
        }
    }

    group_vertices
        .into_iter()
        .zip(group_edges)
        .filter(|(vs, _)| vs.len() >= k)
        .map(|(vs, es)| Component::new(vs, es))
        .collect()
}
