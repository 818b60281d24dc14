//! K-core pre-filter.
//!
//! A vertex whose degree is below `k` cannot belong to any k-edge-connected
//! subgraph, and removing it may push neighbors below `k` as well. Peeling
//! these vertices until none remain leaves the k-core: the maximal induced
//! subgraph in which every vertex has degree at least `k`.
//!
//! Peeling is worklist driven and runs in O(V + E).

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::types::{Edge, VertexId};

/// Restrict `vertices` / `edges` to their k-core.
///
/// Parallel edges count once per copy; self-loops contribute nothing. Edges
/// with an endpoint outside `vertices` are ignored. The relative order of
/// the surviving vertices and edges is preserved.
///
/// # Example
///
/// ```rust
/// use ruvector_mkecs::kcore::k_core;
///
/// // Triangle with a pendant vertex 3.
/// let vertices = vec![0, 1, 2, 3];
/// let edges = vec![(0, 1), (1, 2), (2, 0), (2, 3)];
/// let (vs, es) = k_core(&vertices, &edges, 2);
/// assert_eq!(vs, vec![0, 1, 2]);
/// assert_eq!(es, vec![(0, 1), (1, 2), (2, 0)]);
/// ```
pub fn k_core(vertices: &[VertexId], edges: &[Edge], k: usize) -> (Vec<VertexId>, Vec<Edge>) {
    let index: FxHashMap<VertexId, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();

    let n = vertices.len();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut degree = vec![0usize; n];
    for &(v, w) in edges {
        let (Some(&a), Some(&b)) = (index.get(&v), index.get(&w)) else {
            continue;
        };
        if a == b {
            continue;
        }
        adjacency[a].push(b);
        adjacency[b].push(a);
        degree[a] += 1;
        degree[b] += 1;
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| degree[v] < k).collect();
    while let Some(v) = queue.pop_front() {
        for &w in &adjacency[v] {
            if degree[w] >= k {
                degree[w] -= 1;
                if degree[w] < k {
                    queue.push_back(w);
                }
            }
        }
    }

    let alive = |v: &VertexId| index.get(v).map_or(false, |&i| degree[i] >= k);
    let kept_vertices = vertices.iter().copied().filter(|v| alive(v)).collect();
    let kept_edges = edges
        .iter()
        .copied()
        .filter(|(v, w)| v != w && alive(v) && alive(w))
        .collect();
    (kept_vertices, kept_edges)
}
