//! Multigraph contraction structure.
//!
//! [`ContractionGraph`] combines a union-find forest with a weighted
//! adjacency map per root. Parallel edges collapse into one weighted entry
//! and self-loops are dropped, so after any sequence of merges the adjacency
//! of a root describes the quotient multigraph exactly.
//!
//! Vertices are addressed by dense local indices `0..n`. A contraction pass
//! remaps its component onto this range and owns the structure for the
//! duration of the pass.
//!
//! # Invariants
//!
//! For any two live roots `v`, `w`:
//!
//! - `adjacency[v][w] == adjacency[w][v]`
//! - `degree[v] == sum(adjacency[v].values())`
//! - a cut vertex has no adjacency entries and takes part in no later merge

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

/// Union-find link of a root.
const ROOT: usize = usize::MAX;

/// Weighted multigraph with union-find contraction.
#[derive(Debug, Clone)]
pub struct ContractionGraph {
    /// Connectivity threshold; a pair whose weight reaches it is merged.
    k: usize,
    /// Union-find parent, or [`ROOT`].
    parent: Vec<usize>,
    /// Neighbor root -> accumulated edge weight.
    adjacency: Vec<FxHashMap<usize, usize>>,
    /// Sum of `adjacency[v]` weights, meaningful for roots.
    degree: Vec<usize>,
    /// Pairs whose accumulated weight reached `k`, pending merge.
    forced: VecDeque<(usize, usize)>,
}

impl ContractionGraph {
    /// Create `n` isolated roots with connectivity threshold `k`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            k,
            parent: vec![ROOT; n],
            adjacency: vec![FxHashMap::default(); n],
            degree: vec![0; n],
            forced: VecDeque::new(),
        }
    }

    /// Number of vertices (roots and absorbed).
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Connectivity threshold.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Find the root of `v`, compressing the path behind it.
    pub fn root(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != ROOT {
            root = self.parent[root];
        }

        let mut cur = v;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Current degree of root `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.degree[v]
    }

    /// Accumulated weight between roots `v` and `w` (0 if not adjacent).
    #[inline]
    pub fn weight(&self, v: usize, w: usize) -> usize {
        self.adjacency[v].get(&w).copied().unwrap_or(0)
    }

    /// Whether roots `v` and `w` still share at least one edge.
    #[inline]
    pub fn is_adjacent(&self, v: usize, w: usize) -> bool {
        self.adjacency[v].contains_key(&w)
    }

    /// Number of distinct neighbors of root `v`.
    #[inline]
    pub fn neighbor_count(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Add `c` parallel edges between roots `v` and `w`.
    ///
    /// Self-loops are ignored. When the accumulated weight reaches `k` the
    /// pair is queued for a forced merge.
    pub fn add_edge(&mut self, v: usize, w: usize, c: usize) {
        if v == w {
            return;
        }

        let forward = {
            let entry = self.adjacency[v].entry(w).or_insert(0);
            *entry += c;
            *entry
        };
        let backward = {
            let entry = self.adjacency[w].entry(v).or_insert(0);
            *entry += c;
            *entry
        };
        debug_assert_eq!(forward, backward, "asymmetric adjacency");

        self.degree[v] += c;
        self.degree[w] += c;
        if forward >= self.k {
            self.forced.push_back((v, w));
        }
    }

    /// Merge roots `v` and `w` and return the surviving root.
    ///
    /// The vertex with fewer distinct neighbors is absorbed into the other;
    /// its edges are re-attached to the survivor and the edges between the
    /// two disappear.
    pub fn contract(&mut self, v: usize, w: usize) -> usize {
        debug_assert_ne!(v, w, "contracting a vertex with itself");
        let (keep, gone) = if self.adjacency[v].len() < self.adjacency[w].len() {
            (w, v)
        } else {
            (v, w)
        };
        self.parent[gone] = keep;

        let absorbed = std::mem::take(&mut self.adjacency[gone]);
        for (x, c) in absorbed {
            self.adjacency[x].remove(&gone);
            self.degree[x] -= c;
            if x != keep {
                self.add_edge(keep, x, c);
            }
        }

        self.degree[gone] = 0;
        keep
    }

    /// Remove every edge incident to root `v`.
    pub fn cut(&mut self, v: usize) {
        let incident = std::mem::take(&mut self.adjacency[v]);
        for (w, c) in incident {
            self.adjacency[w].remove(&v);
            self.degree[w] -= c;
        }
        self.degree[v] = 0;
    }

    /// Pop the next queued forced pair.
    #[inline]
    pub fn pop_forced(&mut self) -> Option<(usize, usize)> {
        self.forced.pop_front()
    }

    /// Number of queued forced pairs.
    #[inline]
    pub fn pending_forced(&self) -> usize {
        self.forced.len()
    }
}
