//! Shared test helpers for the ruvector-mkecs integration test suite.
//!
//! Provides seeded graph generators and result normalisation used across
//! test modules.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ruvector_mkecs::{Edge, VertexId};

/// Generate `m` disjoint clusters of `n` vertices each.
///
/// Cluster `i` owns vertices `i*n .. (i+1)*n` and is wired by `d / 2`
/// independently shuffled Hamiltonian cycles, so every vertex has degree `d`
/// and each cluster is `d`-edge-connected.
///
/// # Panics
///
/// Panics when `d` is odd.
pub fn same_size_clusters(n: u64, m: u64, d: usize, seed: u64) -> Vec<Edge> {
    assert_eq!(d % 2, 0, "cluster degree must be even");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for i in 0..m {
        let mut vs: Vec<VertexId> = (0..n).map(|j| i * n + j).collect();
        for _ in 0..d / 2 {
            vs.shuffle(&mut rng);
            for j in 0..vs.len() {
                edges.push((vs[j], vs[(j + 1) % vs.len()]));
            }
        }
    }
    edges
}

/// Add one random edge between every pair of the `m` clusters of size `n`.
pub fn link_clusters(edges: &mut Vec<Edge>, n: u64, m: u64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for i in 0..m {
        for j in (i + 1)..m {
            edges.push((i * n + rng.gen_range(0..n), j * n + rng.gen_range(0..n)));
        }
    }
}

/// Sort every group and the list of groups, for order-free comparison.
pub fn normalize(mut groups: Vec<Vec<VertexId>>) -> Vec<Vec<VertexId>> {
    for g in &mut groups {
        g.sort_unstable();
    }
    groups.sort();
    groups
}

/// Assert that `groups` are exactly the `m` clusters of size `n` built by
/// [`same_size_clusters`].
pub fn assert_same_size_clusters(groups: Vec<Vec<VertexId>>, n: u64, m: u64) {
    let groups = normalize(groups);
    assert_eq!(groups.len() as u64, m, "number of components");
    for (i, g) in groups.iter().enumerate() {
        let expected: Vec<VertexId> = (0..n).map(|j| i as u64 * n + j).collect();
        assert_eq!(g, &expected, "component {i}");
    }
}

/// Assert that no vertex appears twice and every group has at least `k`
/// vertices.
pub fn assert_partition(groups: &[Vec<VertexId>], k: usize) {
    let mut seen = std::collections::HashSet::new();
    for g in groups {
        assert!(g.len() >= k, "group of size {} below k={k}", g.len());
        for &v in g {
            assert!(seen.insert(v), "vertex {v} appears in two groups");
        }
    }
}
