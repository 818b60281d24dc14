//! Benchmarks for the MkECS decomposition.
//!
//! Measures a single contraction pass, the k-core filter, and full
//! multi-round decompositions on clustered graphs of growing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use ruvector_mkecs::kcore::k_core;
use ruvector_mkecs::pass::contraction_pass;
use ruvector_mkecs::{Component, Edge, MkecsConfig, MkecsDecomposer, VertexId};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `m` clusters of `n` vertices with degree `d`, plus one random link per
/// pair of clusters.
fn clustered_graph(n: u64, m: u64, d: usize, seed: u64) -> Vec<Edge> {
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
    for i in 0..m {
        for j in (i + 1)..m {
            edges.push((i * n + rng.gen_range(0..n), j * n + rng.gen_range(0..n)));
        }
    }
    edges
}

fn whole_graph(edges: &[Edge]) -> Component {
    let mut vertices: Vec<VertexId> = edges.iter().flat_map(|&(v, w)| [v, w]).collect();
    vertices.sort_unstable();
    vertices.dedup();
    Component::new(vertices, edges.to_vec())
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_kcore(c: &mut Criterion) {
    let mut group = c.benchmark_group("kcore");
    for &clusters in &[10u64, 50, 200] {
        let edges = clustered_graph(100, clusters, 20, 1);
        let component = whole_graph(&edges);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(clusters), &component, |b, comp| {
            b.iter(|| k_core(&comp.vertices, &comp.edges, 20));
        });
    }
    group.finish();
}

fn bench_single_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("contraction_pass");
    for &clusters in &[10u64, 50, 200] {
        let edges = clustered_graph(100, clusters, 20, 2);
        let component = whole_graph(&edges);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(clusters), &component, |b, comp| {
            let mut rng = StdRng::seed_from_u64(3);
            b.iter(|| contraction_pass(comp, 20, &mut rng));
        });
    }
    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);
    for &clusters in &[10u64, 50] {
        let edges = clustered_graph(100, clusters, 30, 4);
        let decomposer = MkecsDecomposer::new(MkecsConfig::new(30).with_seed(5)).unwrap();
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::new("sequential", clusters), &edges, |b, es| {
            b.iter(|| decomposer.decompose(es).unwrap());
        });

        #[cfg(feature = "parallel")]
        {
            let parallel =
                MkecsDecomposer::new(MkecsConfig::new(30).with_seed(5).with_parallel(true)).unwrap();
            group.bench_with_input(BenchmarkId::new("parallel", clusters), &edges, |b, es| {
                b.iter(|| parallel.decompose(es).unwrap());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_kcore, bench_single_pass, bench_decompose);
criterion_main!(benches);
