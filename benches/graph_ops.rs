use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use digraph::{DegreeKind, Graph, VertexId};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_create_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_random");
    for &(n, m) in &[(100usize, 500usize), (100, 9000), (1000, 20000)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", n, m)),
            &(n, m),
            |b, &(n, m)| {
                let mut rng = StdRng::seed_from_u64(42);
                let mut graph = Graph::new();
                b.iter(|| graph.create_random(black_box(n), black_box(m), &mut rng).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_degree_scan(c: &mut Criterion) {
    let mut graph = Graph::new();
    graph
        .create_random(1000, 20000, &mut StdRng::seed_from_u64(7))
        .unwrap();

    c.bench_function("degree_total", |b| {
        b.iter(|| graph.degree(black_box(VertexId::new(500)), DegreeKind::Total).unwrap())
    });
    c.bench_function("inbound_edges", |b| {
        b.iter(|| graph.inbound_edges(black_box(VertexId::new(500))).unwrap())
    });
    c.bench_function("copy_graph", |b| b.iter(|| graph.copy_graph()));
}

criterion_group!(benches, bench_create_random, bench_degree_scan);
criterion_main!(benches);
