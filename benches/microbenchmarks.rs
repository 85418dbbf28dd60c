//! Microbenchmarks for the building blocks of the triangulator.
//!
//! 1. **Predicates**: orientation and in-circle through both kernels
//! 2. **Topological operators**: `make_edge` + `splice`, `connect`, `kill`
//! 3. **Traversal**: origin rings and face collection on a finished mesh
//! 4. **Validation**: `Mesh::is_valid` and the quadratic Delaunay check

#![allow(missing_docs)] // Criterion macros generate undocumented functions

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use quadedge_delaunay::core::delaunay_triangulation::DelaunayTriangulation;
use quadedge_delaunay::core::face::collect_faces;
use quadedge_delaunay::core::mesh::Mesh;
use quadedge_delaunay::core::vertex::VertexKind;
use quadedge_delaunay::geometry::kernel::{FastKernel, Kernel, RobustKernel};
use quadedge_delaunay::geometry::point::Point;
use quadedge_delaunay::geometry::util::generate_random_points_seeded;
use std::hint::black_box;
use std::sync::OnceLock;

/// Reads `DELAUNAY_BENCH_SEED` (decimal or 0x-hex). Defaults to 0xD1EA.
fn get_benchmark_seed() -> u64 {
    static SEED: OnceLock<u64> = OnceLock::new();
    *SEED.get_or_init(|| {
        std::env::var("DELAUNAY_BENCH_SEED")
            .ok()
            .and_then(|s| {
                let s = s.trim();
                s.strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .map_or_else(|| s.parse().ok(), |hex| u64::from_str_radix(hex, 16).ok())
            })
            .unwrap_or(0xD1EA)
    })
}

fn points(n: usize) -> Vec<Point<f64>> {
    generate_random_points_seeded(n, (-1.0, 1.0), get_benchmark_seed()).expect("valid range")
}

fn benchmark_predicates(c: &mut Criterion) {
    let sample = points(4);
    let [a, b, p, d] = [sample[0], sample[1], sample[2], sample[3]];
    // Nearly collinear triple that forces the robust kernel past its filter.
    let near = [
        Point::new([0.1, 0.1]),
        Point::new([0.2, 0.2 + f64::EPSILON]),
        Point::new([0.3, 0.3]),
    ];

    let mut group = c.benchmark_group("predicates");
    let fast = FastKernel::<f64>::new();
    let robust = RobustKernel::<f64>::new();

    group.bench_function("orientation/fast", |bench| {
        bench.iter(|| black_box(fast.orientation(&a, &b, &p)));
    });
    group.bench_function("orientation/robust", |bench| {
        bench.iter(|| black_box(robust.orientation(&a, &b, &p)));
    });
    group.bench_function("orientation/robust_near_degenerate", |bench| {
        bench.iter(|| black_box(robust.orientation(&near[0], &near[1], &near[2])));
    });
    group.bench_function("in_circle/fast", |bench| {
        bench.iter(|| black_box(fast.in_circle(&a, &b, &p, &d)));
    });
    group.bench_function("in_circle/robust", |bench| {
        bench.iter(|| black_box(robust.in_circle(&a, &b, &p, &d)));
    });
    group.finish();
}

fn benchmark_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad_edge_operators");

    group.bench_function("make_edge_splice_1000", |b| {
        b.iter(|| {
            let mut mesh = Mesh::<f64>::with_capacity(0, 1_000);
            let first = mesh.make_edge();
            for _ in 1..1_000 {
                let e = mesh.make_edge();
                mesh.splice(first, e).expect("live edges");
            }
            black_box(mesh)
        });
    });

    group.bench_function("connect_kill_1000", |b| {
        b.iter_batched(
            || {
                let mut mesh = Mesh::<f64>::with_capacity(3, 3);
                let v: Vec<_> = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]
                    .into_iter()
                    .map(|p| mesh.insert_vertex(Point::new(p), VertexKind::Input))
                    .collect();
                let first = mesh.make_edge();
                let second = mesh.make_edge();
                mesh.set_origin(first, v[0]).expect("live vertex");
                mesh.set_destination(first, v[1]).expect("live vertex");
                mesh.set_origin(second, v[1]).expect("live vertex");
                mesh.set_destination(second, v[2]).expect("live vertex");
                mesh.splice(first.sym(), second).expect("live edges");
                (mesh, first, second)
            },
            |(mut mesh, first, second)| {
                for _ in 0..1_000 {
                    let closing = mesh.connect(second, first).expect("bound endpoints");
                    mesh.kill(closing).expect("live edge");
                }
                black_box(mesh)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn benchmark_traversal_and_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal_and_validation");

    for &n_points in &[100, 1_000, 10_000] {
        let mut dt = DelaunayTriangulation::new(&points(n_points)).expect("construction");
        dt.triangulate().expect("triangulation");

        group.bench_with_input(BenchmarkId::new("vertex_edges", n_points), &dt, |b, dt| {
            b.iter(|| {
                let degree: usize = dt
                    .sorted_vertices()
                    .iter()
                    .map(|&v| dt.mesh().vertex_edges(v).map_or(0, |ring| ring.len()))
                    .sum();
                black_box(degree)
            });
        });
        group.bench_with_input(BenchmarkId::new("collect_faces", n_points), &dt, |b, dt| {
            b.iter(|| black_box(collect_faces(dt.mesh(), dt.kernel()).expect("valid mesh")));
        });
        group.bench_with_input(BenchmarkId::new("mesh_is_valid", n_points), &dt, |b, dt| {
            b.iter(|| black_box(dt.is_valid().is_ok()));
        });
        if n_points <= 1_000 {
            group.bench_with_input(
                BenchmarkId::new("validate_delaunay", n_points),
                &dt,
                |b, dt| b.iter(|| black_box(dt.validate_delaunay().is_ok())),
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_predicates,
    benchmark_operators,
    benchmark_traversal_and_validation
);
criterion_main!(benches);
