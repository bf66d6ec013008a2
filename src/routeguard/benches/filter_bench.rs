//! Route filter benchmarks
//!
//! Measures filtering over wide and deep route trees, and a full
//! generate + commit cycle.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use routeguard::{filter_routes, AccessConfig, AccessState, RoleSet, RouteNode};
use tokio::runtime::Runtime;

const ROLES: [&str; 4] = ["admin", "editor", "viewer", "ops"];

/// Tree with `width` children per route, `depth` levels deep, every third
/// route gated to a rotating role
fn create_route_tree(width: usize, depth: usize) -> Vec<RouteNode> {
    fn build(prefix: &str, width: usize, depth: usize, counter: &mut usize) -> Vec<RouteNode> {
        (0..width)
            .map(|i| {
                *counter += 1;
                let path = format!("{}/{}", prefix, i);
                let mut route = RouteNode::new(path.clone());
                if *counter % 3 == 0 {
                    route = route.with_roles([ROLES[*counter % ROLES.len()]]);
                }
                if depth > 1 {
                    route = route.with_children(build(&path, width, depth - 1, counter));
                }
                route
            })
            .collect()
    }

    let mut counter = 0;
    build("", width, depth, &mut counter)
}

fn bench_filter_routes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_routes");
    let roles = RoleSet::from_iter(["editor", "viewer"]);

    for (width, depth) in [(10, 2), (10, 3), (4, 6)] {
        let tree = create_route_tree(width, depth);
        let size: usize = tree.iter().map(RouteNode::subtree_len).sum();

        group.bench_with_input(BenchmarkId::new("routes", size), &tree, |b, tree| {
            b.iter(|| filter_routes(black_box(tree), black_box(&roles)))
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("generate");

    let base = create_route_tree(5, 1);
    let candidate = create_route_tree(10, 3);
    let mut state = AccessState::new(base, candidate, AccessConfig::default());

    let editor = RoleSet::from_iter(["editor"]);
    group.bench_function("filtered", |b| {
        b.iter(|| rt.block_on(state.generate(black_box(&editor))))
    });

    let admin = RoleSet::from_iter(["admin"]);
    group.bench_function("super_role", |b| {
        b.iter(|| rt.block_on(state.generate(black_box(&admin))))
    });

    group.finish();
}

criterion_group!(benches, bench_filter_routes, bench_generate);
criterion_main!(benches);
