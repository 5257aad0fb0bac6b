use criterion::{black_box, criterion_group, criterion_main, Criterion};

use amphipod_solver::config::Method;
use amphipod_solver::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_three_rooms(c: &mut Criterion) {
    // every pod has to leave its room once
    bench_level(c, Method::AStar, "levels/03-three-rooms.txt", 100);
}

#[allow(unused)]
fn bench_example(c: &mut Criterion) {
    bench_level(c, Method::AStar, "levels/example.txt", 10);
}

#[allow(unused)]
fn bench_example_dijkstra(c: &mut Criterion) {
    bench_level(c, Method::Dijkstra, "levels/example.txt", 10);
}

#[allow(unused)]
fn bench_example_unfolded(c: &mut Criterion) {
    // 4 pods per room
    bench_level(c, Method::AStar, "levels/example-unfolded.txt", 10);
}

fn bench_level(c: &mut Criterion, method: Method, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();

    let mut group = c.benchmark_group(method.to_string());
    group.sample_size(samples);
    group.bench_function(level_path, |b| {
        b.iter(|| level.solve(black_box(method), black_box(false)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_three_rooms,
    bench_example,
    //bench_example_dijkstra,
    //bench_example_unfolded,
);
criterion_main!(benches);
