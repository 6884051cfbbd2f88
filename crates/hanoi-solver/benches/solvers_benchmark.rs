// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hanoi_model::Instance;
use hanoi_search::config::SolveConfig;
use hanoi_search::monitor::no_op::NoOperationMonitor;
use hanoi_search::solver::PuzzleSolver;
use hanoi_solver::registry::Algorithm;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Algorithms that finish quickly on every benchmarked size.
const SEARCH_ALGORITHMS: [Algorithm; 5] = [
    Algorithm::Bfs,
    Algorithm::AStar,
    Algorithm::GreedyBestFirst,
    Algorithm::BidirectionalBfs,
    Algorithm::IterativeDeepening,
];

fn bench_classical(c: &mut Criterion) {
    let mut group = c.benchmark_group("classical");

    for num_disks in [4usize, 6, 8] {
        let instance = Instance::classical(num_disks).expect("valid disk count");
        group.throughput(Throughput::Elements((1u64 << num_disks) - 1));

        for algorithm in SEARCH_ALGORITHMS.into_iter().chain([Algorithm::ClosedForm]) {
            if algorithm == Algorithm::IterativeDeepening && num_disks > 6 {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(algorithm.code(), num_disks),
                &instance,
                |b, instance| {
                    b.iter(|| {
                        let mut solver = algorithm
                            .build(instance.initial().clone(), instance.target().clone());
                        let solution = solver
                            .solve(
                                black_box(&SolveConfig::default()),
                                &mut NoOperationMonitor::new(),
                            )
                            .unwrap_or_else(|e| panic!("{} failed: {}", algorithm, e));
                        black_box(solution)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_random_multi_lift(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let instance = Instance::random(7, &mut rng).expect("valid disk count");
    let mut group = c.benchmark_group("random_7_disks");

    for max_lift in [1usize, 2, 3] {
        let config = SolveConfig::new().with_max_lift(max_lift);
        for algorithm in [Algorithm::Bfs, Algorithm::AStar, Algorithm::GreedyBestFirst] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.code(), max_lift),
                &config,
                |b, config| {
                    b.iter(|| {
                        let mut solver = algorithm
                            .build(instance.initial().clone(), instance.target().clone());
                        black_box(solver.solve(config, &mut NoOperationMonitor::new()))
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_classical, bench_random_multi_lift);
criterion_main!(benches);
