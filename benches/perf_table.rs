use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knapsack_dp::{build_tables, KnapsackProblem};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_problem(rng: &mut StdRng, n: usize, capacity: usize) -> KnapsackProblem<u32> {
    let values = (0..n).map(|_| rng.gen_range(1..1_000)).collect();
    let weights = (0..n).map(|_| rng.gen_range(1..=capacity / 4)).collect();
    KnapsackProblem::new(values, weights, capacity).expect("valid random instance")
}

fn rss_bytes() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory(),
        None => 0,
    }
}

fn bench_table_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_tables");
    for &n in &[100usize, 400, 1_600] {
        let capacity = 5_000;
        group.bench_function(format!("tables_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_problem(&mut rng, n, capacity)
                },
                |problem| {
                    let before = rss_bytes();
                    let tables = build_tables(&problem);
                    let after = rss_bytes();
                    criterion::black_box(tables.optimal_value());
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS bytes delta (n {n}, capacity {capacity}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table_perf);
criterion_main!(benches);
