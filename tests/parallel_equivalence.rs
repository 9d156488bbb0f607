#![cfg(feature = "parallel")]

use knapsack_dp::{build::build_tables_with, KnapsackProblem, KnapsackSolverBuilder};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_problem(rng: &mut StdRng, n: usize, capacity: usize) -> KnapsackProblem<u64> {
    let values = (0..n).map(|_| rng.gen_range(1..1_000)).collect();
    let weights = (0..n).map(|_| rng.gen_range(1..capacity.max(2))).collect();
    KnapsackProblem::new(values, weights, capacity).unwrap()
}

proptest! {
    #[test]
    fn parallel_rows_match_sequential(
        values in prop::collection::vec(0u32..100, 0..10),
        capacity in 0usize..64,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights = values.iter().map(|_| rng.gen_range(0..20)).collect();
        let problem = KnapsackProblem::new(values, weights, capacity).unwrap();
        let sequential = build_tables_with(&problem, usize::MAX);
        let parallel = build_tables_with(&problem, 0);
        prop_assert_eq!(sequential, parallel);
    }
}

#[test]
fn wide_rows_solve_identically() {
    let mut rng = StdRng::seed_from_u64(7);
    let problem = random_problem(&mut rng, 60, 20_000);
    let sequential = KnapsackSolverBuilder::new(problem.clone())
        .sequential()
        .build()
        .solve();
    let parallel = KnapsackSolverBuilder::new(problem.clone())
        .with_parallel_min_width(1_024)
        .build()
        .solve();
    assert_eq!(sequential, parallel);
    assert!(parallel.is_feasible(&problem));
    assert_eq!(parallel.total_value(&problem), parallel.optimal_value);
}
