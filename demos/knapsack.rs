//! Example: the classic four-item knapsack, with its tables.
//!
//! Run with:
//! `cargo run --example knapsack`
//!
//! With `--features tracing`, `RUST_LOG=knapsack_dp=trace` also shows the row-by-row fill
//! and the backward walk.

use knapsack_dp::{KnapsackError, KnapsackProblem, KnapsackSolver};

fn main() -> Result<(), KnapsackError> {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("knapsack_dp=info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let values = [10, 40, 30, 60];
    let weights = [5, 4, 6, 3];
    let capacity = 10;

    let problem = KnapsackProblem::from_raw(&values, &weights, capacity)?;
    let solver = KnapsackSolver::new(problem);

    let tables = solver.build_tables();
    println!("{tables}");

    let solution = solver.solve();
    println!("Max value: {}", solution.optimal_value);
    println!("Kept items:");
    for &i in &solution.selected {
        println!("  item[{i}]: value {}, weight {}", values[i], weights[i]);
    }
    let mask: Vec<u8> = solution.keep_mask().into_iter().map(u8::from).collect();
    println!("Keep mask: {mask:?}");
    Ok(())
}
