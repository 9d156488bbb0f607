use knapsack_dp::{build_tables, reconstruct, Decision, KnapsackProblem};
use proptest::prelude::*;

fn instance() -> impl Strategy<Value = KnapsackProblem<i64>> {
    (0usize..12)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(-10i64..60, n),
                prop::collection::vec(0usize..15, n),
                0usize..30,
            )
        })
        .prop_map(|(values, weights, capacity)| {
            KnapsackProblem::new(values, weights, capacity).unwrap()
        })
}

proptest! {
    #[test]
    fn shape_and_base_row(problem in instance()) {
        let tables = build_tables(&problem);
        let (best, chosen) = (tables.best(), tables.chosen());
        prop_assert_eq!(best.rows(), problem.len() + 1);
        prop_assert_eq!(best.cols(), problem.capacity() + 1);
        prop_assert_eq!((chosen.rows(), chosen.cols()), (best.rows(), best.cols()));
        prop_assert!(best.row(0).iter().all(|&v| v == 0));
        prop_assert!(chosen.row(0).iter().all(|&d| d == Decision::Exclude));
    }

    #[test]
    fn monotone_in_items_and_capacity(problem in instance()) {
        let tables = build_tables(&problem);
        let best = tables.best();
        for k in 0..best.rows() {
            for c in 0..best.cols() {
                if c + 1 < best.cols() {
                    prop_assert!(best[(k, c)] <= best[(k, c + 1)], "row {} col {}", k, c);
                }
                if k + 1 < best.rows() {
                    prop_assert!(best[(k, c)] <= best[(k + 1, c)], "row {} col {}", k, c);
                }
            }
        }
    }

    #[test]
    fn include_iff_cell_improves(problem in instance()) {
        let tables = build_tables(&problem);
        let (best, chosen) = (tables.best(), tables.chosen());
        for k in 1..best.rows() {
            let weight = problem.weights()[k - 1];
            for c in 0..best.cols() {
                let improved = best[(k, c)] != best[(k - 1, c)];
                prop_assert_eq!(chosen[(k, c)].is_include(), improved);
                if chosen[(k, c)].is_include() {
                    prop_assert!(weight <= c);
                }
            }
        }
    }

    #[test]
    fn backward_walk_lands_on_optimum(problem in instance()) {
        let tables = build_tables(&problem);
        let picked = reconstruct(tables.chosen(), problem.weights(), problem.capacity());
        prop_assert_eq!(picked.clone(), tables.selection(problem.weights()));
        let value: i64 = picked.iter().map(|&i| problem.values()[i]).sum();
        let weight: usize = picked.iter().map(|&i| problem.weights()[i]).sum();
        prop_assert_eq!(value, tables.optimal_value());
        prop_assert!(weight <= problem.capacity());
    }

    #[test]
    fn repeated_builds_are_identical(problem in instance()) {
        prop_assert_eq!(build_tables(&problem), build_tables(&problem));
    }
}

#[test]
fn zero_items_any_capacity() {
    for capacity in [0usize, 1, 17, 1000] {
        let problem = KnapsackProblem::<u32>::new(vec![], vec![], capacity).unwrap();
        let tables = build_tables(&problem);
        assert_eq!(tables.best().rows(), 1);
        assert_eq!(tables.optimal_value(), 0);
        assert!(tables.selection(problem.weights()).is_empty());
    }
}

#[test]
fn zero_capacity_positive_weights() {
    let problem = KnapsackProblem::new(vec![9u32, 4, 7], vec![1, 2, 3], 0).unwrap();
    let tables = build_tables(&problem);
    assert_eq!(tables.best().cols(), 1);
    assert_eq!(tables.optimal_value(), 0);
    assert!(tables.selection(problem.weights()).is_empty());
}
