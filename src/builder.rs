use crate::problem::KnapsackProblem;
use crate::traits::KnapsackValue;
use crate::utils::DEFAULT_PARALLEL_MIN_WIDTH;
use crate::KnapsackSolver;

pub struct KnapsackSolverBuilder<V> {
    problem: KnapsackProblem<V>,
    parallel_min_width: Option<usize>,
}

impl<V: KnapsackValue> KnapsackSolverBuilder<V> {
    pub fn new(problem: KnapsackProblem<V>) -> Self {
        Self {
            problem,
            parallel_min_width: None,
        }
    }
    /// Fill rows of at least `width` cells in parallel (`parallel` feature).
    pub fn with_parallel_min_width(mut self, width: usize) -> Self {
        self.parallel_min_width = Some(width);
        self
    }
    /// Never fill rows in parallel.
    pub fn sequential(self) -> Self {
        self.with_parallel_min_width(usize::MAX)
    }
    pub fn build(self) -> KnapsackSolver<V> {
        let width = self
            .parallel_min_width
            .unwrap_or(DEFAULT_PARALLEL_MIN_WIDTH);
        KnapsackSolver::with_parallel_min_width(self.problem, width)
    }
}
