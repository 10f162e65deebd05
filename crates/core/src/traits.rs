use super::csr::GraphCSR;
use common::{error::Error, types::MeanCycle};

/// Trait for solvers of the minimum mean cycle problem on a strongly connected graph.
///
/// All implementations answer the same question and are interchangeable; they
/// differ in running time and in how they use `lambda_hint`.
pub trait MinMeanCycleSolver {
    /// Short lowercase name of the algorithm, e.g. `"karp"`.
    fn name(&self) -> &'static str;

    /// Computes the minimum cycle mean of `graph`.
    ///
    /// # Parameters
    /// - `graph`: strongly connected graph; never modified.
    /// - `plus_infinity`: sentinel larger than any feasible path cost.
    /// - `lambda_hint`: a known upper bound on the answer, e.g. from a
    ///   previous solve. `None` means no bound.
    ///
    /// # Returns
    /// - `Ok(result)` → minimum mean and the iterations it took.
    /// - `Err(e)` → the input failed validation.
    fn solve(
        &self,
        graph: &GraphCSR,
        plus_infinity: i64,
        lambda_hint: Option<f64>,
    ) -> Result<MeanCycle, Error>;

    /// Like [`solve`](Self::solve), returning only lambda.
    fn find_min_cycle_mean(
        &self,
        graph: &GraphCSR,
        plus_infinity: i64,
        lambda_hint: Option<f64>,
    ) -> Result<f64, Error> {
        self.solve(graph, plus_infinity, lambda_hint)
            .map(|result| result.lambda)
    }
}
