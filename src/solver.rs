use rayon::prelude::*;
use tracing::debug;

use crate::axis::{AxisCostTable, Strategy};
use crate::error::SolveError;
use crate::rect::{Axis, Rectangle};
use crate::scan::{scan, Solution};

#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    pub strategy: Strategy,
    /// Build the two axis tables on separate rayon workers.
    pub parallel_axes: bool,
}

impl Solver {
    pub fn new(strategy: Strategy, parallel_axes: bool) -> Self {
        Solver {
            strategy,
            parallel_axes,
        }
    }

    /// Answers one case.
    pub fn solve(&self, rects: &[Rectangle]) -> Result<Solution, SolveError> {
        if rects.is_empty() {
            return Err(SolveError::Empty);
        }

        let build = |axis| AxisCostTable::build(rects, axis, self.strategy);
        let (x_costs, y_costs) = if self.parallel_axes {
            rayon::join(|| build(Axis::X), || build(Axis::Y))
        } else {
            (build(Axis::X), build(Axis::Y))
        };
        let (x_costs, y_costs) = (x_costs?, y_costs?);

        let solution = scan(rects, &x_costs, &y_costs)?;
        debug!(
            rectangles = rects.len(),
            x_covered = x_costs.len(),
            y_covered = y_costs.len(),
            %solution,
            "solved case"
        );
        Ok(solution)
    }

    /// Answers every case, in input order. Each case owns its tables, so one
    /// failure leaves the others untouched.
    pub fn solve_cases<C>(&self, cases: &[C], parallel: bool) -> Vec<Result<Solution, SolveError>>
    where
        C: AsRef<[Rectangle]> + Sync,
    {
        if parallel {
            cases.par_iter().map(|c| self.solve(c.as_ref())).collect()
        } else {
            cases.iter().map(|c| self.solve(c.as_ref())).collect()
        }
    }
}

/// Answers one case with the default solver.
pub fn solve(rects: &[Rectangle]) -> Result<Solution, SolveError> {
    Solver::default().solve(rects)
}
