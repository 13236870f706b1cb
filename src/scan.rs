use std::fmt;

use crate::axis::AxisCostTable;
use crate::error::SolveError;
use crate::rect::{Distance, Rectangle};

/// Party location and the total distance every attendee travels to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    pub x: i64,
    pub y: i64,
    pub distance: Distance,
}

impl Solution {
    pub fn new(x: i64, y: i64, distance: Distance) -> Self {
        Solution { x, y, distance }
    }

    /// Lower distance wins, then smaller `x`, then smaller `y`.
    #[inline]
    pub fn is_better(&self, x: i64, y: i64, distance: Distance) -> bool {
        (distance, x, y) < (self.distance, self.x, self.y)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.distance)
    }
}

/// Visits every attendee once and keeps the best one under [`Solution::is_better`].
pub fn scan(
    rects: &[Rectangle],
    x_costs: &AxisCostTable,
    y_costs: &AxisCostTable,
) -> Result<Solution, SolveError> {
    let mut best: Option<Solution> = None;

    for r in rects {
        let xs = costs_for(x_costs, r.x1, r.x2)?;
        let ys = costs_for(y_costs, r.y1, r.y2)?;

        for (x, &x_cost) in (r.x1..=r.x2).zip(xs) {
            for (y, &y_cost) in (r.y1..=r.y2).zip(ys) {
                let total = x_cost
                    .checked_add(y_cost)
                    .ok_or(SolveError::TotalOverflow { x, y })?;
                if best.map_or(true, |b| b.is_better(x, y, total)) {
                    best = Some(Solution::new(x, y, total));
                }
            }
        }
    }

    best.ok_or(SolveError::Empty)
}

fn costs_for(table: &AxisCostTable, lo: i64, hi: i64) -> Result<&[Distance], SolveError> {
    table.costs_for(lo, hi).ok_or(SolveError::UncoveredRange {
        axis: table.axis(),
        lo,
        hi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Strategy;
    use crate::rect::Axis;

    fn tables(rects: &[Rectangle]) -> (AxisCostTable, AxisCostTable) {
        (
            AxisCostTable::build(rects, Axis::X, Strategy::Incremental).unwrap(),
            AxisCostTable::build(rects, Axis::Y, Strategy::Incremental).unwrap(),
        )
    }

    #[test]
    fn test_is_better_prefers_distance_then_x_then_y() {
        let best = Solution::new(5, 5, 100);
        assert!(best.is_better(9, 9, 99));
        assert!(!best.is_better(0, 0, 101));
        assert!(best.is_better(4, 9, 100));
        assert!(best.is_better(5, 4, 100));
        assert!(!best.is_better(5, 5, 100));
        assert!(!best.is_better(5, 6, 100));
        assert!(!best.is_better(6, 0, 100));
    }

    #[test]
    fn test_scan_picks_median_column() {
        let rects = [Rectangle::new(0, 0, 4, 0)];
        let (xs, ys) = tables(&rects);
        assert_eq!(scan(&rects, &xs, &ys).unwrap(), Solution::new(2, 0, 6));
    }

    #[test]
    fn test_scan_rejects_mismatched_tables() {
        let rects = [Rectangle::new(0, 0, 1, 1)];
        let other = [Rectangle::new(0, 0, 0, 0)];
        let (xs, ys) = tables(&other);
        assert_eq!(
            scan(&rects, &xs, &ys).unwrap_err(),
            SolveError::UncoveredRange {
                axis: Axis::X,
                lo: 0,
                hi: 1
            }
        );
    }

    #[test]
    fn test_scan_reports_combined_overflow() {
        // Each axis total fits in a u64 at (0, 0); their sum does not.
        let k = (1i64 << 62) + (1i64 << 61);
        let rects = [Rectangle::new(0, 0, 0, 0), Rectangle::new(k, k - 1, k, k)];
        let (xs, ys) = tables(&rects);
        assert_eq!(xs.cost_at(0), Some(2 * k as u64));
        assert_eq!(ys.cost_at(0), Some(2 * k as u64 - 1));
        assert_eq!(
            scan(&rects, &xs, &ys).unwrap_err(),
            SolveError::TotalOverflow { x: 0, y: 0 }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Solution::new(-3, 4, 17).to_string(), "-3 4 17");
    }
}
