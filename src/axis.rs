//! Per-axis distance tables.
//!
//! Manhattan distance splits into an x part and a y part, so the total distance
//! from `(cx, cy)` to every attendee is `cost_x[cx] + cost_y[cy]`. Each table
//! only holds the coordinates covered by at least one rectangle on its axis,
//! which keeps it bounded by the attendee count rather than the coordinate span.

use serde::Deserialize;
use tracing::debug;

use crate::error::SolveError;
use crate::rect::{Axis, Distance, Rectangle};

/// How each covered coordinate's cost is computed during the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sum every rectangle's contribution afresh at each coordinate.
    Direct,
    /// Carry a running sum from one coordinate to the next.
    #[default]
    Incremental,
}

/// A maximal run of consecutive covered coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: i64,
    pub end: i64,
    offset: usize,
}

#[derive(Debug, Clone)]
pub struct AxisCostTable {
    axis: Axis,
    base: i64,
    segments: Vec<Segment>,
    costs: Vec<Distance>,
}

impl AxisCostTable {
    /// Sweeps the covered coordinates of `axis` in ascending order and records
    /// the total distance from every attendee to each of them.
    pub fn build(
        rects: &[Rectangle],
        axis: Axis,
        strategy: Strategy,
    ) -> Result<Self, SolveError> {
        let table = match strategy {
            Strategy::Direct => Self::sweep(rects, axis, DirectSweep { rects, axis }),
            Strategy::Incremental => {
                Self::sweep(rects, axis, IncrementalSweep::new(rects, axis)?)
            }
        }?;

        debug!(
            %axis,
            ?strategy,
            base = table.base,
            covered = table.len(),
            segments = table.segments.len(),
            "built axis cost table"
        );
        Ok(table)
    }

    fn sweep<S: CostSweep>(
        rects: &[Rectangle],
        axis: Axis,
        mut sweep: S,
    ) -> Result<Self, SolveError> {
        let mut spans: Vec<(i64, i64)> = rects.iter().map(|r| r.span(axis)).collect();
        spans.sort_unstable_by_key(|&(lo, _)| lo);

        let base = spans.first().ok_or(SolveError::Empty)?.0;
        let mut table = AxisCostTable {
            axis,
            base,
            segments: Vec::new(),
            costs: Vec::new(),
        };

        let mut cur = base;
        for &(lo, hi) in &spans {
            // Coordinates below `cur` were already visited through an earlier span.
            let start = cur.max(lo);
            if start > hi {
                continue;
            }
            for c in start..=hi {
                let cost = sweep.cost_at(c)?;
                table.push(c, cost);
            }
            cur = hi + 1;
        }

        Ok(table)
    }

    fn push(&mut self, c: i64, cost: Distance) {
        match self.segments.last_mut() {
            Some(seg) if seg.end + 1 == c => seg.end = c,
            _ => self.segments.push(Segment {
                start: c,
                end: c,
                offset: self.costs.len(),
            }),
        }
        self.costs.push(cost);
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Lowest covered coordinate; offsets into the table are relative to it.
    pub fn base(&self) -> i64 {
        self.base
    }

    /// Number of covered coordinates.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn cost_at(&self, c: i64) -> Option<Distance> {
        self.costs_for(c, c).map(|costs| costs[0])
    }

    /// Costs for `lo..=hi`, provided the whole range is covered.
    pub fn costs_for(&self, lo: i64, hi: i64) -> Option<&[Distance]> {
        let idx = self.segments.partition_point(|seg| seg.end < lo);
        let seg = self.segments.get(idx)?;
        if lo < seg.start || hi > seg.end || lo > hi {
            return None;
        }
        let from = seg.offset + lo.abs_diff(seg.start) as usize;
        let to = seg.offset + hi.abs_diff(seg.start) as usize;
        Some(&self.costs[from..=to])
    }
}

/// Produces the cost at each covered coordinate, visited in strictly increasing order.
trait CostSweep {
    fn cost_at(&mut self, c: i64) -> Result<Distance, SolveError>;
}

struct DirectSweep<'a> {
    rects: &'a [Rectangle],
    axis: Axis,
}

impl CostSweep for DirectSweep<'_> {
    fn cost_at(&mut self, c: i64) -> Result<Distance, SolveError> {
        total_distance(self.rects, self.axis, c)
    }
}

fn total_distance(rects: &[Rectangle], axis: Axis, c: i64) -> Result<Distance, SolveError> {
    rects.iter().try_fold(0 as Distance, |acc, r| {
        r.distance_along(axis, c)
            .and_then(|d| acc.checked_add(d))
            .ok_or(SolveError::Overflow { axis })
    })
}

/// Running-sum sweep.
///
/// Stepping from `pos` to `c` changes the cost by `(c - pos) * (2 * below - total)`
/// as long as no attendee sits strictly between the two, where `below` is the
/// attendee weight at or left of `pos`. The sweep only jumps over uncovered
/// coordinates, so that always holds.
struct IncrementalSweep<'a> {
    rects: &'a [Rectangle],
    axis: Axis,
    total: i128,
    /// `(lo, weight)` sorted by `lo`.
    enters: Vec<(i64, i128)>,
    /// `(hi, weight)` sorted by `hi`.
    leaves: Vec<(i64, i128)>,
    next_enter: usize,
    next_leave: usize,
    density: i128,
    below: i128,
    pos: Option<i64>,
    cost: i128,
}

impl<'a> IncrementalSweep<'a> {
    fn new(rects: &'a [Rectangle], axis: Axis) -> Result<Self, SolveError> {
        let total = rects.iter().try_fold(0u64, |acc, r| {
            r.attendees()
                .and_then(|n| acc.checked_add(n))
                .ok_or(SolveError::Overflow { axis })
        })?;

        let weight = |r: &Rectangle| i128::from(r.cross_extent(axis));
        let mut enters: Vec<_> = rects.iter().map(|r| (r.span(axis).0, weight(r))).collect();
        let mut leaves: Vec<_> = rects.iter().map(|r| (r.span(axis).1, weight(r))).collect();
        enters.sort_unstable_by_key(|&(lo, _)| lo);
        leaves.sort_unstable_by_key(|&(hi, _)| hi);

        Ok(IncrementalSweep {
            rects,
            axis,
            total: i128::from(total),
            enters,
            leaves,
            next_enter: 0,
            next_leave: 0,
            density: 0,
            below: 0,
            pos: None,
            cost: 0,
        })
    }
}

impl CostSweep for IncrementalSweep<'_> {
    fn cost_at(&mut self, c: i64) -> Result<Distance, SolveError> {
        let overflow = SolveError::Overflow { axis: self.axis };

        self.cost = match self.pos {
            None => i128::from(total_distance(self.rects, self.axis, c)?),
            Some(pos) => {
                let slope = 2 * self.below - self.total;
                let step = i128::from(c) - i128::from(pos);
                step.checked_mul(slope)
                    .and_then(|delta| self.cost.checked_add(delta))
                    .ok_or_else(|| overflow.clone())?
            }
        };

        while let Some(&(lo, w)) = self.enters.get(self.next_enter) {
            if lo > c {
                break;
            }
            self.density += w;
            self.next_enter += 1;
        }
        while let Some(&(hi, w)) = self.leaves.get(self.next_leave) {
            if hi >= c {
                break;
            }
            self.density -= w;
            self.next_leave += 1;
        }
        self.below += self.density;
        self.pos = Some(c);

        Distance::try_from(self.cost).map_err(|_| overflow)
    }
}
