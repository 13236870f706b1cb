//! Random, valid case files for benchmarking.

use std::collections::HashSet;

use rand::prelude::*;
use rand_distr::Geometric;
use serde::Deserialize;
use tracing::debug;

use crate::cases::Case;
use crate::rect::Rectangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    pub cases: usize,
    pub max_rectangles: usize,
    /// Upper bound on attendees per case.
    pub max_attendees: u64,
    /// Coordinates stay within `-max_coordinate..=max_coordinate`.
    pub max_coordinate: i64,
    pub max_side: i64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            cases: 10,
            max_rectangles: 100,
            max_attendees: 1000,
            max_coordinate: 1_000_000_000,
            max_side: 20,
            seed: 1234,
        }
    }
}

pub fn generate_cases(config: &GeneratorConfig) -> Vec<Case> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.cases)
        .map(|_| generate_case(config, &mut rng))
        .collect()
}

/// Each rectangle gets its own cell of a `cell x cell` lattice, which keeps
/// every pair disjoint without any overlap checks.
pub fn generate_case<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Case {
    let max_coordinate = config.max_coordinate.max(0);
    let extent = 2 * max_coordinate + 1;
    let cell = config.max_side.clamp(1, extent);
    let per_axis = (extent / cell) as u64;
    let total_cells = per_axis.saturating_mul(per_axis);

    let max_rects = (config.max_rectangles.max(1) as u64)
        .min(total_cells)
        .min(config.max_attendees.max(1));
    let num_rects = rng.gen_range(1..=max_rects);

    let mut cells = HashSet::with_capacity(num_rects as usize);
    while (cells.len() as u64) < num_rects {
        cells.insert((rng.gen_range(0..per_axis), rng.gen_range(0..per_axis)));
    }
    // HashSet order is not seeded; sort so the same seed yields the same case.
    let mut cells: Vec<(u64, u64)> = cells.into_iter().collect();
    cells.sort_unstable();
    cells.shuffle(rng);

    let p = (2.0 / cell as f64).min(1.0);
    let sides = Geometric::new(p).expect("probability is within (0, 1]");

    let mut remaining = config.max_attendees.max(1);
    let mut rectangles = Vec::with_capacity(cells.len());
    for (i, &(cx, cy)) in cells.iter().enumerate() {
        // Leave at least one attendee for every rectangle still to come.
        let share = remaining - (cells.len() - i - 1) as u64;
        let w = (1 + sides.sample(rng)).min(cell as u64).min(share);
        let h = (1 + sides.sample(rng)).min(cell as u64).min(share / w);
        remaining -= w * h;

        let (w, h) = (w as i64, h as i64);
        let x1 = -max_coordinate + cx as i64 * cell + rng.gen_range(0..=cell - w);
        let y1 = -max_coordinate + cy as i64 * cell + rng.gen_range(0..=cell - h);
        rectangles.push(Rectangle::new(x1, y1, x1 + w - 1, y1 + h - 1));
    }

    debug!(
        rectangles = rectangles.len(),
        attendees = config.max_attendees.max(1) - remaining,
        "generated case"
    );
    Case { rectangles }
}
