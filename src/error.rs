use std::fmt::{self, Display};

use crate::rect::Axis;

/// Why a single case could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SolveError {
    /// The case has no rectangles, so there is no attendee to host the party.
    Empty,
    /// A distance sum on `axis` left the `u64` range.
    Overflow { axis: Axis },
    /// The x and y costs at `(x, y)` fit separately but not their sum.
    TotalOverflow { x: i64, y: i64 },
    /// A rectangle's range is missing from the cost table it was scanned against.
    UncoveredRange { axis: Axis, lo: i64, hi: i64 },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Empty => write!(f, "case has no rectangles"),
            SolveError::Overflow { axis } => {
                write!(f, "distance sum along {} does not fit in 64 bits", axis)
            }
            SolveError::TotalOverflow { x, y } => write!(
                f,
                "total distance at ({}, {}) does not fit in 64 bits",
                x, y
            ),
            SolveError::UncoveredRange { axis, lo, hi } => write!(
                f,
                "{} range {}..={} is not covered by the {} cost table",
                axis, lo, hi, axis
            ),
        }
    }
}

impl std::error::Error for SolveError {}
