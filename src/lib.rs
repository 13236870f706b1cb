//! Meet and Party: pick the attendee whose home minimizes the total Manhattan
//! distance travelled by every attendee, where attendees fill the lattice
//! points of disjoint rectangles.

pub mod axis;
pub mod cases;
pub mod config;
pub mod error;
pub mod gen;
pub mod rect;
pub mod scan;
pub mod solver;

pub use axis::{AxisCostTable, Strategy};
pub use cases::{format_answer, parse_cases, write_cases, Case, ParseError};
pub use error::SolveError;
pub use rect::{Axis, Distance, Rectangle};
pub use scan::Solution;
pub use solver::{solve, Solver};
