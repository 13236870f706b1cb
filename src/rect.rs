use std::fmt;

/// Sum of Manhattan distances, in attendee-units.
pub type Distance = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// An axis-aligned block of attendees, one per lattice point, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Rectangle {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Rectangle { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn width(&self) -> u64 {
        self.x2.abs_diff(self.x1) + 1
    }

    #[inline]
    pub fn height(&self) -> u64 {
        self.y2.abs_diff(self.y1) + 1
    }

    /// Inclusive `(lo, hi)` bounds on `axis`.
    #[inline]
    pub fn span(&self, axis: Axis) -> (i64, i64) {
        match axis {
            Axis::X => (self.x1, self.x2),
            Axis::Y => (self.y1, self.y2),
        }
    }

    #[inline]
    pub fn extent(&self, axis: Axis) -> u64 {
        match axis {
            Axis::X => self.width(),
            Axis::Y => self.height(),
        }
    }

    /// Number of attendees sharing each coordinate on `axis`.
    #[inline]
    pub fn cross_extent(&self, axis: Axis) -> u64 {
        self.extent(axis.other())
    }

    /// Attendee count, `None` if it does not fit in a `u64`.
    pub fn attendees(&self) -> Option<u64> {
        self.width().checked_mul(self.height())
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }

    pub fn translated(&self, dx: i64, dy: i64) -> Rectangle {
        Rectangle::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// Total distance along `axis` from every attendee of this rectangle to `target`.
    ///
    /// Only the `axis` component of each Manhattan distance is counted, so every
    /// column (or row) contributes once per attendee on the other axis.
    /// Returns `None` when the total does not fit in a [`Distance`].
    pub fn distance_along(&self, axis: Axis, target: i64) -> Option<Distance> {
        let (lo, hi) = self.span(axis);
        let line = line_distance(lo, hi, target)?;
        let total = line.checked_mul(i128::from(self.cross_extent(axis)))?;
        Distance::try_from(total).ok()
    }

    pub fn distance_along_x_to(&self, target_x: i64) -> Option<Distance> {
        self.distance_along(Axis::X, target_x)
    }

    pub fn distance_along_y_to(&self, target_y: i64) -> Option<Distance> {
        self.distance_along(Axis::Y, target_y)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

/// `sum(|target - v|)` for every integer `v` in `lo..=hi`.
fn line_distance(lo: i64, hi: i64, target: i64) -> Option<i128> {
    let (lo, hi, t) = (i128::from(lo), i128::from(hi), i128::from(target));
    // 0 + 1 + ... + n
    let triangle = |n: i128| n.checked_mul(n + 1).map(|v| v / 2);

    if t <= lo || t >= hi {
        let n = hi - lo + 1;
        let gap = if t <= lo { lo - t } else { t - hi };
        n.checked_mul(gap)?.checked_add(triangle(n - 1)?)
    } else {
        triangle(t - lo)?.checked_add(triangle(hi - t)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_along(rect: &Rectangle, axis: Axis, target: i64) -> u64 {
        let (lo, hi) = rect.span(axis);
        (lo..=hi).map(|v| target.abs_diff(v)).sum::<u64>() * rect.cross_extent(axis)
    }

    #[test]
    fn test_extents() {
        let r = Rectangle::new(-2, 3, 1, 3);
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 1);
        assert_eq!(r.cross_extent(Axis::X), 1);
        assert_eq!(r.cross_extent(Axis::Y), 4);
        assert_eq!(r.attendees(), Some(4));
        assert!(r.contains(-2, 3));
        assert!(!r.contains(2, 3));
    }

    #[test]
    fn test_distance_matches_naive_sum() {
        let rects = [
            Rectangle::new(0, 0, 0, 0),
            Rectangle::new(-3, 5, 4, 7),
            Rectangle::new(10, -10, 12, -1),
        ];
        for rect in &rects {
            for target in -15..=15 {
                assert_eq!(
                    rect.distance_along_x_to(target),
                    Some(naive_along(rect, Axis::X, target)),
                    "x: {} -> {}",
                    rect,
                    target
                );
                assert_eq!(
                    rect.distance_along_y_to(target),
                    Some(naive_along(rect, Axis::Y, target)),
                    "y: {} -> {}",
                    rect,
                    target
                );
            }
        }
    }

    #[test]
    fn test_distance_is_weighted_by_other_axis() {
        // Three rows of two columns; each column holds three attendees.
        let r = Rectangle::new(0, 0, 1, 2);
        assert_eq!(r.distance_along_x_to(0), Some(3));
        assert_eq!(r.distance_along_x_to(5), Some((5 + 4) * 3));
        assert_eq!(r.distance_along_y_to(1), Some(2 * 2));
    }

    #[test]
    fn test_distance_at_problem_limits() {
        let r = Rectangle::new(-1_000_000_000, 0, -999_000_001, 999);
        let expected: u64 = (-1_000_000_000i64..=-999_000_001)
            .map(|x| x.abs_diff(1_000_000_000))
            .sum::<u64>()
            * 1000;
        assert_eq!(r.distance_along_x_to(1_000_000_000), Some(expected));
    }

    #[test]
    fn test_distance_overflow_is_reported() {
        let r = Rectangle::new(i64::MIN / 2, 0, i64::MAX / 2, 0);
        assert_eq!(r.distance_along_x_to(0), None);
    }

    #[test]
    fn test_display_uses_input_order() {
        assert_eq!(Rectangle::new(1, 2, 3, 4).to_string(), "1 2 3 4");
    }
}
