/// An axis-aligned rectangle on the (chromosome axis, signed position) plane.
///
/// Both spans are closed intervals: a rectangle contains its own edges, so a
/// point query on a gene boundary still hits the gene. Degenerate rectangles
/// (zero width, zero height, or both) are ordinary values, not special cases.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Rect {
    pub min: [i64; 2],
    pub max: [i64; 2],
}

impl Rect {
    /// Build a rectangle from two opposite corners, reordering each axis so
    /// that `min <= max` holds.
    pub fn from_corners(a: [i64; 2], b: [i64; 2]) -> Self {
        Rect {
            min: [a[0].min(b[0]), a[1].min(b[1])],
            max: [a[0].max(b[0]), a[1].max(b[1])],
        }
    }

    /// A degenerate rectangle covering exactly one point.
    #[inline]
    pub fn point(x: i64, y: i64) -> Self {
        Rect {
            min: [x, y],
            max: [x, y],
        }
    }

    /// Closed-interval intersection test on both axes.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min[0] <= other.max[0]
            && other.min[0] <= self.max[0]
            && self.min[1] <= other.max[1]
            && other.min[1] <= self.max[1]
    }

    /// Whether the point `(x, y)` lies inside this rectangle (edges included).
    #[inline]
    pub fn contains_point(&self, x: i64, y: i64) -> bool {
        self.min[0] <= x && x <= self.max[0] && self.min[1] <= y && y <= self.max[1]
    }

    /// The smallest rectangle covering both `self` and `other`.
    #[inline]
    pub fn envelope(&self, other: &Rect) -> Rect {
        Rect {
            min: [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            max: [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        }
    }

    /// Midpoint of the span on the given axis, used for space partitioning.
    #[inline]
    pub fn center(&self, axis: usize) -> i64 {
        // midpoint of a closed interval; average computed without overflow
        self.min[axis] + (self.max[axis] - self.min[axis]) / 2
    }
}

/// A value stored in the spatial index, tagged with its bounding rectangle.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Entry<T> {
    pub rect: Rect,
    pub value: T,
}
