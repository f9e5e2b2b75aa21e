use crate::*;

/// A directed segment, stored as a starting point and a displacement.
///
/// The segment runs from `start` to `start + disp`.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vector2 {
    /// Where the segment begins.
    pub start: Point2,
    /// The `(dx, dy)` from start to end.
    pub disp: Point2,
}

impl Vector2 {
    /// A vector with the given displacement, starting at the origin.
    pub fn new(disp: Point2) -> Self {
        Self::from_start(Point2::zero(), disp)
    }

    pub fn from_start(start: Point2, disp: Point2) -> Self {
        Self { start, disp }
    }

    /// The segment joining two points.
    pub fn between(from: Point2, to: Point2) -> Self {
        Self::from_start(from, to.sub(from))
    }

    /// Where the segment finishes (`start + disp`).
    pub fn end(&self) -> Point2 {
        self.start.add(self.disp)
    }

    /// Euclidean length of the displacement.
    pub fn mag(&self) -> f64 {
        self.disp.mag()
    }

    /// Returns if the displacement is zero in both axes, within `eps`.
    pub fn is_zero(&self, eps: f64) -> bool {
        self.disp.approx_eq(Point2::zero(), eps)
    }

    /// Combine displacements, **keeping this vector's start**.
    ///
    /// `a.add(b)` and `b.add(a)` share a displacement but not a start.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_start(self.start, self.disp.add(other.disp))
    }

    /// Difference of displacements, keeping this vector's start.
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_start(self.start, self.disp.sub(other.disp))
    }

    pub fn dot(&self, other: &Self) -> f64 {
        dot_prod(self.disp, other.disp)
    }

    /// Signed area of the parallelogram spanned by both displacements.
    ///
    /// Positive when `other` turns counter-clockwise from `self`, zero when parallel.
    pub fn cross(&self, other: &Self) -> f64 {
        xprod(self.disp, other.disp)
    }

    /// The axis aligned box covering the segment.
    pub fn extents(&self) -> Extents2 {
        Extents2::from_corners(self.start, self.end())
    }

    /// Solve where the infinite lines through `self` and `other` meet.
    ///
    /// Returns `(s, t)` such that `self.start + s*self.disp == other.start + t*other.disp`,
    /// or `None` if the lines are parallel (including when either displacement is zero).
    pub fn line_params(&self, other: &Self) -> Option<(f64, f64)> {
        let det = self.cross(other);
        if det == 0.0 {
            return None;
        }

        // Cramer's rule on: s*u - t*v = v.start - u.start
        let d = other.start.sub(self.start);
        let s = xprod(d, other.disp) / det;
        let t = xprod(d, self.disp) / det;

        Some((s, t))
    }
}
