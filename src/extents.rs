use crate::*;

/// An axis aligned bounding box in 2D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extents2 {
    pub origin: Point2,
    pub size: Point2,
}

impl Extents2 {
    pub fn zero() -> Self {
        Self {
            origin: Point2::zero(),
            size: Point2::zero(),
        }
    }

    /// Build the extents covering two corners, in any order.
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let origin = a.min_all(b);
        let size = a.max_all(b).sub(origin);

        Self { origin, size }
    }

    pub fn max(&self) -> Point2 {
        self.origin.add(self.size)
    }

    pub fn intersection(self, other: Self) -> Option<Self> {
        self.intersects(other).then(|| {
            let origin = self.origin.max_all(other.origin);
            let max = self.max().min_all(other.max());
            Self {
                origin,
                size: max.sub(origin),
            }
        })
    }

    pub fn intersects(self, other: Self) -> bool {
        let outside = self.max().into_iter().zip(other.origin).any(|(m, c)| m < c)
            || self.origin.into_iter().zip(other.max()).any(|(o, c)| o > c);

        !outside
    }

    /// Expand the extents by a value.
    ///
    /// A negative value can be used to _shrink_ the extents.
    /// Shrinking beyond `size / 2` will result in a [`Self::zero`].
    /// `by` values that are non-finite are ignored and the original self is returned.
    ///
    /// # Example
    /// ```rust
    /// # use polygen::*;
    /// let e = Extents2::from_corners(Point2::one(), Point2::zero());
    ///
    /// assert_eq!(e.expand(0.5), Extents2 {
    ///     origin: [-0.5, -0.5],
    ///     size: [2.0, 2.0]
    /// });
    /// ```
    pub fn expand(self, by: f64) -> Self {
        if !by.is_finite() {
            return self;
        }

        let x = Point2::all(by);

        let size = self.size.add(x.scale(2.0));
        if size.into_iter().any(|x| x < 0.0) {
            return Self::zero();
        }

        let origin = self.origin.sub(x);

        Self { origin, size }
    }
}
