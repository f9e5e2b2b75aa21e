use std::ops;

pub trait Point: Copy + Sized + IntoIterator<Item = f64> {
    /// Set all the values to this value.
    fn all(v: f64) -> Self;

    /// Set all values to zero.
    fn zero() -> Self {
        Self::all(0.)
    }

    /// Set all values to one.
    fn one() -> Self {
        Self::all(1.)
    }

    /// Scale point by multiplying all dimensions by `scalar`.
    fn scale(self, scalar: f64) -> Self;

    /// Flip the sign of every dimension.
    fn neg(self) -> Self {
        self.scale(-1.0)
    }

    /// Calculate the magnitude of the vector.
    fn mag(self) -> f64 {
        self.into_iter()
            .zip(self)
            .map(|(a, b)| a * b)
            .sum::<f64>()
            .sqrt()
    }

    /// Return the minimum of each dimension.
    fn min_all(self, b: Self) -> Self {
        xfm(self, b, f64::min)
    }

    /// Return the maximum of each dimension.
    fn max_all(self, b: Self) -> Self {
        xfm(self, b, f64::max)
    }

    /// All dimensions are finite.
    fn is_finite(self) -> bool {
        self.into_iter().all(f64::is_finite)
    }

    /// Each dimension is within `eps` of the other point's.
    ///
    /// An `eps` of zero is _exact_ component equality.
    fn approx_eq(self, other: Self, eps: f64) -> bool {
        self.into_iter().zip(other).all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Perform a transformation on each pair of dimensions.
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self;
}

pub trait Add<Rhs = Self> {
    fn add(self, rhs: Rhs) -> Self;
    fn sub(self, rhs: Rhs) -> Self
    where
        Self: Sized + Copy,
        Rhs: Point,
    {
        self.add(rhs.scale(-1.0))
    }
}

/// 2D Point (X,Y).
pub type Point2 = [f64; 2];

impl Add for Point2 {
    fn add(self, rhs: Self) -> Self {
        xfm(self, rhs, ops::Add::add)
    }

    fn sub(self, rhs: Self) -> Self {
        xfm(self, rhs, ops::Sub::sub)
    }
}
impl Point for Point2 {
    fn all(v: f64) -> Self {
        [v; 2]
    }
    fn scale(self, scalar: f64) -> Self {
        self.map(|f| f * scalar)
    }
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self {
        let [ax, ay] = self;
        let [bx, by] = b;
        [f(ax, bx), f(ay, by)]
    }
}

/// The `z` component of the 3D cross product of two planar vectors.
///
/// Positive when `b` is counter-clockwise of `a`.
pub fn xprod([ax, ay]: Point2, [bx, by]: Point2) -> f64 {
    ax * by - ay * bx
}

pub fn dot_prod([ax, ay]: Point2, [bx, by]: Point2) -> f64 {
    ax * bx + ay * by
}

/// Helper function which effectively transforms to [`Point::xfm`].
#[inline(always)]
pub fn xfm<P: Point, F: Fn(f64, f64) -> f64>(a: P, b: P, f: F) -> P {
    P::xfm(a, b, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    const NEG: f64 = -42.0;
    const RAT: f64 = 15.0342842480;

    #[test]
    fn point_adding() {
        let p = [0.0, 1.0].add([3.0, 1.0]);
        assert_eq!(p, [3.0, 2.0]);

        let p = [NEG, RAT].add(Point2::zero());
        assert_eq!(p, [NEG, RAT]);
    }

    #[test]
    fn point_subtracting() {
        let p = [NEG + 1.0, RAT + 1.0].sub([NEG, RAT]);
        assert_eq!(p, [1.0, 1.0]);
    }

    #[test]
    fn point_negating() {
        assert_eq!([-NEG, -RAT].neg(), [NEG, RAT]);
        assert_eq!(Point2::zero().neg(), [-0.0, -0.0]);
    }

    #[test]
    fn point_scaling() {
        let p = [0.0, 1.0].scale(2.0);
        assert_eq!(p, [0.0, 2.0]);

        let p = [-2.0, 0.5].scale(-0.5);
        assert_eq!(p, [1.0, -0.25]);
    }

    #[test]
    fn approx_equality() {
        assert!([1.0, 2.0].approx_eq([1.0, 2.0], 0.0));
        assert!(![1.0, 2.0].approx_eq([1.0, 2.0 + 1e-12], 0.0));
        assert!([1.0, 2.0].approx_eq([1.0, 2.0 + 1e-12], 1e-9));
        assert!(![1.0, 2.0].approx_eq([1.0, 2.1], 1e-9));
    }

    #[test]
    fn xproduct_test() {
        assert_eq!(xprod([1.0, 0.0], [0.0, 1.0]), 1.0);
        assert_eq!(xprod([0.0, 1.0], [1.0, 0.0]), -1.0);
        assert_eq!(xprod([2.0, 2.0], [4.0, 4.0]), 0.0);
    }

    #[test]
    fn mag_testing() {
        let m = [3.0, 4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);

        let m = [3.0, -4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);

        let m = [NEG, RAT].mag() - 44.6097;
        assert!(m.abs() < 1e-4);
    }

    #[quickcheck]
    fn add_then_sub_is_identity(a: (i32, i32), b: (i32, i32)) -> bool {
        // integral values keep the sum exact
        let a = [a.0 as f64, a.1 as f64];
        let b = [b.0 as f64, b.1 as f64];

        a.add(b).sub(b) == a
    }

    #[quickcheck]
    fn double_negation_is_identity(x: f64, y: f64) -> TestResult {
        let p = [x, y];
        if !p.is_finite() {
            return TestResult::discard();
        }

        TestResult::from_bool(p.neg().neg() == p)
    }
}
