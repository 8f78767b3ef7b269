//! Dimension-agnostic vectors.
//!
//! Any point type can take part in the arithmetic and clustering in this crate by
//! implementing [`Vector`]: it exposes its components as a slice of `f32` and knows
//! how to build a new instance of itself from a component list. Everything else
//! (addition, subtraction, distances, centroids) is provided on top of that.
//!
//! ```rust
//! use vecn::{centroid, Point, Vector};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(10.0, 10.0);
//!
//! assert_eq!(a.squared_distance(&b).unwrap(), 200.0);
//! assert_eq!(centroid(&[a, b]), Some(Point::new(5.0, 5.0)));
//! ```
//!
//! ## Equality
//!
//! Equality is exact: two vectors are equal iff they have the same length and
//! every component compares equal with `==`. There is no epsilon.
//! [`Vector::same_components`] compares across different concrete types.

use std::fmt;

use crate::cluster::util::squared_euclidean;
use crate::error::{check_dim, Error, Result};

/// A fixed-length ordered tuple of `f32` components.
///
/// Implementors only provide [`components`](Vector::components) and
/// [`create`](Vector::create). Dimensionality is the component count and is
/// fixed for the lifetime of a value; operations never mutate their operands.
pub trait Vector: Clone + Send + Sync {
    /// The components of this vector, in order.
    fn components(&self) -> &[f32];

    /// Build a new vector of the same concrete type from raw components.
    ///
    /// Arithmetic in this crate only calls this with component lists whose length
    /// has already been checked against the operands.
    fn create(components: Vec<f32>) -> Self;

    /// Number of components.
    #[inline]
    fn dim(&self) -> usize {
        self.components().len()
    }

    /// Component-wise sum.
    ///
    /// Fails with [`Error::DimensionMismatch`] when `other` has a different
    /// dimensionality.
    fn add(&self, other: &Self) -> Result<Self> {
        zip_with(self, other, |a, b| a + b)
    }

    /// Component-wise difference `self - other`.
    fn subtract(&self, other: &Self) -> Result<Self> {
        zip_with(self, other, |a, b| a - b)
    }

    /// Sum of squared component differences.
    fn squared_distance(&self, other: &Self) -> Result<f32> {
        check_dim(self.dim(), other.dim())?;
        Ok(squared_euclidean(self.components(), other.components()))
    }

    /// Euclidean distance.
    fn distance(&self, other: &Self) -> Result<f32> {
        self.squared_distance(other).map(f32::sqrt)
    }

    /// Exact component equality against any other vector type.
    fn same_components<W: Vector>(&self, other: &W) -> bool {
        self.components() == other.components()
    }
}

fn zip_with<V: Vector>(a: &V, b: &V, f: impl Fn(f32, f32) -> f32) -> Result<V> {
    check_dim(a.dim(), b.dim())?;
    Ok(V::create(
        a.components()
            .iter()
            .zip(b.components())
            .map(|(&x, &y)| f(x, y))
            .collect(),
    ))
}

/// Component-wise arithmetic mean of `vectors`.
///
/// Returns `None` for an empty slice. All vectors are expected to share the
/// dimensionality of the first one; extra components of longer vectors are not
/// read. Use [`recompute_center`](crate::cluster::recompute_center) or
/// [`group_by`](crate::cluster::group_by) when inputs are not already validated.
pub fn centroid<V: Vector>(vectors: &[V]) -> Option<V> {
    let first = vectors.first()?;
    let mut sums = vec![0.0f32; first.dim()];
    for v in vectors {
        debug_assert_eq!(v.dim(), sums.len());
        for (s, x) in sums.iter_mut().zip(v.components()) {
            *s += x;
        }
    }

    let n = vectors.len() as f32;
    Some(V::create(sums.into_iter().map(|s| s / n).collect()))
}

/// A vector with a compile-time dimensionality.
///
/// Supports `+` and `-` directly since both operands always agree on `N`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<f32>", try_from = "Vec<f32>")
)]
pub struct Point<const N: usize>(pub [f32; N]);

/// A two-dimensional [`Point`].
pub type Point2 = Point<2>;

/// A three-dimensional [`Point`].
pub type Point3 = Point<3>;

impl<const N: usize> Point<N> {
    /// Wrap an array of components.
    pub const fn from_array(values: [f32; N]) -> Self {
        Self(values)
    }

    /// Point with every component set to zero.
    pub const fn zero() -> Self {
        Self([0.0; N])
    }
}

impl Point<2> {
    /// Create a 2D point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    /// First component.
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    /// Second component.
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
}

impl Point<3> {
    /// Create a 3D point.
    pub const fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    /// First component.
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    /// Second component.
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    /// Third component.
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
}

impl<const N: usize> Vector for Point<N> {
    fn components(&self) -> &[f32] {
        &self.0
    }

    /// # Panics
    ///
    /// Panics if `components.len() != N`.
    fn create(components: Vec<f32>) -> Self {
        let mut values = [0.0; N];
        values.copy_from_slice(&components);
        Self(values)
    }
}

impl<const N: usize> std::ops::Add for Point<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<const N: usize> std::ops::Sub for Point<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<const N: usize> From<[f32; N]> for Point<N> {
    fn from(values: [f32; N]) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<Point<N>> for Vec<f32> {
    fn from(p: Point<N>) -> Self {
        p.0.to_vec()
    }
}

impl<const N: usize> TryFrom<Vec<f32>> for Point<N> {
    type Error = Error;

    fn try_from(values: Vec<f32>) -> Result<Self> {
        check_dim(N, values.len())?;
        Ok(Self::create(values))
    }
}

impl<const N: usize> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{N}D vector [")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("]")
    }
}

/// Plain `Vec<f32>` rows are vectors of runtime dimensionality.
impl Vector for Vec<f32> {
    fn components(&self) -> &[f32] {
        self
    }

    fn create(components: Vec<f32>) -> Self {
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact_and_positional() {
        assert_eq!(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
        assert_ne!(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
        assert_ne!(Point::new(2.0, 1.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(0.0, 1.0));
        assert_ne!(Point::new(3.0, 1.0), Point::new(0.0, 1.0));
    }

    #[test]
    fn same_components_crosses_types() {
        let p = Point::new(1.0, 2.0);
        assert!(p.same_components(&vec![1.0f32, 2.0]));
        assert!(!p.same_components(&vec![1.0f32, 2.0, 0.0]));
        assert!(!p.same_components(&vec![2.0f32, 1.0]));
    }

    #[test]
    fn add_and_subtract() {
        let a = Point::new(23.0, 15.0);
        let b = Point::new(1.0, 2.0);
        assert_eq!(Vector::add(&a, &b).unwrap(), Point::new(24.0, 17.0));
        assert_eq!(a + b, Point::new(24.0, 17.0));

        let v0 = Point::new(0.0, 0.0);
        let v1 = Point::new(1.0, 1.0);
        let v2 = Point::new(2.0, 2.0);
        let v3 = Point::new(3.0, 3.0);
        assert_eq!(v3.subtract(&v2).unwrap(), v1);
        assert_eq!(v2 - v1, v1);
        assert_eq!(v3 - v3, v0);
        assert_eq!(v2 - v3, v0 - v1);
    }

    #[test]
    fn dimension_mismatch_fails_fast() {
        let a = vec![1.0f32, 2.0];
        let b = vec![1.0f32, 2.0, 3.0];
        let expected = Error::DimensionMismatch {
            expected: 2,
            found: 3,
        };
        assert_eq!(Vector::add(&a, &b).unwrap_err(), expected);
        assert_eq!(a.subtract(&b).unwrap_err(), expected);
        assert_eq!(a.squared_distance(&b).unwrap_err(), expected);
        assert_eq!(a.distance(&b).unwrap_err(), expected);
    }

    #[test]
    fn distances() {
        let origin = Point::new(0.0, 0.0);
        let p = Point::new(10.0, 10.0);
        assert_eq!(origin.squared_distance(&p).unwrap(), 200.0);
        assert_eq!(origin.distance(&p).unwrap(), 200.0f32.sqrt());

        let q = Point::new(654.0, 654.0);
        assert_eq!(q.distance(&q).unwrap(), 0.0);
        assert_eq!(q.squared_distance(&q).unwrap(), 0.0);
    }

    #[test]
    fn centroid_of_points() {
        let c = centroid(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert_eq!(c, Some(Point::new(5.0, 5.0)));

        let single = Point::xyz(1.5, -2.0, 7.0);
        assert_eq!(centroid(&[single]), Some(single));

        assert_eq!(centroid::<Point2>(&[]), None);
    }

    #[test]
    fn centroid_of_rows() {
        let rows = vec![vec![1.0f32, 2.0, 3.0], vec![3.0, 2.0, 1.0]];
        assert_eq!(centroid(&rows), Some(vec![2.0, 2.0, 2.0]));
    }

    #[test]
    fn try_from_checks_length() {
        let p: Point3 = vec![1.0, 2.0, 3.0].try_into().unwrap();
        assert_eq!(p, Point::xyz(1.0, 2.0, 3.0));

        let err = Point3::try_from(vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "2D vector [1, 2.5]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_sequence() {
        let p = Point::xyz(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0]");
        let back: Point3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Point3>("[1.0]").is_err());
    }
}
