//! Points in the unit square and sets of them
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;

/// A point (x, y) in the unit square
///
/// # Example
///
/// ```
/// # use montepi::point::Point;
/// let p = Point::new(1.0, 0.0);
///
/// // the arc itself counts as inside
/// assert!(p.in_quarter_disk());
/// assert!(!Point::new(1.0, 1.0).in_quarter_disk());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The origin, (0, 0)
    #[inline]
    pub fn origin() -> Self {
        Point::new(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared euclidean distance from the origin
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns `true` if x² + y² ≤ 1. Points on the arc are inside.
    #[inline]
    pub fn in_quarter_disk(&self) -> bool {
        self.norm_sq() <= 1.0
    }

    /// Returns `true` if both coordinates lie in [0, 1]
    #[inline]
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<&Point> for String {
    fn from(p: &Point) -> String {
        format!("({}, {})", p.x, p.y)
    }
}

impl_display!(Point);

/// An ordered, immutable collection of points
///
/// A `PointSet` is only ever built whole, either by a sampler or from an
/// existing collection of points.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// A set holding `n` copies of `point`
    ///
    /// # Example
    ///
    /// ```
    /// # use montepi::point::{Point, PointSet};
    /// let ps = PointSet::repeat(Point::origin(), 3);
    /// assert_eq!(ps.len(), 3);
    /// ```
    pub fn repeat(point: Point, n: usize) -> Self {
        PointSet {
            points: vec![point; n],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points as a slice
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The x coordinates, in order
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(Point::x).collect()
    }

    /// The y coordinates, in order
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(Point::y).collect()
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        PointSet { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointSet {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
