//! Uniform sampling of points in the unit square [0, 1]²
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;
use crate::point::{Point, PointSet};
use crate::traits::Sampleable;
use rand::Rng;

/// The uniform distribution over the unit square, U(0, 1) × U(0, 1)
///
/// Both coordinates are drawn independently.
///
/// # Example
///
/// ```
/// use montepi::sampler::UnitSquare;
/// use montepi::traits::Sampleable;
///
/// let mut rng = rand::thread_rng();
/// let points = UnitSquare.sample(1_000, &mut rng);
///
/// assert!(points.iter().all(|p| p.in_unit_square()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct UnitSquare;

impl UnitSquare {
    #[inline]
    fn coordinate() -> rand_distr::Uniform<f64> {
        rand_distr::Uniform::new_inclusive(0.0, 1.0)
    }

    /// Draw `n` points into a new `PointSet`
    pub fn point_set<R: Rng>(&self, n: usize, rng: &mut R) -> PointSet {
        PointSet::from(self.sample(n, rng))
    }
}

impl Sampleable<Point> for UnitSquare {
    fn draw<R: Rng>(&self, rng: &mut R) -> Point {
        let u = Self::coordinate();
        let x = rng.sample(u);
        let y = rng.sample(u);
        Point::new(x, y)
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Point> {
        let u = Self::coordinate();
        (0..n)
            .map(|_| {
                let x = rng.sample(u);
                let y = rng.sample(u);
                Point::new(x, y)
            })
            .collect()
    }
}

impl From<&UnitSquare> for String {
    fn from(_: &UnitSquare) -> String {
        String::from("U(0, 1) × U(0, 1)")
    }
}

impl_display!(UnitSquare);

/// Generate `n` independent uniform points in [0, 1]².
///
/// `n = 0` yields an empty set. The generator's state is advanced by two
/// draws per point.
///
/// # Example
///
/// ```
/// use montepi::sampler::generate;
///
/// let mut rng = rand::thread_rng();
///
/// assert_eq!(generate(100, &mut rng).len(), 100);
/// assert!(generate(0, &mut rng).is_empty());
/// ```
pub fn generate<R: Rng>(n: usize, rng: &mut R) -> PointSet {
    UnitSquare.point_set(n, rng)
}
