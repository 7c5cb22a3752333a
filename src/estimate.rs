//! Estimating π from the share of points inside the quarter disk
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::QUADRANT_SCALE;
use crate::impl_display;
use crate::point::{Point, PointSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum EstimateError {
    /// No points were supplied, so the inside ratio is undefined
    EmptyPointSet,
}

/// Counts of points inside the quarter disk out of all points classified
///
/// # Example
///
/// ```
/// use montepi::estimate::Tally;
/// use montepi::point::{Point, PointSet};
///
/// let ps = PointSet::from(vec![
///     Point::new(0.1, 0.1),
///     Point::new(0.9, 0.9),
/// ]);
/// let tally = Tally::from_points(&ps);
///
/// assert_eq!(tally.inside(), 1);
/// assert_eq!(tally.total(), 2);
/// assert_eq!(tally.estimate(), Ok(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Tally {
    inside: usize,
    total: usize,
}

impl Tally {
    /// Classify every point of `points`
    pub fn from_points(points: &PointSet) -> Self {
        points.iter().collect()
    }

    /// Number of points with x² + y² ≤ 1
    #[inline]
    pub fn inside(&self) -> usize {
        self.inside
    }

    /// Number of points classified
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Add one point to the tally
    #[inline]
    pub fn observe(&mut self, point: &Point) {
        self.total += 1;
        if point.in_quarter_disk() {
            self.inside += 1;
        }
    }

    /// k / n, the share of points inside
    pub fn ratio(&self) -> Result<f64, EstimateError> {
        if self.total == 0 {
            Err(EstimateError::EmptyPointSet)
        } else {
            Ok(self.inside as f64 / self.total as f64)
        }
    }

    /// 4 k / n
    pub fn estimate(&self) -> Result<f64, EstimateError> {
        self.ratio().map(|r| QUADRANT_SCALE * r)
    }
}

impl<'a> FromIterator<&'a Point> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a Point>>(iter: I) -> Self {
        iter.into_iter().fold(Tally::default(), |mut tally, p| {
            tally.observe(p);
            tally
        })
    }
}

impl From<&Tally> for String {
    fn from(t: &Tally) -> String {
        format!("{}/{} inside", t.inside, t.total)
    }
}

impl_display!(Tally);

/// Estimate π as 4 k / n, where k of the n points in `points` fall in the
/// quarter disk.
///
/// An empty set has no defined estimate and returns
/// [`EstimateError::EmptyPointSet`].
///
/// # Example
///
/// ```
/// use montepi::estimate::{estimate, EstimateError};
/// use montepi::point::{Point, PointSet};
///
/// let inside = PointSet::repeat(Point::origin(), 10);
/// assert_eq!(estimate(&inside), Ok(4.0));
///
/// let outside = PointSet::repeat(Point::new(1.0, 1.0), 10);
/// assert_eq!(estimate(&outside), Ok(0.0));
///
/// assert_eq!(estimate(&PointSet::default()), Err(EstimateError::EmptyPointSet));
/// ```
pub fn estimate(points: &PointSet) -> Result<f64, EstimateError> {
    Tally::from_points(points).estimate()
}

impl std::error::Error for EstimateError {}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPointSet => {
                write!(f, "cannot estimate pi from an empty point set")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::generate;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    const TOL: f64 = 1E-12;

    #[test]
    fn all_origin_is_four() {
        let ps = PointSet::repeat(Point::origin(), 1_000);
        assert_eq!(estimate(&ps), Ok(4.0));
    }

    #[test]
    fn all_far_corner_is_zero() {
        let ps = PointSet::repeat(Point::new(1.0, 1.0), 1_000);
        assert_eq!(estimate(&ps), Ok(0.0));
    }

    #[test]
    fn empty_set_is_an_error() {
        let ps = PointSet::default();
        assert_eq!(estimate(&ps), Err(EstimateError::EmptyPointSet));
        assert_eq!(Tally::default().ratio(), Err(EstimateError::EmptyPointSet));
    }

    #[test]
    fn arc_points_count_as_inside() {
        let ps = PointSet::from(vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(0.9, 0.9),
        ]);
        let tally = Tally::from_points(&ps);
        assert_eq!(tally.inside(), 2);
        assert::close(tally.estimate().unwrap(), 2.0, TOL);
    }

    #[test]
    fn observe_matches_from_points() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let ps = generate(1_000, &mut rng);

        let mut tally = Tally::default();
        ps.iter().for_each(|p| tally.observe(p));

        assert_eq!(tally, Tally::from_points(&ps));
    }

    #[test]
    fn display() {
        let ps = PointSet::from(vec![Point::origin(), Point::new(1.0, 1.0)]);
        assert_eq!(Tally::from_points(&ps).to_string(), "1/2 inside");
        assert_eq!(
            EstimateError::EmptyPointSet.to_string(),
            "cannot estimate pi from an empty point set"
        );
    }

    #[test]
    fn large_sample_is_near_pi() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x5EED);
        let ps = generate(1_000_000, &mut rng);
        assert::close(estimate(&ps).unwrap(), std::f64::consts::PI, 1E-2);
    }

    fn arb_point_set() -> impl Strategy<Value = PointSet> {
        prop::collection::vec((0.0_f64..=1.0, 0.0_f64..=1.0), 1..500)
            .prop_map(|xys| xys.into_iter().map(Point::from).collect::<PointSet>())
    }

    proptest! {
        #[test]
        fn estimate_is_between_zero_and_four(ps in arb_point_set()) {
            let pi_est = estimate(&ps).unwrap();
            prop_assert!((0.0..=4.0).contains(&pi_est));
        }

        #[test]
        fn inside_never_exceeds_total(ps in arb_point_set()) {
            let tally = Tally::from_points(&ps);
            prop_assert!(tally.inside() <= tally.total());
            prop_assert_eq!(tally.total(), ps.len());
        }
    }
}
