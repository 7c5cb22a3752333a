//! Equal-width histograms of coordinates and a chi-squared uniformity test
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::point::PointSet;
use special::Gamma;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum HistogramError {
    /// A histogram needs at least one bin
    ZeroBins,
    /// lo >= hi, or an edge was infinite or NaN
    InvalidRange { lo: f64, hi: f64 },
}

/// Χ<sup>2</sup> (Chi-squared) goodness-of-fit test.
///
/// Returns the statistic and the p-value. `f_obs` must contain at least one
/// observation.
///
/// # Example
///
/// Test whether the observed counts were generated uniformly.
///
/// ```
/// use montepi::histogram::x2_test;
///
/// // The observed counts/frequencies
/// let f_obs: Vec<u32> = vec![28, 31, 40, 35];
///
/// // The probabilty with which each entry should occur
/// let ps: Vec<f64> = vec![0.25; 4];
///
/// let (stat, p) = x2_test(&f_obs, &ps);
/// assert!(p > 0.05);
/// ```
pub fn x2_test(f_obs: &[u32], ps: &[f64]) -> (f64, f64) {
    let k = f_obs.len();
    let nf = f_obs.iter().map(|&ct| f64::from(ct)).sum::<f64>();
    let x2 = nf
        * f_obs.iter().zip(ps.iter()).fold(0.0, |acc, (&o, &p)| {
            acc + (f64::from(o) / nf - p).powi(2) / p
        });

    let df = (k - 1) as f64;
    let p = 1.0 - (x2 / 2.0).inc_gamma(df / 2.0);
    (x2, p)
}

fn check_range(lo: f64, hi: f64) -> Result<(), HistogramError> {
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        Err(HistogramError::InvalidRange { lo, hi })
    } else {
        Ok(())
    }
}

/// Index of the bin `x` falls into. The upper edge belongs to the last bin.
fn bin_index(x: f64, lo: f64, hi: f64, bins: usize) -> Option<usize> {
    if !(lo..=hi).contains(&x) {
        return None;
    }
    let ix = ((x - lo) / (hi - lo) * bins as f64).floor() as usize;
    Some(ix.min(bins - 1))
}

fn edges(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
    let width = (hi - lo) / bins as f64;
    (0..=bins).map(|ix| (ix as f64).mul_add(width, lo)).collect()
}

fn uniformity_of(counts: &[u32]) -> (f64, f64) {
    if counts.iter().all(|&ct| ct == 0) {
        // nothing observed, nothing to reject
        return (0.0, 1.0);
    }
    let ps = vec![1.0 / counts.len() as f64; counts.len()];
    x2_test(counts, &ps)
}

/// Histogram of scalar values over equal-width bins on [lo, hi]
///
/// # Example
///
/// ```
/// use montepi::histogram::Histogram1d;
///
/// let h = Histogram1d::unit(&[0.05, 0.15, 0.16, 1.0], 10).unwrap();
///
/// assert_eq!(h.counts()[0], 1);
/// assert_eq!(h.counts()[1], 2);
/// // the upper edge lands in the last bin
/// assert_eq!(h.counts()[9], 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Histogram1d {
    lo: f64,
    hi: f64,
    counts: Vec<u32>,
}

impl Histogram1d {
    /// Bin `values` into `bins` equal-width bins on [lo, hi]. Values outside
    /// the range (and NaN) are dropped.
    pub fn new(
        values: &[f64],
        bins: usize,
        (lo, hi): (f64, f64),
    ) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        check_range(lo, hi)?;

        let mut counts = vec![0_u32; bins];
        values
            .iter()
            .filter_map(|&x| bin_index(x, lo, hi, bins))
            .for_each(|ix| counts[ix] += 1);

        Ok(Histogram1d { lo, hi, counts })
    }

    /// Histogram on [0, 1]
    pub fn unit(values: &[f64], bins: usize) -> Result<Self, HistogramError> {
        Self::new(values, bins, (0.0, 1.0))
    }

    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of values that landed in a bin
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// The `bins + 1` bin edges
    pub fn edges(&self) -> Vec<f64> {
        edges(self.lo, self.hi, self.bins())
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.hi - self.lo) / self.bins() as f64
    }

    /// Chi-squared test of the counts against equal bin probabilities.
    /// An empty histogram gives `(0.0, 1.0)`.
    pub fn uniformity(&self) -> (f64, f64) {
        uniformity_of(&self.counts)
    }
}

/// Joint histogram of points over the unit square
///
/// Counts are stored row-major by x bin, then y bin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Histogram2d {
    bins_x: usize,
    bins_y: usize,
    counts: Vec<u32>,
}

/// One cell of a `Histogram2d`: its x and y extents and its count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub count: u32,
}

impl Histogram2d {
    /// Bin the points of `points` into `bins_x` × `bins_y` cells over
    /// [0, 1]².
    ///
    /// # Example
    ///
    /// ```
    /// use montepi::histogram::Histogram2d;
    /// use montepi::point::{Point, PointSet};
    ///
    /// let ps = PointSet::from(vec![
    ///     Point::new(0.05, 0.05),
    ///     Point::new(0.05, 0.95),
    ///     Point::new(0.95, 0.95),
    /// ]);
    /// let h = Histogram2d::from_points(&ps, 10, 10).unwrap();
    ///
    /// assert_eq!(h.count(0, 0), 1);
    /// assert_eq!(h.count(0, 9), 1);
    /// assert_eq!(h.count(9, 9), 1);
    /// assert_eq!(h.count(9, 0), 0);
    /// ```
    pub fn from_points(
        points: &PointSet,
        bins_x: usize,
        bins_y: usize,
    ) -> Result<Self, HistogramError> {
        if bins_x == 0 || bins_y == 0 {
            return Err(HistogramError::ZeroBins);
        }

        let mut counts = vec![0_u32; bins_x * bins_y];
        points
            .iter()
            .filter_map(|p| {
                let ix = bin_index(p.x(), 0.0, 1.0, bins_x)?;
                let iy = bin_index(p.y(), 0.0, 1.0, bins_y)?;
                Some(ix * bins_y + iy)
            })
            .for_each(|ix| counts[ix] += 1);

        Ok(Histogram2d {
            bins_x,
            bins_y,
            counts,
        })
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.bins_x, self.bins_y)
    }

    /// Count in x bin `ix`, y bin `iy`
    ///
    /// # Panics
    ///
    /// If either index is out of bounds.
    pub fn count(&self, ix: usize, iy: usize) -> u32 {
        assert!(ix < self.bins_x && iy < self.bins_y);
        self.counts[ix * self.bins_y + iy]
    }

    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn min_count(&self) -> u32 {
        self.counts.iter().copied().min().unwrap_or(0)
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn x_edges(&self) -> Vec<f64> {
        edges(0.0, 1.0, self.bins_x)
    }

    pub fn y_edges(&self) -> Vec<f64> {
        edges(0.0, 1.0, self.bins_y)
    }

    /// Every cell, in storage order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let xe = self.x_edges();
        let ye = self.y_edges();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let ix = i / self.bins_y;
            let iy = i % self.bins_y;
            Cell {
                x: (xe[ix], xe[ix + 1]),
                y: (ye[iy], ye[iy + 1]),
                count,
            }
        })
    }

    /// Chi-squared test of the cell counts against equal cell
    /// probabilities. An empty histogram gives `(0.0, 1.0)`.
    pub fn uniformity(&self) -> (f64, f64) {
        uniformity_of(&self.counts)
    }
}

impl std::error::Error for HistogramError {}

impl fmt::Display for HistogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBins => write!(f, "histogram needs at least one bin"),
            Self::InvalidRange { lo, hi } => {
                write!(f, "invalid range: (lo, hi) = ({}, {})", lo, hi)
            }
        }
    }
}
