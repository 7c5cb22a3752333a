//! Repeated estimation over an increasing range of sample sizes
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FROM, DEFAULT_LAST, DEFAULT_STEP};
use crate::estimate::{EstimateError, Tally};
use crate::sampler::generate;
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;
use std::iter::StepBy;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum SweepError {
    /// The first sample size was zero
    ZeroFrom,
    /// The increment was zero
    ZeroStep,
    /// to <= from, so there would be no sample sizes at all
    EmptyRange { from: usize, to: usize },
    /// Estimating one of the steps failed
    Estimate(EstimateError),
    /// A result had a different number of sizes and estimates
    LengthMismatch { sizes: usize, estimates: usize },
    /// The sample size at `index` was not larger than the one before it
    SizesNotIncreasing { index: usize },
}

/// The sample sizes a sweep visits: `from`, `from + step`, ... strictly
/// below `to`.
///
/// # Example
///
/// ```
/// use montepi::sweep::SweepConfig;
///
/// let half_open = SweepConfig::new(100, 500, 100).unwrap();
/// assert_eq!(half_open.sizes().collect::<Vec<_>>(), vec![100, 200, 300, 400]);
///
/// let inclusive = SweepConfig::inclusive(100, 500, 100).unwrap();
/// assert_eq!(inclusive.sizes().last(), Some(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "serde1", serde(try_from = "RawSweepConfig"))]
pub struct SweepConfig {
    from: usize,
    to: usize,
    step: usize,
}

#[cfg(feature = "serde1")]
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct RawSweepConfig {
    from: usize,
    to: usize,
    step: usize,
}

#[cfg(feature = "serde1")]
impl TryFrom<RawSweepConfig> for SweepConfig {
    type Error = SweepError;

    fn try_from(raw: RawSweepConfig) -> Result<Self, Self::Error> {
        SweepConfig::new(raw.from, raw.to, raw.step)
    }
}

impl SweepConfig {
    /// A sweep over the half-open range [from, to) in increments of `step`
    pub fn new(from: usize, to: usize, step: usize) -> Result<Self, SweepError> {
        if from == 0 {
            Err(SweepError::ZeroFrom)
        } else if step == 0 {
            Err(SweepError::ZeroStep)
        } else if to <= from {
            Err(SweepError::EmptyRange { from, to })
        } else {
            Ok(SweepConfig { from, to, step })
        }
    }

    /// A sweep whose range reaches `last` when `last - from` is a multiple
    /// of `step`. One step is added to the exclusive end.
    pub fn inclusive(
        from: usize,
        last: usize,
        step: usize,
    ) -> Result<Self, SweepError> {
        if last < from {
            return Err(SweepError::EmptyRange { from, to: last });
        }
        Self::new(from, last.saturating_add(step), step)
    }

    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of sample sizes visited
    pub fn n_steps(&self) -> usize {
        (self.to - self.from).div_ceil(self.step)
    }

    /// The largest sample size visited
    pub fn last(&self) -> usize {
        self.from + (self.n_steps() - 1) * self.step
    }

    pub fn sizes(&self) -> StepBy<Range<usize>> {
        (self.from..self.to).step_by(self.step)
    }

    /// A lazy sweep. Each call to `next` samples and classifies one point
    /// set, which is dropped before the step is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use montepi::sweep::SweepConfig;
    ///
    /// let mut rng = rand::thread_rng();
    /// let config = SweepConfig::new(1_000, 4_000, 1_000).unwrap();
    ///
    /// let totals: Vec<usize> = config
    ///     .sweep_iter(&mut rng)
    ///     .map(|step| step.tally().total())
    ///     .collect();
    ///
    /// assert_eq!(totals, vec![1_000, 2_000, 3_000]);
    /// ```
    pub fn sweep_iter<'r, R: Rng>(&self, rng: &'r mut R) -> Sweep<'r, R> {
        Sweep {
            sizes: self.sizes(),
            rng,
        }
    }
}

impl Default for SweepConfig {
    /// 10⁵ to 10⁶ inclusive in steps of 10⁵
    fn default() -> Self {
        SweepConfig {
            from: DEFAULT_FROM,
            to: DEFAULT_LAST + DEFAULT_STEP,
            step: DEFAULT_STEP,
        }
    }
}

/// One sample size of a sweep and the classification of its points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStep {
    n: usize,
    tally: Tally,
}

impl SweepStep {
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn estimate(&self) -> Result<f64, EstimateError> {
        self.tally.estimate()
    }
}

/// Lazy sweep iterator, see [`SweepConfig::sweep_iter`]
pub struct Sweep<'r, R: Rng> {
    sizes: StepBy<Range<usize>>,
    rng: &'r mut R,
}

impl<'r, R: Rng> Iterator for Sweep<'r, R> {
    type Item = SweepStep;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.sizes.next()?;
        let points = generate(n, &mut *self.rng);
        let tally = Tally::from_points(&points);
        Some(SweepStep { n, tally })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}

/// Sample sizes and the estimate of π obtained at each, paired by index
///
/// # Example
///
/// ```
/// use montepi::sweep::SweepResult;
///
/// let result = SweepResult::from_pairs(vec![(10, 3.0), (20, 3.2)]);
///
/// assert_eq!(result.last(), Some((20, 3.2)));
/// assert!((result.abs_errors()[0] - (std::f64::consts::PI - 3.0)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "serde1", serde(try_from = "RawSweepResult"))]
pub struct SweepResult {
    sizes: Vec<usize>,
    estimates: Vec<f64>,
}

#[cfg(feature = "serde1")]
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct RawSweepResult {
    sizes: Vec<usize>,
    estimates: Vec<f64>,
}

#[cfg(feature = "serde1")]
impl TryFrom<RawSweepResult> for SweepResult {
    type Error = SweepError;

    fn try_from(raw: RawSweepResult) -> Result<Self, Self::Error> {
        SweepResult::new(raw.sizes, raw.estimates)
    }
}

impl SweepResult {
    /// Build a result from parallel sequences. `sizes` and `estimates` must
    /// have the same length and `sizes` must be strictly increasing.
    ///
    /// # Example
    ///
    /// ```
    /// use montepi::sweep::{SweepError, SweepResult};
    ///
    /// assert!(SweepResult::new(vec![10, 20], vec![3.0, 3.2]).is_ok());
    /// assert_eq!(
    ///     SweepResult::new(vec![10, 20], vec![3.0]),
    ///     Err(SweepError::LengthMismatch { sizes: 2, estimates: 1 })
    /// );
    /// ```
    pub fn new(
        sizes: Vec<usize>,
        estimates: Vec<f64>,
    ) -> Result<Self, SweepError> {
        if sizes.len() != estimates.len() {
            return Err(SweepError::LengthMismatch {
                sizes: sizes.len(),
                estimates: estimates.len(),
            });
        }
        if let Some(ix) = sizes.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SweepError::SizesNotIncreasing { index: ix + 1 });
        }
        Ok(SweepResult { sizes, estimates })
    }

    /// Build a result from (n, estimate) pairs
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let (sizes, estimates) = pairs.into_iter().unzip();
        SweepResult { sizes, estimates }
    }

    #[inline]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    #[inline]
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// (n, estimate) pairs in sweep order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.sizes.iter().copied().zip(self.estimates.iter().copied())
    }

    /// The pair with the largest sample size
    pub fn last(&self) -> Option<(usize, f64)> {
        self.iter().last()
    }

    /// |π − estimate| for every step, i.e. the root of the squared error
    pub fn abs_errors(&self) -> Vec<f64> {
        self.estimates.iter().map(|est| (PI - est).abs()).collect()
    }

    /// Root mean squared error over all steps
    pub fn rms_error(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sse = self
            .estimates
            .iter()
            .map(|est| (PI - est).powi(2))
            .sum::<f64>();
        Some((sse / self.len() as f64).sqrt())
    }
}

/// Estimate π once for every sample size in `config`.
///
/// Each step draws a fresh point set from `rng`, classifies it and keeps
/// only the (n, estimate) pair. The first failure aborts the sweep.
///
/// # Example
///
/// ```
/// use montepi::sweep::{sweep, SweepConfig};
///
/// let mut rng = rand::thread_rng();
/// let config = SweepConfig::new(100, 1_100, 100).unwrap();
/// let result = sweep(&config, &mut rng).unwrap();
///
/// assert_eq!(result.sizes(), &[100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]);
/// assert!(result.estimates().iter().all(|est| (0.0..=4.0).contains(est)));
/// ```
pub fn sweep<R: Rng>(
    config: &SweepConfig,
    rng: &mut R,
) -> Result<SweepResult, SweepError> {
    let mut sizes = Vec::with_capacity(config.n_steps());
    let mut estimates = Vec::with_capacity(config.n_steps());

    for step in config.sweep_iter(rng) {
        let est = step.estimate()?;
        tracing::debug!(
            n = step.n(),
            inside = step.tally().inside(),
            estimate = est,
            "sweep step"
        );
        sizes.push(step.n());
        estimates.push(est);
    }

    let result = SweepResult { sizes, estimates };
    if let Some((n, est)) = result.last() {
        tracing::info!(
            steps = result.len(),
            n,
            estimate = est,
            abs_error = (PI - est).abs(),
            "sweep complete"
        );
    }
    Ok(result)
}

impl From<EstimateError> for SweepError {
    fn from(err: EstimateError) -> Self {
        SweepError::Estimate(err)
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Estimate(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrom => write!(f, "sample size must be positive"),
            Self::ZeroStep => write!(f, "step must be positive"),
            Self::EmptyRange { from, to } => {
                write!(f, "empty sweep: (from, to) = ({}, {})", from, to)
            }
            Self::Estimate(err) => write!(f, "estimate failed: {}", err),
            Self::LengthMismatch { sizes, estimates } => write!(
                f,
                "{} sample sizes but {} estimates",
                sizes, estimates
            ),
            Self::SizesNotIncreasing { index } => {
                write!(f, "sample size at index {} does not increase", index)
            }
        }
    }
}
