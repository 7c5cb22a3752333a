//! Constants

/// First sample size of the default sweep
pub const DEFAULT_FROM: usize = 100_000;
/// Last sample size (inclusive) of the default sweep
pub const DEFAULT_LAST: usize = 1_000_000;
/// Increment between sample sizes of the default sweep
pub const DEFAULT_STEP: usize = 100_000;

/// Number of bins per axis used for distribution histograms
pub const DEFAULT_BINS: usize = 10;

/// Half-height of the y window around π in the convergence plot
pub const CONVERGENCE_ZOOM: f64 = 0.01;

/// Area ratio of the quarter disk to the unit square times this gives π
pub const QUADRANT_SCALE: f64 = 4.0;
