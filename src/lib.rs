//! Monte Carlo estimation of π.
//!
//! Points are drawn uniformly from the unit square [0, 1]², and the share of
//! them that land inside the inscribed quarter disk (x² + y² ≤ 1) approaches
//! π/4 as the number of points grows.
//!
//! ```
//! use montepi::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let mut rng = Xoshiro256Plus::seed_from_u64(1337);
//!
//! let points = generate(100_000, &mut rng);
//! let pi_est = estimate(&points).unwrap();
//!
//! assert!((pi_est - std::f64::consts::PI).abs() < 0.05);
//! ```
//!
//! The sweep runner repeats the estimate over a range of sample sizes so the
//! convergence can be inspected (or plotted with the `plot` feature).
//!
//! ```
//! use montepi::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let config = SweepConfig::new(100, 1_100, 100).unwrap();
//! let result = sweep(&config, &mut rng).unwrap();
//!
//! assert_eq!(result.len(), 10);
//! assert_eq!(result.sizes()[9], 1_000);
//! ```
pub mod consts;
pub mod estimate;
pub mod histogram;
#[cfg(feature = "cli")]
pub mod logging;
pub mod point;
#[cfg(feature = "plot")]
pub mod plot;
pub mod prelude;
pub mod sampler;
pub mod sweep;
pub mod traits;

/// Implements `Display` through the type's `From<&T> for String` impl
#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}
