//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::estimate::{estimate, EstimateError, Tally};
#[doc(no_inline)]
pub use crate::point::{Point, PointSet};
#[doc(no_inline)]
pub use crate::sampler::{generate, UnitSquare};
#[doc(no_inline)]
pub use crate::sweep::{sweep, SweepConfig, SweepError, SweepResult};
#[doc(no_inline)]
pub use crate::traits::*;
