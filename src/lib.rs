//! footprint: umbrella crate re-exporting the estimator core.
//!
//! Integration tests under `tests/` link against this crate.

pub use footprint_core::*;
