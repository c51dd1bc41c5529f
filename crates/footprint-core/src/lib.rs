#![forbid(unsafe_code)]
//! footprint-core: the carbon-footprint estimator.
//!
//! This crate contains only *pure* types and functions: the static emission
//! factor table, lenient coercion of raw form input, the aggregation that turns
//! an input into a per-category breakdown, and a presentation-boundary report.
//! There is **no I/O** here; the `footprint` binary owns files and terminals.
//!
//! ```
//! use footprint_core::prelude::*;
//!
//! let input = FootprintInput::default().with_electricity("100").with_diet(Diet::Vegan);
//! let result = compute(&input, EmissionFactorTable::builtin()).unwrap();
//! assert_eq!(result.total, 137.0);
//! ```

pub mod category;
pub mod compute;
pub mod config;
pub mod error;
pub mod factors;
pub mod hash;
pub mod input;
pub mod numeric;
pub mod prelude;
pub mod report;

pub use compute::{compute, Estimator, FootprintResult};
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
