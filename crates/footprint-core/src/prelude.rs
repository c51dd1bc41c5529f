//! Convenience re-exports for callers.

pub use crate::category::{Category, Diet, ScalarCategory};
pub use crate::compute::{compute, CategoryEmission, ChartPoint, Estimator, FootprintResult};
pub use crate::config::{EstimatorConfig, NonFinitePolicy};
pub use crate::error::{Error, Result};
pub use crate::factors::{EmissionFactorTable, DIET_DAYS_PER_MONTH};
pub use crate::hash::Fingerprint;
pub use crate::input::FootprintInput;
pub use crate::numeric::{parse_lenient, round2};
pub use crate::report::{Report, ReportLine};
