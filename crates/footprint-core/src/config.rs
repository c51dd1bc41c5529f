//! Estimator configuration.
//!
//! Defaults come from `EstimatorConfig::default()`, environment variables
//! override them, and the CLI overrides both with flags.
//!
//! | variable | field |
//! |---|---|
//! | `FOOTPRINT_NON_FINITE` | `non_finite` (`reject` or `clamp`) |
//! | `FOOTPRINT_CLAMP_LIMIT` | `clamp_limit` |
//! | `FOOTPRINT_TIPS` | `tip_count` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const ENV_NON_FINITE: &str = "FOOTPRINT_NON_FINITE";
pub const ENV_CLAMP_LIMIT: &str = "FOOTPRINT_CLAMP_LIMIT";
pub const ENV_TIPS: &str = "FOOTPRINT_TIPS";

/// What to do when a quantity or emission value is infinite or NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Fail with `Error::NonFinite`.
    #[default]
    Reject,
    /// Clamp each quantity to `[-clamp_limit, clamp_limit]` before use.
    Clamp,
}

impl FromStr for NonFinitePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(NonFinitePolicy::Reject),
            "clamp" => Ok(NonFinitePolicy::Clamp),
            other => Err(Error::Config(format!(
                "unknown non-finite policy '{other}'"
            ))),
        }
    }
}

impl fmt::Display for NonFinitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NonFinitePolicy::Reject => "reject",
            NonFinitePolicy::Clamp => "clamp",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub non_finite: NonFinitePolicy,
    /// Magnitude cap applied under `NonFinitePolicy::Clamp`.
    pub clamp_limit: f64,
    /// Tips shown per category when rendering a report.
    pub tip_count: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            non_finite: NonFinitePolicy::Reject,
            clamp_limit: 1.0e12,
            tip_count: 1,
        }
    }
}

impl EstimatorConfig {
    /// Defaults overridden by the process environment. Malformed values are
    /// errors naming the variable.
    pub fn try_from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Defaults overridden by an arbitrary variable lookup, then validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        cfg.apply_vars(lookup)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply overrides from `lookup`; unset variables leave fields alone.
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_NON_FINITE) {
            self.non_finite = v.parse().map_err(|e: Error| e.with_context(ENV_NON_FINITE))?;
        }
        if let Some(v) = lookup(ENV_CLAMP_LIMIT) {
            match v.trim().parse::<f64>() {
                Ok(limit) if limit.is_finite() && limit > 0.0 => self.clamp_limit = limit,
                _ => {
                    return Err(Error::Config(format!("invalid clamp limit '{v}'"))
                        .with_context(ENV_CLAMP_LIMIT))
                }
            }
        }
        if let Some(v) = lookup(ENV_TIPS) {
            self.tip_count = v.trim().parse().map_err(|_| {
                Error::Config(format!("invalid tip count '{v}'")).with_context(ENV_TIPS)
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.clamp_limit.is_finite() && self.clamp_limit > 0.0) {
            return Err(Error::Config(format!(
                "clamp limit must be positive and finite, got {}",
                self.clamp_limit
            )));
        }
        Ok(())
    }
}
