//! The footprint aggregator.
//!
//! Each scalar category is `quantity × factor`; diet is `factor × 30`. The
//! total is the sum of the six unrounded values, rounded to 2 decimals, and
//! the chart series rounds each value independently. The two roundings are
//! not reconciled, so the chart values may not sum exactly to the total.

use serde::{Deserialize, Serialize};

use crate::category::{Category, Diet, ScalarCategory};
use crate::config::{EstimatorConfig, NonFinitePolicy};
use crate::error::{Error, Result};
use crate::factors::{EmissionFactorTable, DIET_DAYS_PER_MONTH};
use crate::input::FootprintInput;
use crate::numeric::round2;

/// One category's unrounded emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryEmission {
    pub category: Category,
    /// kg CO2 per month.
    pub kg_co2: f64,
}

/// One chart point; `value` is rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

/// Derived breakdown for one input. Recomputed wholesale per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    /// Six entries in table order.
    pub per_category: Vec<CategoryEmission>,
    /// Sum of `per_category`, rounded to 2 decimals.
    pub total: f64,
    pub chart_series: Vec<ChartPoint>,
    pub diet: Diet,
}

impl FootprintResult {
    /// Unrounded emissions for a category.
    pub fn get(&self, category: Category) -> f64 {
        self.per_category
            .get(category.index())
            .filter(|e| e.category == category)
            .map(|e| e.kg_co2)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.per_category.iter().map(|e| (e.category, e.kg_co2))
    }

    pub fn sum_unrounded(&self) -> f64 {
        self.per_category.iter().map(|e| e.kg_co2).sum()
    }
}

/// Runs calculations against a factor table under a config.
#[derive(Debug, Clone)]
pub struct Estimator<'t> {
    table: &'t EmissionFactorTable,
    cfg: EstimatorConfig,
}

impl Default for Estimator<'static> {
    fn default() -> Self {
        Self::new(EmissionFactorTable::builtin(), EstimatorConfig::default())
    }
}

impl<'t> Estimator<'t> {
    pub fn new(table: &'t EmissionFactorTable, cfg: EstimatorConfig) -> Self {
        Self { table, cfg }
    }

    pub fn table(&self) -> &'t EmissionFactorTable {
        self.table
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.cfg
    }

    /// Compute the breakdown for `input`. Pure apart from log events.
    pub fn estimate(&self, input: &FootprintInput) -> Result<FootprintResult> {
        #[cfg(feature = "tracing")]
        {
            for c in input.coerced_to_zero() {
                tracing::warn!(category = %c.category(), raw = input.raw(c), "unparsable quantity read as zero");
            }
        }

        let mut per_category = Vec::with_capacity(Category::ALL.len());
        for c in ScalarCategory::ALL {
            let quantity = self.quantity(input, c)?;
            let kg_co2 = quantity * self.table.scalar(c).factor;
            self.check_finite(kg_co2, Some(c.category()))?;
            per_category.push(CategoryEmission {
                category: c.category(),
                kg_co2,
            });
        }
        per_category.push(CategoryEmission {
            category: Category::Diet,
            kg_co2: self.table.diet(input.diet).factor * DIET_DAYS_PER_MONTH,
        });

        // Rounding scales by 100, so values near f64::MAX overflow there.
        let mut chart_series = Vec::with_capacity(per_category.len());
        for e in &per_category {
            let value = round2(e.kg_co2);
            self.check_finite(value, Some(e.category))?;
            chart_series.push(ChartPoint {
                name: e.category.label().to_string(),
                value,
            });
        }

        let sum: f64 = per_category.iter().map(|e| e.kg_co2).sum();
        self.check_finite(sum, None)?;
        let total = round2(sum);
        self.check_finite(total, None)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(total, diet = %input.diet, "estimated footprint");

        Ok(FootprintResult {
            per_category,
            total,
            chart_series,
            diet: input.diet,
        })
    }

    fn quantity(&self, input: &FootprintInput, c: ScalarCategory) -> Result<f64> {
        let q = input.quantity(c);
        match self.cfg.non_finite {
            NonFinitePolicy::Reject => {
                self.check_finite(q, Some(c.category()))?;
                Ok(q)
            }
            NonFinitePolicy::Clamp => {
                let limit = self.cfg.clamp_limit;
                let clamped = q.clamp(-limit, limit);
                #[cfg(feature = "tracing")]
                {
                    if clamped != q {
                        tracing::warn!(category = %c.category(), limit, "quantity clamped");
                    }
                }
                Ok(clamped)
            }
        }
    }

    fn check_finite(&self, v: f64, category: Option<Category>) -> Result<()> {
        if v.is_finite() {
            Ok(())
        } else {
            Err(Error::NonFinite { category })
        }
    }
}

/// Compute with the default config (non-finite values rejected).
pub fn compute(input: &FootprintInput, table: &EmissionFactorTable) -> Result<FootprintResult> {
    Estimator::new(table, EstimatorConfig::default()).estimate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> &'static EmissionFactorTable {
        EmissionFactorTable::builtin()
    }

    #[test]
    fn zero_input_is_diet_only() {
        let r = compute(&FootprintInput::default(), builtin()).unwrap();
        for c in ScalarCategory::ALL {
            assert_eq!(r.get(c.category()), 0.0);
        }
        assert_eq!(r.get(Category::Diet), 75.0);
        assert_eq!(r.total, 75.0);
    }

    #[test]
    fn vegan_with_electricity() {
        let input = FootprintInput::new()
            .with_electricity("100")
            .with_gas("0")
            .with_vehicle("0")
            .with_flights("0")
            .with_waste("0")
            .with_diet(Diet::Vegan);
        let r = compute(&input, builtin()).unwrap();
        assert_eq!(r.get(Category::Electricity), 92.0);
        assert_eq!(r.get(Category::Diet), 45.0);
        assert_eq!(r.total, 137.0);
    }

    #[test]
    fn all_categories() {
        let input = FootprintInput::new()
            .with_electricity("10")
            .with_gas("2")
            .with_vehicle("100")
            .with_flights("1")
            .with_waste("4")
            .with_diet(Diet::Meat);
        let r = compute(&input, builtin()).unwrap();
        assert!((r.get(Category::Electricity) - 9.2).abs() < 1e-9);
        assert!((r.get(Category::Gas) - 13.2).abs() < 1e-9);
        assert!((r.get(Category::Vehicle) - 40.4).abs() < 1e-9);
        assert_eq!(r.get(Category::Flights), 90.0);
        assert_eq!(r.get(Category::Waste), 2.0);
        assert!((r.get(Category::Diet) - 99.0).abs() < 1e-9);
        assert_eq!(r.total, 253.8);
    }

    #[test]
    fn chart_series_in_table_order_with_labels() {
        let input = FootprintInput::new().with_vehicle("3");
        let r = compute(&input, builtin()).unwrap();
        let names: Vec<&str> = r.chart_series.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Electricity", "Gas", "Vehicle", "Flights", "Waste", "Diet"]
        );
        // 3 × 0.404 = 1.212
        assert_eq!(r.chart_series[2].value, 1.21);
        assert!((r.get(Category::Vehicle) - 1.212).abs() < 1e-12);
    }

    #[test]
    fn roundings_are_independent() {
        let input = FootprintInput::new()
            .with_electricity("0.005")
            .with_gas("0.00075")
            .with_diet(Diet::Mixed);
        let r = compute(&input, builtin()).unwrap();
        let chart_sum: f64 = r.chart_series.iter().map(|p| p.value).sum();
        // 0.0046 and 0.00495 each round to 0.0, yet together they add 0.01.
        assert_eq!(r.chart_series[0].value, 0.0);
        assert_eq!(r.chart_series[1].value, 0.0);
        assert_eq!(r.total, 75.01);
        assert_eq!(chart_sum, 75.0);
    }

    #[test]
    fn garbage_reads_as_zero() {
        let input = FootprintInput::new().with_gas("lots").with_waste("12kg");
        let r = compute(&input, builtin()).unwrap();
        assert_eq!(r.get(Category::Gas), 0.0);
        assert_eq!(r.get(Category::Waste), 6.0);
    }

    #[test]
    fn reject_policy_flags_overflow() {
        let input = FootprintInput::new().with_flights("1e400");
        let err = compute(&input, builtin()).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFinite {
                category: Some(Category::Flights)
            }
        ));

        // Finite quantity whose product overflows.
        let input = FootprintInput::new().with_flights("1e307");
        assert!(matches!(
            compute(&input, builtin()),
            Err(Error::NonFinite {
                category: Some(Category::Flights)
            })
        ));
    }

    #[test]
    fn reject_policy_flags_total_overflow() {
        let input = FootprintInput::new()
            .with_electricity("1.9e306")
            .with_waste("1e306");
        // Each category rounds fine; the sum does not.
        let err = compute(&input, builtin()).unwrap_err();
        assert!(matches!(err, Error::NonFinite { category: None }));
    }

    #[test]
    fn reject_policy_flags_rounding_overflow() {
        // 9.2e306 is finite, but scaling by 100 for rounding is not.
        let input = FootprintInput::new().with_electricity("1e307");
        let err = compute(&input, builtin()).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFinite {
                category: Some(Category::Electricity)
            }
        ));
    }

    #[test]
    fn rounding_overflow_rejected_under_wide_clamp() {
        let cfg = EstimatorConfig {
            non_finite: NonFinitePolicy::Clamp,
            clamp_limit: 1.0e307,
            ..Default::default()
        };
        let est = Estimator::new(builtin(), cfg);
        let r = est.estimate(&FootprintInput::new().with_waste("Infinity"));
        assert!(matches!(
            r,
            Err(Error::NonFinite {
                category: Some(Category::Waste)
            })
        ));

        // A total that only overflows once rounded names no category.
        let r = est.estimate(
            &FootprintInput::new()
                .with_electricity("1.9e306")
                .with_waste("1e306"),
        );
        assert!(matches!(r, Err(Error::NonFinite { category: None })));
    }

    #[test]
    fn clamp_policy_keeps_values_finite() {
        let cfg = EstimatorConfig {
            non_finite: NonFinitePolicy::Clamp,
            clamp_limit: 1000.0,
            ..Default::default()
        };
        let est = Estimator::new(builtin(), cfg);
        let input = FootprintInput::new()
            .with_electricity("Infinity")
            .with_gas("-Infinity");
        let r = est.estimate(&input).unwrap();
        assert_eq!(r.get(Category::Electricity), 920.0);
        assert_eq!(r.get(Category::Gas), -6600.0);
        assert!(r.total.is_finite());
    }

    #[test]
    fn negative_quantities_pass_through() {
        let input = FootprintInput::new().with_electricity("-100");
        let r = compute(&input, builtin()).unwrap();
        assert_eq!(r.get(Category::Electricity), -92.0);
        assert_eq!(r.total, -17.0);
    }

    #[test]
    fn result_replaces_previous_wholesale() {
        let est = Estimator::default();
        let first = est
            .estimate(&FootprintInput::new().with_gas("10"))
            .unwrap();
        let second = est.estimate(&FootprintInput::new()).unwrap();
        assert_eq!(first.get(Category::Gas), 66.0);
        assert_eq!(second.get(Category::Gas), 0.0);
        assert_eq!(second.total, 75.0);
    }
}
