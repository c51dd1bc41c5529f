//! Presentation boundary: shares, pie proportions, and tips for a result.
//!
//! A `Report` is what a chart or legend consumes. Shares use each
//! category's unrounded value over the rounded total, as the result card
//! always has.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::compute::FootprintResult;
use crate::factors::EmissionFactorTable;
use crate::numeric::round2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub category: Category,
    pub label: String,
    /// kg CO2, rounded to 2 decimals.
    pub value: f64,
    /// Percent of the total, 0 when the total is not positive.
    pub share_percent: f64,
    /// Reduction tips, first `tip_count` of the category's list. For diet
    /// this is the selected variant's description.
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total: f64,
    pub diet_label: String,
    pub lines: Vec<ReportLine>,
}

impl Report {
    pub fn build(result: &FootprintResult, table: &EmissionFactorTable, tip_count: usize) -> Self {
        let diet = table.diet(result.diet);
        let lines = result
            .iter()
            .map(|(category, kg)| {
                let tips = match category {
                    Category::Diet => vec![diet.description.to_string()],
                    _ => table
                        .tips(category)
                        .iter()
                        .take(tip_count)
                        .map(|t| t.to_string())
                        .collect(),
                };
                ReportLine {
                    category,
                    label: category.label().to_string(),
                    value: round2(kg),
                    share_percent: share(kg, result.total),
                    tips: if tip_count == 0 { Vec::new() } else { tips },
                }
            })
            .collect();

        Report {
            total: result.total,
            diet_label: diet.label.to_string(),
            lines,
        }
    }

    /// The line with the largest value; the earliest wins a tie.
    pub fn largest(&self) -> Option<&ReportLine> {
        self.lines.iter().fold(None, |best: Option<&ReportLine>, l| match best {
            Some(b) if b.value >= l.value => Some(b),
            _ => Some(l),
        })
    }

    /// Pie proportions (label, percent) in table order.
    pub fn pie_shares(&self) -> Vec<(String, f64)> {
        self.lines
            .iter()
            .map(|l| (l.label.clone(), share(l.value, self.total)))
            .collect()
    }
}

fn share(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}
