//! Text and JSON rendering of estimates.

use serde::Serialize;

use footprint_core::compute::FootprintResult;
use footprint_core::factors::EmissionFactorTable;
use footprint_core::input::FootprintInput;
use footprint_core::report::Report;

const BAR_WIDTH: usize = 30;

/// Machine-readable estimate, with fingerprints of what produced it.
#[derive(Debug, Serialize)]
pub struct JsonEstimate<'a> {
    pub result: &'a FootprintResult,
    pub report: &'a Report,
    pub table_fingerprint: String,
    pub input_fingerprint: String,
}

pub fn json(
    input: &FootprintInput,
    result: &FootprintResult,
    report: &Report,
    table: &EmissionFactorTable,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonEstimate {
        result,
        report,
        table_fingerprint: table.fingerprint().to_hex(),
        input_fingerprint: input.fingerprint().to_hex(),
    })
}

pub fn text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("Your Carbon Footprint Results\n");
    out.push_str("=============================\n");
    out.push_str(&format!("Total Monthly Emissions: {} kg CO2\n", report.total));
    out.push_str(&format!("Diet: {}\n\n", report.diet_label));

    for line in &report.lines {
        out.push_str(&format!(
            "{:<12} {:>10} kg CO2  {} {:>5.1}%\n",
            line.label,
            line.value,
            bar(line.share_percent),
            line.share_percent
        ));
        for tip in &line.tips {
            out.push_str(&format!("    - {tip}\n"));
        }
    }

    if let Some(top) = report.largest() {
        out.push_str(&format!(
            "\nLargest source: {} ({:.1}% of total)\n",
            top.label, top.share_percent
        ));
    }
    out
}

pub fn factors(table: &EmissionFactorTable) -> String {
    let mut out = String::new();
    out.push_str("Emission Factors\n");
    out.push_str("================\n");
    for (category, f) in table.scalars() {
        out.push_str(&format!(
            "{:<12} {:>8} kg CO2 / {}\n",
            category.category().label(),
            f.factor,
            f.unit
        ));
        out.push_str(&format!("    {}\n", f.description));
    }
    out.push_str("\nDiet (kg CO2 / day, x30 per month)\n");
    for diet in footprint_core::category::Diet::ALL {
        let f = table.diet(diet);
        out.push_str(&format!("{:<12} {:>8}  {}\n", diet.as_str(), f.factor, f.label));
        out.push_str(&format!("    {}\n", f.description));
    }
    out.push_str(&format!("\nTable fingerprint: {}\n", table.fingerprint().short()));
    out
}

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}
