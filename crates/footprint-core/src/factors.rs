//! The static emission factor table.
//!
//! Five scalar categories carry a per-unit factor, a description, and
//! reduction tips; diet maps each variant to a per-day factor. The table is
//! a `static` and is never mutated.

use serde::Serialize;

use crate::category::{Category, Diet, ScalarCategory};
use crate::hash::{hash_serde, Fingerprint};

/// Diet factors are per day; this converts them to the monthly figure the
/// other categories are assumed to already be in.
pub const DIET_DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarFactor {
    /// kg CO2 per input unit.
    pub factor: f64,
    pub unit: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietFactor {
    /// kg CO2 per day.
    pub factor: f64,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietTable {
    pub meat: DietFactor,
    pub mixed: DietFactor,
    pub vegetarian: DietFactor,
    pub vegan: DietFactor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionFactorTable {
    pub electricity: ScalarFactor,
    pub gas: ScalarFactor,
    pub vehicle: ScalarFactor,
    pub flight: ScalarFactor,
    pub waste: ScalarFactor,
    pub diet: DietTable,
}

static BUILTIN: EmissionFactorTable = EmissionFactorTable {
    electricity: ScalarFactor {
        factor: 0.92,
        unit: "kWh",
        description: "Electricity generation from fossil fuels is a major source of CO2 emissions. \
                      The factor of 0.92 kg CO2 per kWh represents an average for mixed power sources.",
        tips: &[
            "Use LED bulbs to reduce consumption by up to 80%",
            "Choose Energy Star certified appliances",
            "Consider solar panel installation for clean energy",
        ],
    },
    gas: ScalarFactor {
        factor: 6.6,
        unit: "therm",
        description: "Natural gas combustion releases CO2 directly into the atmosphere. \
                      The factor of 6.6 kg CO2 per therm reflects the complete combustion process.",
        tips: &[
            "Improve home insulation to reduce heating needs",
            "Install a smart thermostat for optimal control",
            "Regular maintenance of heating systems",
        ],
    },
    vehicle: ScalarFactor {
        factor: 0.404,
        unit: "mile",
        description: "Vehicle emissions depend on fuel efficiency and driving patterns. \
                      The factor of 0.404 kg CO2 per mile is based on average car efficiency.",
        tips: &[
            "Regular vehicle maintenance improves efficiency",
            "Adopt eco-driving techniques",
            "Consider switching to an electric vehicle",
        ],
    },
    flight: ScalarFactor {
        factor: 90.0,
        unit: "flight hour",
        description: "Air travel has a high carbon impact due to emissions at high altitudes. \
                      The factor of 90 kg CO2 per hour includes all flight phases.",
        tips: &[
            "Combine trips to reduce flight frequency",
            "Choose direct flights when possible",
            "Consider train travel for shorter distances",
        ],
    },
    waste: ScalarFactor {
        factor: 0.5,
        unit: "kg",
        description: "Waste decomposition and processing contributes to emissions. \
                      The factor of 0.5 kg CO2 per kg waste includes transportation and processing.",
        tips: &[
            "Start composting organic waste",
            "Reduce single-use plastics",
            "Practice recycling and proper waste sorting",
        ],
    },
    diet: DietTable {
        meat: DietFactor {
            factor: 3.3,
            label: "Meat Heavy",
            description: "A diet high in red meat has the largest carbon footprint due to livestock emissions and land use.",
        },
        mixed: DietFactor {
            factor: 2.5,
            label: "Mixed Diet",
            description: "A balanced diet with moderate meat consumption has a medium carbon impact.",
        },
        vegetarian: DietFactor {
            factor: 1.7,
            label: "Vegetarian",
            description: "A vegetarian diet significantly reduces carbon emissions by avoiding meat products.",
        },
        vegan: DietFactor {
            factor: 1.5,
            label: "Vegan",
            description: "A vegan diet has the lowest carbon footprint by avoiding all animal products.",
        },
    },
};

impl EmissionFactorTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static EmissionFactorTable {
        &BUILTIN
    }

    pub fn scalar(&self, category: ScalarCategory) -> &ScalarFactor {
        match category {
            ScalarCategory::Electricity => &self.electricity,
            ScalarCategory::Gas => &self.gas,
            ScalarCategory::Vehicle => &self.vehicle,
            ScalarCategory::Flights => &self.flight,
            ScalarCategory::Waste => &self.waste,
        }
    }

    pub fn diet(&self, diet: Diet) -> &DietFactor {
        match diet {
            Diet::Meat => &self.diet.meat,
            Diet::Mixed => &self.diet.mixed,
            Diet::Vegetarian => &self.diet.vegetarian,
            Diet::Vegan => &self.diet.vegan,
        }
    }

    /// Tips for a category, most important first. Diet has none.
    pub fn tips(&self, category: Category) -> &[&'static str] {
        match category.scalar() {
            Some(s) => self.scalar(s).tips,
            None => &[],
        }
    }

    /// Scalar categories with their factors, in table order.
    pub fn scalars(&self) -> impl Iterator<Item = (ScalarCategory, &ScalarFactor)> + '_ {
        ScalarCategory::ALL.into_iter().map(move |c| (c, self.scalar(c)))
    }

    /// Stable hash of the table contents.
    pub fn fingerprint(&self) -> Fingerprint {
        // Serializing plain structs of numbers and strings cannot fail.
        hash_serde(self).unwrap_or_default()
    }
}
