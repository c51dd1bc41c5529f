//! Raw calculation input: five free-text quantities and a diet variant.
//!
//! An input is an immutable value built per calculation request. Fields are
//! kept as the text the user typed; coercion to numbers happens only inside
//! the estimator, so an input is never "partially invalid".

use serde::{Deserialize, Deserializer, Serialize};

use crate::category::{Diet, ScalarCategory};
use crate::error::Result as CoreResult;
use crate::hash::{hash_serde, Fingerprint};
use crate::numeric::parse_lenient;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootprintInput {
    /// kWh per month.
    #[serde(default, deserialize_with = "raw_field")]
    pub electricity: String,
    /// Therms per month.
    #[serde(default, deserialize_with = "raw_field")]
    pub gas: String,
    /// Miles per month.
    #[serde(default, deserialize_with = "raw_field")]
    pub vehicle: String,
    /// Flight hours per month.
    #[serde(default, deserialize_with = "raw_field")]
    pub flights: String,
    /// kg of waste per month.
    #[serde(default, deserialize_with = "raw_field")]
    pub waste: String,
    #[serde(default)]
    pub diet: Diet,
}

impl FootprintInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, category: ScalarCategory) -> &str {
        match category {
            ScalarCategory::Electricity => &self.electricity,
            ScalarCategory::Gas => &self.gas,
            ScalarCategory::Vehicle => &self.vehicle,
            ScalarCategory::Flights => &self.flights,
            ScalarCategory::Waste => &self.waste,
        }
    }

    /// The coerced quantity for a category (0 when unset or unparsable).
    pub fn quantity(&self, category: ScalarCategory) -> f64 {
        parse_lenient(self.raw(category))
    }

    /// Replace one scalar field, returning the new input.
    pub fn with(mut self, category: ScalarCategory, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match category {
            ScalarCategory::Electricity => self.electricity = raw,
            ScalarCategory::Gas => self.gas = raw,
            ScalarCategory::Vehicle => self.vehicle = raw,
            ScalarCategory::Flights => self.flights = raw,
            ScalarCategory::Waste => self.waste = raw,
        }
        self
    }

    pub fn with_electricity(self, raw: impl Into<String>) -> Self {
        self.with(ScalarCategory::Electricity, raw)
    }

    pub fn with_gas(self, raw: impl Into<String>) -> Self {
        self.with(ScalarCategory::Gas, raw)
    }

    pub fn with_vehicle(self, raw: impl Into<String>) -> Self {
        self.with(ScalarCategory::Vehicle, raw)
    }

    pub fn with_flights(self, raw: impl Into<String>) -> Self {
        self.with(ScalarCategory::Flights, raw)
    }

    pub fn with_waste(self, raw: impl Into<String>) -> Self {
        self.with(ScalarCategory::Waste, raw)
    }

    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    /// Fields that hold text but coerce to zero.
    pub fn coerced_to_zero(&self) -> Vec<ScalarCategory> {
        ScalarCategory::ALL
            .into_iter()
            .filter(|&c| {
                let raw = self.raw(c);
                !raw.trim().is_empty() && self.quantity(c) == 0.0 && !looks_like_zero(raw)
            })
            .collect()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        hash_serde(self).unwrap_or_default()
    }

    /// Decode a JSON document, reporting an unknown diet as
    /// `Error::InvalidEnum` rather than a generic decode error.
    pub fn from_json_str(src: &str) -> CoreResult<Self> {
        if let Ok(field) = serde_json::from_str::<DietField>(src) {
            field.check()?;
        }
        Ok(serde_json::from_str(src)?)
    }
}

/// The `diet` key of an input document, read as plain text so an unknown
/// variant can be reported before the full decode.
#[derive(Debug, Default, Deserialize)]
pub struct DietField {
    #[serde(default)]
    pub diet: Option<String>,
}

impl DietField {
    pub fn check(&self) -> CoreResult<()> {
        match &self.diet {
            Some(d) => d.parse::<Diet>().map(|_| ()),
            None => Ok(()),
        }
    }
}

fn looks_like_zero(raw: &str) -> bool {
    raw.trim()
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c == '0' || c == '.')
}

/// Documents may write quantities as numbers or strings; null means unset.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Number(f64),
}

fn raw_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Text(s)) => s,
        // Keep infinities in the spelling the lenient parser reads.
        Some(RawField::Number(n)) if n == f64::INFINITY => "Infinity".to_string(),
        Some(RawField::Number(n)) if n == f64::NEG_INFINITY => "-Infinity".to_string(),
        Some(RawField::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
