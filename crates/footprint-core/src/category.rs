//! Emission categories and the closed diet enumeration.
//!
//! Category order is the factor table's order and drives every ordered
//! output (result breakdown, chart series, report lines).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the six contributing sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electricity,
    Gas,
    Vehicle,
    Flights,
    Waste,
    Diet,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 6] = [
        Category::Electricity,
        Category::Gas,
        Category::Vehicle,
        Category::Flights,
        Category::Waste,
        Category::Diet,
    ];

    /// Lowercase key used in results.
    pub fn key(self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Gas => "gas",
            Category::Vehicle => "vehicle",
            Category::Flights => "flights",
            Category::Waste => "waste",
            Category::Diet => "diet",
        }
    }

    /// Capitalized name used for chart series.
    pub fn label(self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Gas => "Gas",
            Category::Vehicle => "Vehicle",
            Category::Flights => "Flights",
            Category::Waste => "Waste",
            Category::Diet => "Diet",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Category::Electricity => 0,
            Category::Gas => 1,
            Category::Vehicle => 2,
            Category::Flights => 3,
            Category::Waste => 4,
            Category::Diet => 5,
        }
    }

    /// The scalar counterpart, or `None` for diet.
    pub fn scalar(self) -> Option<ScalarCategory> {
        match self {
            Category::Electricity => Some(ScalarCategory::Electricity),
            Category::Gas => Some(ScalarCategory::Gas),
            Category::Vehicle => Some(ScalarCategory::Vehicle),
            Category::Flights => Some(ScalarCategory::Flights),
            Category::Waste => Some(ScalarCategory::Waste),
            Category::Diet => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The five categories driven by a raw numeric quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarCategory {
    Electricity,
    Gas,
    Vehicle,
    Flights,
    Waste,
}

impl ScalarCategory {
    pub const ALL: [ScalarCategory; 5] = [
        ScalarCategory::Electricity,
        ScalarCategory::Gas,
        ScalarCategory::Vehicle,
        ScalarCategory::Flights,
        ScalarCategory::Waste,
    ];

    /// Key of this category in the factor table. Flights are stored as
    /// `flight` there, unlike the result key.
    pub fn table_key(self) -> &'static str {
        match self {
            ScalarCategory::Electricity => "electricity",
            ScalarCategory::Gas => "gas",
            ScalarCategory::Vehicle => "vehicle",
            ScalarCategory::Flights => "flight",
            ScalarCategory::Waste => "waste",
        }
    }

    pub fn category(self) -> Category {
        match self {
            ScalarCategory::Electricity => Category::Electricity,
            ScalarCategory::Gas => Category::Gas,
            ScalarCategory::Vehicle => Category::Vehicle,
            ScalarCategory::Flights => Category::Flights,
            ScalarCategory::Waste => Category::Waste,
        }
    }
}

/// Diet classification. Serialized with the lowercase names accepted by
/// [`Diet::from_str`]; unknown names fail to deserialize with the same
/// message `from_str` gives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Diet {
    Meat,
    #[default]
    Mixed,
    Vegetarian,
    Vegan,
}

impl Diet {
    pub const ALL: [Diet; 4] = [Diet::Meat, Diet::Mixed, Diet::Vegetarian, Diet::Vegan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Meat => "meat",
            Diet::Mixed => "mixed",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
        }
    }
}

impl FromStr for Diet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meat" => Ok(Diet::Meat),
            "mixed" => Ok(Diet::Mixed),
            "vegetarian" => Ok(Diet::Vegetarian),
            "vegan" => Ok(Diet::Vegan),
            _ => Err(Error::InvalidEnum {
                field: "diet",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Diet {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_order() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn flights_key_differs_from_table_key() {
        assert_eq!(Category::Flights.key(), "flights");
        assert_eq!(ScalarCategory::Flights.table_key(), "flight");
        assert_eq!(Category::Flights.label(), "Flights");
    }

    #[test]
    fn scalar_round_trips_to_category() {
        for s in ScalarCategory::ALL {
            assert_eq!(s.category().scalar(), Some(s));
        }
        assert_eq!(Category::Diet.scalar(), None);
    }

    #[test]
    fn diet_parse_known_and_unknown() {
        assert_eq!("vegan".parse::<Diet>().unwrap(), Diet::Vegan);
        assert_eq!(Diet::default(), Diet::Mixed);

        let err = "keto".parse::<Diet>().unwrap_err();
        match err {
            Error::InvalidEnum { field, value } => {
                assert_eq!(field, "diet");
                assert_eq!(value, "keto");
            }
            other => panic!("expected InvalidEnum, got {other:?}"),
        }
        // Case and whitespace are not normalized.
        assert!("Vegan".parse::<Diet>().is_err());
        assert!(" vegan".parse::<Diet>().is_err());
    }

    #[test]
    fn diet_serde_rejects_unknown_variant() {
        let d: Diet = serde_json::from_str("\"vegetarian\"").unwrap();
        assert_eq!(d, Diet::Vegetarian);
        let err = serde_json::from_str::<Diet>("\"keto\"").unwrap_err();
        assert!(err.to_string().contains("invalid value for diet: 'keto'"));
        assert_eq!(serde_json::to_string(&Diet::Vegan).unwrap(), "\"vegan\"");
    }
}
