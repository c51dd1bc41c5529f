//! Reading calculation inputs from YAML or JSON documents.
//!
//! ```yaml
//! electricity: 320
//! gas: "14.5"
//! vehicle: 600
//! flights: 0
//! waste: 40
//! diet: vegetarian
//! ```

use std::fs;
use std::path::Path;

use footprint_core::error::{Error, Result};
use footprint_core::input::{DietField, FootprintInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Yaml,
    Json,
}

impl DocFormat {
    /// `.json` selects JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocFormat::Json,
            _ => DocFormat::Yaml,
        }
    }
}

pub fn parse_input(src: &str, format: DocFormat) -> Result<FootprintInput> {
    match format {
        DocFormat::Json => FootprintInput::from_json_str(src),
        DocFormat::Yaml => {
            // An empty YAML document means every field is unset.
            if src.trim().is_empty() {
                return Ok(FootprintInput::default());
            }
            if let Ok(field) = serde_yaml::from_str::<DietField>(src) {
                field.check()?;
            }
            serde_yaml::from_str(src).map_err(|e| Error::Input(e.to_string()))
        }
    }
}

pub fn load_input(path: &Path) -> Result<FootprintInput> {
    let src = fs::read_to_string(path)
        .map_err(|e| Error::Input(e.to_string()).with_context(path.display().to_string()))?;
    parse_input(&src, DocFormat::from_path(path))
        .map_err(|e| e.with_context(path.display().to_string()))
}
