use thiserror::Error;

use crate::category::{Category, Diet};

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A closed enumeration received a value outside its variants.
    #[error("invalid value for {field}: '{value}'")]
    InvalidEnum { field: &'static str, value: String },

    /// A quantity, category value, or total was infinite or NaN.
    /// `category` is `None` when only the total overflowed.
    #[error("non-finite emission value in {}", scope_name(.category))]
    NonFinite { category: Option<Category> },

    #[error("Invalid configuration: {0}")]
    Config(String),

    // Decoding of input documents; the core does no I/O itself.
    #[error("Invalid input document: {0}")]
    Input(String),

    /// Error with context chain for better debugging
    #[error("Error in {context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn scope_name(category: &Option<Category>) -> &'static str {
    match category {
        Some(c) => c.key(),
        None => "total",
    }
}

impl Error {
    /// Add context to an error, creating an error chain.
    ///
    /// # Example
    /// ```rust,no_run
    /// use footprint_core::error::Error;
    /// let err = Error::Config("clamp limit must be positive".into());
    /// let err = err.with_context("while reading FOOTPRINT_CLAMP_LIMIT");
    /// ```
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self) as Box<dyn std::error::Error + Send + Sync>,
        }
    }

    /// Get suggestions for common errors.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Error::InvalidEnum { field, .. } if *field == "diet" => {
                let names: Vec<&str> = Diet::ALL.iter().map(|d| d.as_str()).collect();
                vec![format!("Accepted diet values: {}", names.join(", "))]
            }
            Error::NonFinite { .. } => vec![
                "Check for extremely large values such as 1e400 or Infinity".into(),
                "Set FOOTPRINT_NON_FINITE=clamp to clamp quantities instead of rejecting".into(),
            ],
            Error::Config(msg) => {
                if msg.contains("clamp") {
                    vec!["FOOTPRINT_CLAMP_LIMIT must be a positive finite number".into()]
                } else if msg.contains("non-finite") {
                    vec!["FOOTPRINT_NON_FINITE accepts 'reject' or 'clamp'".into()]
                } else {
                    vec![]
                }
            }
            Error::Context { source, .. } => match source.downcast_ref::<Error>() {
                Some(inner) => inner.suggestions(),
                None => vec![],
            },
            _ => vec![],
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Input(e.to_string())
    }
}
