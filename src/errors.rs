//! Typed errors for configuration loading and scenario validation.
//!
//! The ROI engine itself has no error path. Everything that can go wrong
//! happens either while the catalogs are loaded (fatal, reported to the
//! operator) or while a caller turns user input into an order scenario.
//!
//! # Categories
//!
//! - [`ConfigError`]: missing files or columns, unparsable values, empty
//!   catalogs, invalid overrides
//! - [`ScenarioError`]: negative or non-finite money values, order volume
//!   outside the tier's case bounds, unknown tier or shipping names

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or overriding catalogs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Required columns absent from a CSV header row
    #[error("Missing columns in {sheet} sheet: {}", .columns.join(", "))]
    MissingColumns {
        sheet: &'static str,
        columns: Vec<String>,
    },

    /// A CSV record could not be parsed
    #[error("Invalid record in {path} at line {line}: {message}")]
    InvalidRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// A value parsed but violates a catalog constraint
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A catalog that must contain entries is empty
    #[error("The {sheet} sheet has no entries")]
    EmptyCatalog { sheet: &'static str },

    /// Overrides file could not be parsed
    #[error("Failed to parse overrides {path}: {message}")]
    Overrides { path: PathBuf, message: String },

    /// Override names a tier that is not in the catalog
    #[error("Unknown tier in overrides: {0}")]
    UnknownTier(String),

    /// Override names a shipping option that is not in the catalog
    #[error("Unknown shipping option in overrides: {0}")]
    UnknownShipping(String),
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while resolving user input into an order scenario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("{field} must be a non-negative number, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("Number of cases {num_cases} is outside the allowed range {min}..={max} for tier {tier}")]
    CasesOutOfRange {
        tier: String,
        num_cases: u32,
        min: u32,
        max: u32,
    },

    #[error("Unknown tier: {name} (available: {})", .available.join(", "))]
    UnknownTier { name: String, available: Vec<String> },

    #[error("Unknown shipping option: {name} (available: {})", .available.join(", "))]
    UnknownShipping { name: String, available: Vec<String> },
}
