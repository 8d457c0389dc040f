/// Option-table loading: a JSON file describing the options to register.
use std::fs;
use std::path::{Path, PathBuf};

use optline::{MARKER, OptionRegistry};
use serde::Deserialize;
use thiserror::Error;

/// One entry of the option table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableEntry {
    /// Option name, e.g. `-o`.
    pub name: String,
    /// Argument label; present only for options that take a value.
    #[serde(default)]
    pub argument: Option<String>,
    /// Single-line help text.
    pub description: String,
}

/// Errors from reading or validating an option table.
#[derive(Debug, Error)]
pub enum TableError {
    /// No table file given on the command line.
    #[error("No option table given; pass --table <FILE>")]
    Missing,

    /// The file could not be read.
    #[error("Cannot read option table '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of table entries.
    #[error("Malformed option table '{}': {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An entry cannot be registered.
    #[error("Invalid option '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

impl TableEntry {
    /// Reason this entry cannot be registered, if any.
    #[must_use]
    pub fn problem(&self) -> Option<String> {
        if !self.name.starts_with(MARKER) {
            return Some(format!("option names must start with '{MARKER}'"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Some("option names cannot contain whitespace".to_owned());
        }
        match self.argument.as_deref() {
            Some(label) if label.trim().is_empty() => {
                Some("argument label is empty".to_owned())
            }
            _ => None,
        }
    }
}

/// Read the table at `path` without validating entries.
///
/// # Errors
///
/// Returns `TableError::Read` or `TableError::Malformed`.
pub fn read_entries(path: Option<&Path>) -> Result<Vec<TableEntry>, TableError> {
    let path = path.ok_or(TableError::Missing)?;
    let text = fs::read_to_string(path).map_err(|source| TableError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TableError::Malformed {
        path: path.to_owned(),
        source,
    })
}

/// A registry built from a table, with the non-fatal findings met on the way.
#[derive(Debug)]
pub struct Loaded {
    pub registry: OptionRegistry,
    /// One line per duplicate name, in table order.
    pub warnings: Vec<String>,
}

/// Build a registry from table entries, in table order.
///
/// Duplicate names are registered as-is and only reported as warnings.
///
/// # Errors
///
/// Returns `TableError::Invalid` for the first entry with a [`TableEntry::problem`].
pub fn build_registry(entries: &[TableEntry]) -> Result<Loaded, TableError> {
    let mut registry = OptionRegistry::new();
    let mut warnings = Vec::new();
    for entry in entries {
        if let Some(reason) = entry.problem() {
            return Err(TableError::Invalid {
                name: entry.name.clone(),
                reason,
            });
        }
        if registry.contains(&entry.name) {
            warnings.push(format!(
                "option '{}' registered more than once; the last description wins",
                entry.name
            ));
        }
        match &entry.argument {
            Some(label) => registry.register_value_option(
                entry.name.as_str(),
                label.as_str(),
                entry.description.as_str(),
            ),
            None => registry.register_flag(entry.name.as_str(), entry.description.as_str()),
        }
    }
    Ok(Loaded { registry, warnings })
}

/// Read and register the table at `path`.
///
/// # Errors
///
/// Any `TableError`.
pub fn load(path: Option<&Path>) -> Result<Loaded, TableError> {
    build_registry(&read_entries(path)?)
}
