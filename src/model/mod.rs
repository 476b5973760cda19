use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, ToolError};

/// Column used to match people across the three exports.
pub const EMAIL_ADDRESS: &str = "Email Address";
/// Derived column flagging active employees that appear in the new-hires export.
pub const NEW_HIRE: &str = "New Hire";
/// Derived column marking departure-sourced records.
pub const ARCHIVE: &str = "Archive";
/// Value stored in [`ARCHIVE`] for departed employees.
pub const ARCHIVE_MARKER: &str = "ARCHIVE";

/// Columns emitted by the writer, in order. Anything else is dropped.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "First Name",
    "Last Name",
    EMAIL_ADDRESS,
    "Cost Center",
    "Hire Date",
    "Employee Type",
    NEW_HIRE,
    ARCHIVE,
];

/// Ordered rows of one export, in file order.
pub type Dataset = Vec<Record>;

/// A single CSV row keyed by the header of the file it came from.
///
/// Values are kept as raw strings; nothing is trimmed or coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Builds a record from `(column, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Sets `column`, overwriting any existing value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Returns the value of `column` or a [`ToolError::MissingColumn`].
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| ToolError::MissingColumn(column.to_string()))
    }

    /// Shorthand for the matching key.
    pub fn email(&self) -> Result<&str> {
        self.require(EMAIL_ADDRESS)
    }

    /// Projects the record onto [`OUTPUT_COLUMNS`], blank where absent.
    pub fn output_row(&self) -> [&str; 8] {
        OUTPUT_COLUMNS.map(|column| self.get(column).unwrap_or(""))
    }
}
