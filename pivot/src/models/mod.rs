//! Domain models for roster data and generated sheets.
//!
//! - [`Record`]: one roster row, field name to raw cell value
//! - [`RecordStore`]: every parsed row plus the field universe
//! - [`Sheet`]: one assembled output table for a (teacher, period) pair

use serde::Serialize;
use std::collections::BTreeMap;

use crate::periods::{is_period_column, PeriodDefinition};

// =============================================================================
// Record
// =============================================================================

/// A single roster row.
///
/// Rows are independent mappings: a row may lack any field, so every
/// lookup is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of `field`, if the row carries it.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy of this row with every period column removed.
    ///
    /// All other keys and values are kept verbatim.
    pub fn without_period_columns(&self, schema: &[PeriodDefinition]) -> Record {
        Record(
            self.0
                .iter()
                .filter(|(field, _)| !is_period_column(schema, field))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// =============================================================================
// Record Store
// =============================================================================

/// In-memory table of parsed roster rows.
///
/// Replaced wholesale whenever a new file is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordStore {
    /// Distinct field names in first-occurrence order.
    pub fields: Vec<String>,
    /// Rows in file order.
    pub records: Vec<Record>,
}

impl RecordStore {
    pub fn new(fields: Vec<String>, records: Vec<Record>) -> Self {
        Self { fields, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Sheet
// =============================================================================

/// One output table for a teacher and a period.
///
/// Built fresh per generation run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    /// Semantic label, e.g. `Smith Period 03`. Never truncated.
    pub label: String,
    /// `[teacher, period label, free-text label]`.
    pub header_triple: [String; 3],
    /// Projected rows, period columns stripped.
    pub rows: Vec<Record>,
}

impl Sheet {
    pub fn teacher(&self) -> &str {
        &self.header_triple[0]
    }

    pub fn period(&self) -> &str {
        &self.header_triple[1]
    }

    /// Data block: one row of cells per record, read in `fields` order.
    /// Missing keys yield `None`.
    pub fn cells<'a>(
        &'a self,
        fields: &'a [String],
    ) -> impl Iterator<Item = Vec<Option<&'a str>>> + 'a {
        self.rows
            .iter()
            .map(move |row| fields.iter().map(|f| row.get(f)).collect())
    }
}
