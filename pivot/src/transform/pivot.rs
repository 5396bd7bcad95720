//! Group a teacher's roster rows by period.
//!
//! ```text
//! Roster rows                          →  Period groups for "Smith, J"
//! ┌──────────────────────────────────┐   ┌──────────────────────────┐
//! │ A │ P01: Smith, J │ P03: Doe, K  │   │ P01 → [A, B]             │
//! │ B │ P01: Smith, J │ P03: Smith, J│ → │ P02 → []                 │
//! │ C │ P01: Doe, K   │ P03: Doe, K  │   │ P03 → [B]                │
//! └──────────────────────────────────┘   └──────────────────────────┘
//! ```
//!
//! A row matching the teacher in several period columns lands in each of
//! those groups. Every row placed in a group has its period columns removed.

use serde::Serialize;

use crate::models::Record;
use crate::periods::PeriodDefinition;

/// Projected rows per period column, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodGroups {
    groups: Vec<(String, Vec<Record>)>,
}

impl PeriodGroups {
    /// One empty group per period, so every period is represented.
    pub fn for_schema(schema: &[PeriodDefinition]) -> Self {
        Self {
            groups: schema
                .iter()
                .map(|p| (p.column_label.to_string(), Vec::new()))
                .collect(),
        }
    }

    /// Build groups from explicit `(column label, rows)` pairs.
    pub fn from_groups(groups: Vec<(String, Vec<Record>)>) -> Self {
        Self { groups }
    }

    /// Rows grouped under `column_label`, if that key exists.
    pub fn get(&self, column_label: &str) -> Option<&[Record]> {
        self.groups
            .iter()
            .find(|(key, _)| key == column_label)
            .map(|(_, rows)| rows.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups.iter().map(|(k, rows)| (k.as_str(), rows.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total rows across all groups, counting cross-period duplicates.
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|(_, rows)| rows.len()).sum()
    }

    fn push(&mut self, column_label: &str, record: Record) {
        if let Some((_, rows)) = self.groups.iter_mut().find(|(key, _)| key == column_label) {
            rows.push(record);
        } else {
            self.groups.push((column_label.to_string(), vec![record]));
        }
    }
}

/// Partition the rows assigned to `teacher` by period.
///
/// Matching is exact string equality (case-sensitive, untrimmed). No
/// matches leave a period's group empty.
pub fn pivot(records: &[Record], schema: &[PeriodDefinition], teacher: &str) -> PeriodGroups {
    let mut groups = PeriodGroups::for_schema(schema);

    for record in records {
        for period in schema {
            if record.get(period.column_label) == Some(teacher) {
                groups.push(period.column_label, record.without_period_columns(schema));
            }
        }
    }

    groups
}
