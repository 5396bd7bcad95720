//! The period schema.
//!
//! Fixed list of periods the roster export carries, each paired with the
//! column holding the teacher assigned for that period.

use serde::Serialize;

/// One period of the school day and the roster column naming its teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDefinition {
    /// Display label, e.g. `Period 03`.
    pub period: &'static str,
    /// Source column carrying the assigned teacher.
    pub column_label: &'static str,
}

impl PeriodDefinition {
    pub const fn new(period: &'static str, column_label: &'static str) -> Self {
        Self {
            period,
            column_label,
        }
    }
}

/// Periods in display order. Column labels are pairwise distinct.
pub const PERIOD_COLUMNS: &[PeriodDefinition] = &[
    PeriodDefinition::new("Period 01", "Period 01 Teacher - Room"),
    PeriodDefinition::new("Period 02", "Period 02 Teacher - Room"),
    PeriodDefinition::new("Period 03", "Period 03 Teacher - Room"),
    PeriodDefinition::new("Period 04", "Period 04 Teacher - Room"),
    PeriodDefinition::new("Period 05", "Period 05 Teacher - Room"),
    PeriodDefinition::new("Period 06", "Period 06 Teacher - Room"),
    PeriodDefinition::new("Period 07", "Period 07 Teacher - Room"),
];

/// Find the period whose teacher column is `column_label`.
pub fn find_by_column<'a>(
    schema: &'a [PeriodDefinition],
    column_label: &str,
) -> Option<&'a PeriodDefinition> {
    schema.iter().find(|p| p.column_label == column_label)
}

/// Whether `field` is one of the schema's teacher columns.
pub fn is_period_column(schema: &[PeriodDefinition], field: &str) -> bool {
    schema.iter().any(|p| p.column_label == field)
}
