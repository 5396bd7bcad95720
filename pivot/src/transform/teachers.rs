//! Teacher discovery.

use indexmap::IndexSet;

use crate::models::Record;
use crate::periods::PeriodDefinition;

/// Collect the distinct teacher names found in any period column.
///
/// Rows are scanned in order and, within a row, periods in schema order;
/// the result keeps first-seen order. Empty or missing cells are skipped.
/// No validation is done on the names themselves.
pub fn discover_teachers(records: &[Record], schema: &[PeriodDefinition]) -> Vec<String> {
    let mut teachers: IndexSet<&str> = IndexSet::new();

    for record in records {
        for period in schema {
            match record.get(period.column_label) {
                Some(name) if !name.is_empty() => {
                    teachers.insert(name);
                }
                _ => {}
            }
        }
    }

    teachers.into_iter().map(String::from).collect()
}
