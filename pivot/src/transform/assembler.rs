//! Assemble period groups into labeled sheets.
//!
//! Every sheet is laid out as:
//!
//! ```text
//! row 0   teacher | period | free-text label
//! row 1   (blank)
//! row 2   retained field names
//! row 3.. one row per projected record
//! ```

use tracing::warn;

use crate::error::GenerationError;
use crate::models::Sheet;
use crate::periods::{find_by_column, is_period_column, PeriodDefinition};
use crate::transform::pivot::PeriodGroups;

/// Sheets built for one run, plus any group that could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub sheets: Vec<Sheet>,
    pub errors: Vec<GenerationError>,
}

/// Field universe minus every period column, original order kept.
pub fn retained_fields(fields: &[String], schema: &[PeriodDefinition]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| !is_period_column(schema, field))
        .cloned()
        .collect()
}

/// Sheet label: the teacher name up to its first `", "`, then the period.
///
/// `"Smith, Jane"` with `"Period 03"` gives `"Smith Period 03"`.
pub fn sheet_label(teacher: &str, period: &str) -> String {
    let surname = teacher.split(", ").next().unwrap_or(teacher);
    format!("{} {}", surname, period)
}

/// Build one sheet per group, in group order.
///
/// A group whose key matches no period definition is reported and skipped;
/// the rest are still assembled.
pub fn assemble(
    groups: &PeriodGroups,
    schema: &[PeriodDefinition],
    teacher: &str,
    label: &str,
) -> Assembly {
    let mut assembly = Assembly::default();

    for (column_label, rows) in groups.iter() {
        let Some(period) = find_by_column(schema, column_label) else {
            let err = GenerationError::UnknownPeriodColumn(column_label.to_string());
            warn!(column = column_label, "{}", err);
            assembly.errors.push(err);
            continue;
        };

        assembly.sheets.push(Sheet {
            label: sheet_label(teacher, period.period),
            header_triple: [
                teacher.to_string(),
                period.period.to_string(),
                label.to_string(),
            ],
            rows: rows.to_vec(),
        });
    }

    assembly
}

/// Full cell grid of a sheet, as written to a worksheet.
///
/// `None` marks a blank cell: a key the record lacks.
pub fn sheet_grid<'a>(sheet: &'a Sheet, fields: &'a [String]) -> Vec<Vec<Option<&'a str>>> {
    let mut grid = Vec::with_capacity(sheet.rows.len() + 3);
    grid.push(sheet.header_triple.iter().map(|c| Some(c.as_str())).collect());
    grid.push(Vec::new());
    grid.push(fields.iter().map(|f| Some(f.as_str())).collect());
    grid.extend(sheet.cells(fields));
    grid
}
