//! One generation run: pivot a store for a teacher and assemble the sheets.
//!
//! ```rust,ignore
//! use roster_pivot::{generate, parse_str, PERIOD_COLUMNS};
//!
//! let store = parse_str("Name,Period 01 Teacher - Room\nA,\"Smith, J\"")?;
//! let run = generate(&store, PERIOD_COLUMNS, "Smith, J", "Fall roster");
//! assert_eq!(run.sheets[0].rows.len(), 1);
//! ```

use serde::Serialize;
use tracing::debug;

use super::assembler::{assemble, retained_fields};
use super::pivot::pivot;
use crate::error::GenerationError;
use crate::models::{RecordStore, Sheet};
use crate::periods::PeriodDefinition;

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    /// Selected teacher, as matched against period cells.
    pub teacher: String,
    /// Non-period fields, shared by every sheet of the run.
    pub retained_fields: Vec<String>,
    /// One sheet per resolved period, schema order.
    pub sheets: Vec<Sheet>,
    /// Groups that were skipped.
    #[serde(serialize_with = "serialize_errors")]
    pub errors: Vec<GenerationError>,
}

impl Generation {
    /// Most recent error message, as a single error state would show it.
    pub fn last_error(&self) -> Option<String> {
        self.errors.last().map(ToString::to_string)
    }

    pub fn row_count(&self) -> usize {
        self.sheets.iter().map(|s| s.rows.len()).sum()
    }
}

fn serialize_errors<S>(errors: &[GenerationError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

/// Pivot `store` for `teacher` and assemble one sheet per period.
///
/// Never fails as a whole: unresolved groups end up in
/// [`Generation::errors`] and the remaining sheets are kept. An empty
/// `teacher` is not rejected here, so callers should guard it.
pub fn generate(
    store: &RecordStore,
    schema: &[PeriodDefinition],
    teacher: &str,
    label: &str,
) -> Generation {
    let retained = retained_fields(&store.fields, schema);
    let groups = pivot(&store.records, schema, teacher);
    debug!(teacher, groups = groups.len(), rows = groups.row_count(), "pivoted roster");

    let assembly = assemble(&groups, schema, teacher, label);
    debug!(sheets = assembly.sheets.len(), errors = assembly.errors.len(), "assembled sheets");

    Generation {
        teacher: teacher.to_string(),
        retained_fields: retained,
        sheets: assembly.sheets,
        errors: assembly.errors,
    }
}
