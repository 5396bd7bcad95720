//! Roster transformation.
//!
//! - Teachers: discover every teacher named in a period column
//! - Pivot: group a teacher's rows by period
//! - Assembler: turn period groups into labeled sheets
//! - Pipeline: one generation run over a loaded store

pub mod assembler;
pub mod pipeline;
pub mod pivot;
pub mod teachers;

pub use assembler::{assemble, retained_fields, sheet_grid, sheet_label, Assembly};
pub use pipeline::{generate, Generation};
pub use pivot::{pivot, PeriodGroups};
pub use teachers::discover_teachers;
