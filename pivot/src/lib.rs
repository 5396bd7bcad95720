//! # Roster Pivot - split a roster export into teacher period sheets
//!
//! Reads a student roster CSV (one row per student, one "teacher" column
//! per period) and regroups it into one worksheet per period for a chosen
//! teacher.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│   Parser    │────▶│  Teachers   │────▶│   Pivot +   │────▶│  Workbook   │
//! │  (roster)   │     │  (records)  │     │ (discovery) │     │  Assembler  │     │  (export)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_pivot::{InputFile, Session, ExportOptions};
//!
//! let mut session = Session::new();
//! session.load(&InputFile::from_path("roster.csv")?);
//! session.select_teacher(session.teachers()[0].clone());
//! session.set_label("Fall 2024");
//! let path = session.export(&ExportOptions::default());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`periods`] - The fixed period schema
//! - [`models`] - Records, the record store, and sheets
//! - [`parser`] - CSV ingestion
//! - [`transform`] - Teacher discovery, pivot, and sheet assembly
//! - [`export`] - Workbook writing
//! - [`session`] - Load/select/generate state with a single error message

pub mod error;
pub mod models;
pub mod periods;

pub mod parser;

pub mod transform;

pub mod export;

pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{AppError, ExportError, GenerationError, IngestError};

pub use models::{Record, RecordStore, Sheet};

pub use periods::{PeriodDefinition, PERIOD_COLUMNS};

pub use parser::{ingest, mime_type_for_path, parse_bytes, parse_str, InputFile};

pub use transform::{
    assemble, discover_teachers, generate, pivot, retained_fields, sheet_grid, sheet_label,
    Assembly, Generation, PeriodGroups,
};

pub use export::{
    build_workbook, worksheet_name, write_workbook, write_workbook_to_buffer, ExportOptions,
    MAX_SHEET_NAME_LEN,
};

pub use session::Session;
