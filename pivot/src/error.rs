//! Error types for the roster pivot pipeline.
//!
//! - [`IngestError`] - rejecting or parsing the input file
//! - [`GenerationError`] - inconsistencies while assembling sheets
//! - [`ExportError`] - writing the workbook
//! - [`AppError`] - top-level wrapper used by the CLI
//!
//! Generation errors are not fatal and are never raised through `?`; they
//! are collected on the generation report instead.
//!
//! Conversion into [`AppError`] is automatic via `From`, so `?` works
//! across the boundaries.

use thiserror::Error;

// =============================================================================
// Ingestion Errors
// =============================================================================

/// Errors while accepting and parsing an input file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file is not a CSV (checked on the MIME subtype).
    #[error("Please input a csv file")]
    NotCsv,

    /// The CSV reader rejected the content. Carries the reader's message as is.
    #[error("{0}")]
    Parse(String),

    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::Parse(err.to_string())
    }
}

// =============================================================================
// Generation Errors
// =============================================================================

/// Errors found while turning period groups into sheets.
///
/// These never abort a generation run: the offending sheet is skipped and
/// the remaining periods are still assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A group key does not resolve to any known period definition.
    #[error(
        "An unknown error occurred generating sheet data, unable to find period data for column {0}"
    )]
    UnknownPeriodColumn(String),
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing the workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The workbook writer refused a worksheet or one of its cells.
    #[error("Cannot write worksheet '{name}': {message}")]
    Worksheet { name: String, message: String },

    /// Serializing or saving the workbook failed.
    #[error("Failed to save workbook: {0}")]
    Save(String),

    /// Output directory problems.
    #[error("Export IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Application Errors (top-level)
// =============================================================================

/// Top-level error returned by the CLI commands.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// The command line asked for something the pipeline cannot do.
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// Error message held by a session after a failed step.
    #[error("{0}")]
    Session(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for ingestion.
pub type IngestResult<T> = Result<T, IngestError>;

/// Result type for workbook export.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for CLI commands.
pub type AppResult<T> = Result<T, AppError>;
