//! Workbook export.
//!
//! Writes one worksheet per assembled sheet using `rust_xlsxwriter`.
//! Worksheet names are the sheet labels clipped to [`MAX_SHEET_NAME_LEN`]
//! characters; the labels stored on the sheets are left untouched.

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ExportError, ExportResult};
use crate::models::Sheet;
use crate::transform::assembler::sheet_grid;

/// Longest worksheet name handed to the writer.
pub const MAX_SHEET_NAME_LEN: usize = 30;

/// Default extension of the exported file.
///
/// The content is always an OOXML (`.xlsx` format) workbook, since that is
/// what `rust_xlsxwriter` writes. Excel warns that format and extension
/// differ when opening a `.xls` file; pass `xlsx` to avoid the prompt.
pub const DEFAULT_EXTENSION: &str = "xls";

/// Where and how the workbook is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory receiving `<teacher>.<extension>`.
    pub output_dir: PathBuf,
    /// File extension, without the dot.
    pub extension: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ExportOptions {
    /// Output path for `teacher`'s workbook.
    ///
    /// Path separators in the teacher name are replaced so the file stays
    /// inside `output_dir`.
    pub fn output_path(&self, teacher: &str) -> PathBuf {
        let stem: String = teacher
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.output_dir.join(format!("{}.{}", stem, self.extension))
    }
}

/// Worksheet name for a sheet label: its first 30 characters.
pub fn worksheet_name(label: &str) -> String {
    label.chars().take(MAX_SHEET_NAME_LEN).collect()
}

/// Build the workbook for `sheets`, one worksheet each.
///
/// Clipping can make two labels share a worksheet name; that is reported
/// as an error on the second sheet.
pub fn build_workbook(sheets: &[Sheet], fields: &[String]) -> ExportResult<Workbook> {
    let mut workbook = Workbook::new();
    // Worksheet names compare case-insensitively.
    let mut used: HashSet<String> = HashSet::new();

    for sheet in sheets {
        let name = worksheet_name(&sheet.label);
        if !used.insert(name.to_lowercase()) {
            return Err(ExportError::Worksheet {
                name,
                message: "worksheet name already used by another period".to_string(),
            });
        }
        let worksheet = workbook
            .add_worksheet()
            .set_name(&name)
            .map_err(|e| worksheet_error(&name, e))?;
        write_sheet(worksheet, sheet, fields).map_err(|e| worksheet_error(&name, e))?;
    }

    Ok(workbook)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &Sheet,
    fields: &[String],
) -> Result<(), XlsxError> {
    for (row, cells) in sheet_grid(sheet, fields).iter().enumerate() {
        let row = u32::try_from(row).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in cells.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
            // Missing and empty cells stay blank.
            match cell {
                Some(value) if !value.is_empty() => {
                    worksheet.write_string(row, col, *value)?;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn worksheet_error(name: &str, err: XlsxError) -> ExportError {
    ExportError::Worksheet {
        name: name.to_string(),
        message: err.to_string(),
    }
}

/// Serialize the workbook to bytes.
pub fn write_workbook_to_buffer(sheets: &[Sheet], fields: &[String]) -> ExportResult<Vec<u8>> {
    let mut workbook = build_workbook(sheets, fields)?;
    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::Save(e.to_string()))
}

/// Write the workbook for `teacher` under `options.output_dir`.
///
/// Returns the path written.
pub fn write_workbook(
    sheets: &[Sheet],
    fields: &[String],
    teacher: &str,
    options: &ExportOptions,
) -> ExportResult<PathBuf> {
    let path = options.output_path(teacher);
    let content = write_workbook_to_buffer(sheets, fields)?;
    write_file(&path, &content)?;
    debug!(path = %path.display(), sheets = sheets.len(), "wrote workbook");
    Ok(path)
}

fn write_file(path: &Path, content: &[u8]) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}
