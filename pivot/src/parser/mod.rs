//! CSV ingestion.
//!
//! Accepts an input file, checks that it is a CSV, and parses it into a
//! [`RecordStore`]. No roster-specific logic lives here.

use csv::ReaderBuilder;
use indexmap::IndexSet;
use std::path::Path;
use tracing::debug;

use crate::error::{IngestError, IngestResult};
use crate::models::{Record, RecordStore};

/// MIME subtypes accepted for input.
const ALLOWED_SUBTYPES: &[&str] = &["csv"];

/// A file handed to the pipeline, as a browser or CLI would present it.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, deriving its MIME type from the extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> IngestResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, mime_type_for_path(path), bytes))
    }

    /// Subtype half of the MIME type (`csv` for `text/csv`).
    pub fn mime_subtype(&self) -> Option<&str> {
        self.mime_type.split('/').nth(1)
    }

    pub fn is_csv(&self) -> bool {
        self.mime_subtype()
            .is_some_and(|sub| ALLOWED_SUBTYPES.contains(&sub))
    }
}

/// MIME type for a path, from its extension.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Reject non-CSV input, then parse it.
pub fn ingest(file: &InputFile) -> IngestResult<RecordStore> {
    if !file.is_csv() {
        debug!(name = %file.name, mime = %file.mime_type, "rejected non-csv input");
        return Err(IngestError::NotCsv);
    }
    parse_bytes(&file.bytes)
}

/// Parse CSV bytes with a header row.
///
/// Invalid UTF-8 is decoded lossily. Short rows lack their trailing keys,
/// extra cells are dropped and blank lines are skipped.
pub fn parse_bytes(bytes: &[u8]) -> IngestResult<RecordStore> {
    let content = String::from_utf8_lossy(bytes);
    parse_str(&content)
}

/// Parse CSV text with a header row.
pub fn parse_str(content: &str) -> IngestResult<RecordStore> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let fields: IndexSet<&String> = headers.iter().collect();
    let fields: Vec<String> = fields.into_iter().cloned().collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            // First column carrying a repeated header wins.
            if !record.contains(header) {
                record.insert(header.as_str(), value);
            }
        }
        records.push(record);
    }

    debug!(fields = fields.len(), records = records.len(), "parsed csv");
    Ok(RecordStore::new(fields, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_csv() {
        let store = parse_str("Name,Grade\nAlice,9\nBob,10").unwrap();

        assert_eq!(store.fields, vec!["Name", "Grade"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records[0].get("Name"), Some("Alice"));
        assert_eq!(store.records[1].get("Grade"), Some("10"));
    }

    #[test]
    fn test_quoted_values_with_commas() {
        let csv = "Name,Period 01 Teacher - Room\nA,\"Smith, Jane - 101\"";
        let store = parse_str(csv).unwrap();

        assert_eq!(
            store.records[0].get("Period 01 Teacher - Room"),
            Some("Smith, Jane - 101")
        );
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let store = parse_str("a,b\n 1 ,2").unwrap();
        assert_eq!(store.records[0].get("a"), Some(" 1 "));
    }

    #[test]
    fn test_short_row_lacks_keys() {
        let store = parse_str("a,b,c\n1,2").unwrap();

        assert_eq!(store.records[0].get("b"), Some("2"));
        assert_eq!(store.records[0].get("c"), None);
    }

    #[test]
    fn test_extra_cells_ignored() {
        let store = parse_str("a,b\n1,2,3,4").unwrap();
        assert_eq!(store.records[0].len(), 2);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let store = parse_str("a,b\n1,2\n\n3,4\n").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_headers_first_wins() {
        let store = parse_str("a,b,a\n1,2,3").unwrap();

        assert_eq!(store.fields, vec!["a", "b"]);
        assert_eq!(store.records[0].get("a"), Some("1"));
    }

    #[test]
    fn test_bom_stripped() {
        let store = parse_str("\u{feff}Name,X\nA,1").unwrap();
        assert_eq!(store.fields[0], "Name");
    }

    #[test]
    fn test_empty_input() {
        let store = parse_str("").unwrap();
        assert!(store.fields.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_non_csv_rejected() {
        let file = InputFile::new("roster.xlsx", "application/vnd.ms-excel", b"a,b".to_vec());
        let err = ingest(&file).unwrap_err();
        assert!(matches!(err, IngestError::NotCsv));
    }

    #[test]
    fn test_csv_accepted() {
        let file = InputFile::new("roster.csv", "text/csv", b"a,b\n1,2".to_vec());
        assert_eq!(ingest(&file).unwrap().len(), 1);
    }

    #[test]
    fn test_mime_type_for_path() {
        assert_eq!(mime_type_for_path(Path::new("roster.CSV")), "text/csv");
        assert_eq!(mime_type_for_path(Path::new("roster.txt")), "application/octet-stream");
        assert_eq!(mime_type_for_path(Path::new("roster")), "application/octet-stream");
    }
}
