//! End-to-end tests: roster CSV in, workbook out, read back with calamine.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use roster_pivot::{ExportOptions, InputFile, Session, PERIOD_COLUMNS};
use std::path::Path;
use tempfile::TempDir;

const ROSTER: &str = "\
Student,Grade,Period 01 Teacher - Room,Period 02 Teacher - Room,Period 03 Teacher - Room,Counselor
Ada,9,\"Smith, Jane - 101\",\"Doe, K - 4\",\"Smith, Jane - 101\",Ward
Ben,10,\"Doe, K - 4\",\"Smith, Jane - 101\",,
Cy,9,\"Doe, K - 4\",\"Lee, M - 7\",\"Doe, K - 4\",Ward
";

fn cell(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn export(teacher: &str, label: &str) -> (TempDir, std::path::PathBuf) {
    let mut session = Session::new();
    assert!(session.load(&InputFile::new("roster.csv", "text/csv", ROSTER.as_bytes().to_vec())));
    session.select_teacher(teacher);
    session.set_label(label);

    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions {
        output_dir: dir.path().to_path_buf(),
        ..ExportOptions::default()
    };
    let path = session.export(&options).expect("workbook written");
    assert!(session.error().is_none());
    (dir, path)
}

fn open(path: &Path) -> Xlsx<std::io::BufReader<std::fs::File>> {
    open_workbook(path).expect("readable workbook")
}

#[test]
fn test_file_named_after_teacher() {
    let (dir, path) = export("Smith, Jane - 101", "");
    assert_eq!(path, dir.path().join("Smith, Jane - 101.xls"));
}

#[test]
fn test_one_worksheet_per_period() {
    let (_dir, path) = export("Smith, Jane - 101", "");
    let workbook = open(&path);

    let names = workbook.sheet_names();
    assert_eq!(names.len(), PERIOD_COLUMNS.len());
    assert_eq!(names[0], "Smith Period 01");
    assert_eq!(names[6], "Smith Period 07");
}

#[test]
fn test_sheet_layout() {
    let (_dir, path) = export("Smith, Jane - 101", "Fall 2024");
    let mut workbook = open(&path);

    let p01 = workbook.worksheet_range("Smith Period 01").unwrap();
    assert_eq!(cell(&p01, 0, 0), "Smith, Jane - 101");
    assert_eq!(cell(&p01, 0, 1), "Period 01");
    assert_eq!(cell(&p01, 0, 2), "Fall 2024");
    assert_eq!(cell(&p01, 1, 0), "");
    assert_eq!(cell(&p01, 2, 0), "Student");
    assert_eq!(cell(&p01, 2, 1), "Grade");
    assert_eq!(cell(&p01, 2, 2), "Counselor");
    assert_eq!(cell(&p01, 3, 0), "Ada");
    assert_eq!(cell(&p01, 3, 1), "9");
    assert_eq!(cell(&p01, 3, 2), "Ward");
    assert_eq!(cell(&p01, 4, 0), "");

    let p02 = workbook.worksheet_range("Smith Period 02").unwrap();
    assert_eq!(cell(&p02, 3, 0), "Ben");
    assert_eq!(cell(&p02, 3, 2), "");

    let p03 = workbook.worksheet_range("Smith Period 03").unwrap();
    assert_eq!(cell(&p03, 3, 0), "Ada");
}

#[test]
fn test_empty_periods_keep_header_block() {
    let (_dir, path) = export("Smith, Jane - 101", "");
    let mut workbook = open(&path);

    let p05 = workbook.worksheet_range("Smith Period 05").unwrap();
    assert_eq!(cell(&p05, 0, 1), "Period 05");
    assert_eq!(cell(&p05, 2, 0), "Student");
    assert_eq!(cell(&p05, 3, 0), "");
}

#[test]
fn test_period_columns_never_exported() {
    let (_dir, path) = export("Doe, K - 4", "");
    let mut workbook = open(&path);

    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).unwrap();
        for row in range.rows() {
            for value in row {
                if let Data::String(s) = value {
                    assert!(!s.ends_with("Teacher - Room"), "{name} leaked {s}");
                }
            }
        }
    }
}

#[test]
fn test_long_label_clipped_in_workbook_only() {
    let long_name = "Montgomery-Richardson, Ann";
    let csv = format!("Student,Period 01 Teacher - Room\nAda,\"{}\"\n", long_name);

    let mut session = Session::new();
    session.load(&InputFile::new("roster.csv", "text/csv", csv.into_bytes()));
    session.select_teacher(long_name);

    let run = session.generate();
    assert_eq!(run.sheets[0].label, "Montgomery-Richardson Period 01");

    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions {
        output_dir: dir.path().to_path_buf(),
        extension: "xlsx".into(),
    };

    // Every period clips to the same 30 characters, so the export fails
    // and the session reports it.
    assert!(session.export(&options).is_none());
    assert!(session.error().unwrap().contains("Montgomery-Richardson Period 0"));
    assert_eq!(run.sheets[0].label, "Montgomery-Richardson Period 01");
}

#[test]
fn test_label_at_limit_not_clipped() {
    let name = "Richardson-Whitfield, Ann";
    let csv = format!("Student,Period 01 Teacher - Room\nAda,\"{}\"\n", name);

    let mut session = Session::new();
    session.load(&InputFile::new("roster.csv", "text/csv", csv.into_bytes()));
    session.select_teacher(name);

    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions {
        output_dir: dir.path().to_path_buf(),
        extension: "xlsx".into(),
    };
    let path = session.export(&options).unwrap();

    let workbook = open(&path);
    assert_eq!(workbook.sheet_names()[0], "Richardson-Whitfield Period 01");
}
