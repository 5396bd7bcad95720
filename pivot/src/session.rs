//! Interactive state around the pipeline.
//!
//! Holds what a form-driven front end keeps between user actions: the
//! loaded roster, the discovered teachers, the current selection, the
//! free-text label, and a single current error message. Every failure is
//! turned into that error message; nothing propagates out of a session.

use std::path::PathBuf;
use tracing::{debug, warn};

use crate::export::{write_workbook, ExportOptions};
use crate::models::RecordStore;
use crate::parser::{ingest, InputFile};
use crate::periods::{PeriodDefinition, PERIOD_COLUMNS};
use crate::transform::assembler::retained_fields;
use crate::transform::pipeline::{generate, Generation};
use crate::transform::teachers::discover_teachers;

#[derive(Debug, Clone)]
pub struct Session {
    schema: &'static [PeriodDefinition],
    store: RecordStore,
    teachers: Vec<String>,
    selected_teacher: String,
    label: String,
    error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_schema(PERIOD_COLUMNS)
    }

    pub fn with_schema(schema: &'static [PeriodDefinition]) -> Self {
        Self {
            schema,
            store: RecordStore::default(),
            teachers: Vec::new(),
            selected_teacher: String::new(),
            label: String::new(),
            error: None,
        }
    }

    /// Load a new roster, replacing the previous one.
    ///
    /// The error, selection and store are cleared first, so a rejected or
    /// unparsable file leaves an empty session with the error set.
    /// Returns whether the file was loaded.
    pub fn load(&mut self, file: &InputFile) -> bool {
        self.error = None;
        self.selected_teacher.clear();
        self.store = RecordStore::default();
        self.teachers.clear();

        match ingest(file) {
            Ok(store) => {
                self.teachers = discover_teachers(&store.records, self.schema);
                debug!(
                    file = %file.name,
                    records = store.len(),
                    teachers = self.teachers.len(),
                    "loaded roster"
                );
                self.store = store;
                true
            }
            Err(err) => {
                warn!(file = %file.name, "{}", err);
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Teachers in first-seen order.
    pub fn teachers(&self) -> &[String] {
        &self.teachers
    }

    pub fn fields(&self) -> &[String] {
        &self.store.fields
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Fields carried into every sheet.
    pub fn retained_fields(&self) -> Vec<String> {
        retained_fields(&self.store.fields, self.schema)
    }

    /// Whether `teacher` was discovered in the loaded roster.
    pub fn is_known_teacher(&self, teacher: &str) -> bool {
        self.teachers.iter().any(|t| t == teacher)
    }

    /// Select the teacher to pivot on. Names outside the discovered list
    /// are accepted and logged; they produce empty sheets.
    pub fn select_teacher(&mut self, teacher: impl Into<String>) {
        self.selected_teacher = teacher.into();
        if !self.selected_teacher.is_empty() && !self.is_known_teacher(&self.selected_teacher) {
            warn!(
                teacher = %self.selected_teacher,
                "teacher does not appear in any period column"
            );
        }
    }

    pub fn selected_teacher(&self) -> &str {
        &self.selected_teacher
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a teacher is selected and a roster is loaded.
    pub fn can_generate(&self) -> bool {
        !self.selected_teacher.is_empty() && !self.store.is_empty()
    }

    /// Run the pivot and assembly for the current selection.
    ///
    /// Clears any previous error. Each skipped group then overwrites the
    /// error message, so the last one remains; the full list stays on the
    /// returned [`Generation`].
    pub fn generate(&mut self) -> Generation {
        self.error = None;
        let run = generate(&self.store, self.schema, &self.selected_teacher, &self.label);
        for err in &run.errors {
            self.error = Some(err.to_string());
        }
        run
    }

    /// Generate and write the workbook.
    ///
    /// Returns the written path, or `None` with the error message set.
    pub fn export(&mut self, options: &ExportOptions) -> Option<PathBuf> {
        let run = self.generate();
        match write_workbook(&run.sheets, &run.retained_fields, &run.teacher, options) {
            Ok(path) => Some(path),
            Err(err) => {
                warn!("{}", err);
                self.error = Some(err.to_string());
                None
            }
        }
    }
}
