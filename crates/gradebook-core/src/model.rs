// ABOUTME: Defines StudentRecord, the unit of the gradebook collection, and RecordUpdate for partial edits.
// ABOUTME: Serialized field names (nome, matricula, curso, notas) match the backing file format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single student: display name, unique enrollment id, course, and the
/// grades in the order they were entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "matricula")]
    pub enrollment_id: String,
    #[serde(rename = "curso")]
    pub course: String,
    /// Older files may omit this field entirely.
    #[serde(rename = "notas", default)]
    pub grades: Vec<f64>,
}

impl StudentRecord {
    /// Create a record with no grades.
    pub fn new(name: String, enrollment_id: String, course: String) -> Self {
        Self {
            name,
            enrollment_id,
            course,
            grades: Vec::new(),
        }
    }

    /// Apply the present fields of `update`, leaving the rest (and grades) untouched.
    pub fn apply(&mut self, update: &RecordUpdate) {
        if let Some(ref name) = update.name {
            self.name = name.clone();
        }
        if let Some(ref course) = update.course {
            self.course = course.clone();
        }
    }
}

/// A sparse edit of a record's descriptive fields. `None` means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub course: Option<String>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.course.is_none()
    }
}

/// Errors produced when reading a comma-separated grade list.
#[derive(Debug, Error, PartialEq)]
pub enum GradeParseError {
    #[error("invalid grade {0:?}: expected a number")]
    NotANumber(String),

    #[error("invalid grade {0:?}: must be a finite number")]
    NotFinite(String),
}

/// Parse user input such as `"7, 8.5,9"` into grades, preserving order.
///
/// Every comma-separated item must be a finite number; an empty item
/// (including an entirely empty input) is rejected.
pub fn parse_grades(input: &str) -> Result<Vec<f64>, GradeParseError> {
    input
        .split(',')
        .map(|raw| {
            let item = raw.trim();
            let value: f64 = item
                .parse()
                .map_err(|_| GradeParseError::NotANumber(item.to_string()))?;
            if !value.is_finite() {
                return Err(GradeParseError::NotFinite(item.to_string()));
            }
            Ok(value)
        })
        .collect()
}
