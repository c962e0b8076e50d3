// ABOUTME: In-memory ordered collection of student records with CRUD and grade operations.
// ABOUTME: Every mutation is saved through the gateway before returning; a failed save leaves memory untouched.

use gradebook_core::{Assessment, RecordUpdate, StudentRecord, assess};
use thiserror::Error;

use crate::gateway::{GatewayError, JsonFileGateway, RecordGateway};

/// Errors returned by [`RecordStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a student with enrollment id {0} already exists")]
    DuplicateEnrollment(String),

    #[error("no student with enrollment id {0}")]
    NotFound(String),

    #[error("grade {0} is not a finite number")]
    InvalidGrade(f64),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Owns the student collection. Records keep insertion order and
/// enrollment ids are unique.
pub struct RecordStore<G: RecordGateway = JsonFileGateway> {
    gateway: G,
    records: Vec<StudentRecord>,
}

impl<G: RecordGateway> RecordStore<G> {
    /// Load the collection from `gateway`. A corrupt backing file is an
    /// error rather than an empty store.
    pub fn open(gateway: G) -> Result<Self, StoreError> {
        let records = gateway.load()?;
        tracing::debug!("record store opened with {} records", records.len());
        Ok(Self { gateway, records })
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Create a record with no grades.
    pub fn enroll(
        &mut self,
        name: &str,
        enrollment_id: &str,
        course: &str,
    ) -> Result<&StudentRecord, StoreError> {
        if self.position(enrollment_id).is_some() {
            return Err(StoreError::DuplicateEnrollment(enrollment_id.to_string()));
        }

        let mut next = self.records.clone();
        next.push(StudentRecord::new(
            name.to_string(),
            enrollment_id.to_string(),
            course.to_string(),
        ));
        self.commit(next)?;

        tracing::info!("enrolled {} ({})", name, enrollment_id);
        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// Overwrite the name and/or course of a record. Grades are not touched.
    pub fn update_fields(
        &mut self,
        enrollment_id: &str,
        update: &RecordUpdate,
    ) -> Result<&StudentRecord, StoreError> {
        self.mutate(enrollment_id, |record| record.apply(update))
    }

    /// Remove a record. Deleting an unknown id is not an error; the
    /// collection is saved either way. Returns whether a record was removed.
    pub fn delete(&mut self, enrollment_id: &str) -> Result<bool, StoreError> {
        let mut next = self.records.clone();
        next.retain(|r| r.enrollment_id != enrollment_id);
        let removed = next.len() != self.records.len();
        self.commit(next)?;

        if removed {
            tracing::info!("deleted {}", enrollment_id);
        } else {
            tracing::debug!("delete of unknown enrollment id {}", enrollment_id);
        }
        Ok(removed)
    }

    /// Append grades after the existing ones, in the given order.
    /// NaN and infinite grades are rejected before anything is saved.
    pub fn append_grades(
        &mut self,
        enrollment_id: &str,
        grades: &[f64],
    ) -> Result<&StudentRecord, StoreError> {
        check_grades(grades)?;
        self.mutate(enrollment_id, |record| record.grades.extend_from_slice(grades))
    }

    /// Replace the whole grade sequence. Same validation as [`Self::append_grades`].
    pub fn replace_grades(
        &mut self,
        enrollment_id: &str,
        grades: Vec<f64>,
    ) -> Result<&StudentRecord, StoreError> {
        check_grades(&grades)?;
        self.mutate(enrollment_id, move |record| record.grades = grades)
    }

    pub fn find_by_id(&self, enrollment_id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.enrollment_id == enrollment_id)
    }

    /// Case-insensitive exact name match; the first record in order wins.
    pub fn find_by_name(&self, name: &str) -> Option<&StudentRecord> {
        let needle = name.to_lowercase();
        self.records.iter().find(|r| r.name.to_lowercase() == needle)
    }

    /// Resolve an identifier that may be either an enrollment id or a name.
    /// An id match is preferred over a name match.
    pub fn lookup(&self, identifier: &str) -> Option<&StudentRecord> {
        self.find_by_id(identifier)
            .or_else(|| self.find_by_name(identifier))
    }

    /// Average and situation of one student's grades.
    pub fn assess(&self, enrollment_id: &str) -> Result<Assessment, StoreError> {
        self.find_by_id(enrollment_id)
            .map(|r| assess(&r.grades))
            .ok_or_else(|| StoreError::NotFound(enrollment_id.to_string()))
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, enrollment_id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.enrollment_id == enrollment_id)
    }

    /// Apply `f` to a copy of the matching record, persist, then keep the copy.
    fn mutate<F>(&mut self, enrollment_id: &str, f: F) -> Result<&StudentRecord, StoreError>
    where
        F: FnOnce(&mut StudentRecord),
    {
        let idx = self
            .position(enrollment_id)
            .ok_or_else(|| StoreError::NotFound(enrollment_id.to_string()))?;

        let mut next = self.records.clone();
        f(&mut next[idx]);
        self.commit(next)?;

        tracing::info!("updated {}", enrollment_id);
        Ok(&self.records[idx])
    }

    fn commit(&mut self, next: Vec<StudentRecord>) -> Result<(), StoreError> {
        self.gateway.save(&next)?;
        self.records = next;
        Ok(())
    }
}

/// JSON has no representation for NaN or infinity.
fn check_grades(grades: &[f64]) -> Result<(), StoreError> {
    match grades.iter().find(|g| !g.is_finite()) {
        Some(&bad) => Err(StoreError::InvalidGrade(bad)),
        None => Ok(()),
    }
}
