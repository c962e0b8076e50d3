// ABOUTME: Core library for gradebook, containing the student record model and grade aggregation.
// ABOUTME: Report renderers live in the export module and produce plain strings for the store to write.

pub mod export;
pub mod model;
pub mod situation;

pub use model::{GradeParseError, RecordUpdate, StudentRecord, parse_grades};
pub use situation::{Assessment, PASSING_AVERAGE, Situation, assess};
