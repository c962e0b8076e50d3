// ABOUTME: Persistence layer for gradebook, owning the student collection and its backing file.
// ABOUTME: Provides the JSON file gateway, the record store, report writers, and configuration.

pub mod config;
pub mod gateway;
pub mod report;
pub mod store;

pub use config::{ConfigError, GradebookConfig};
pub use gateway::{GatewayError, JsonFileGateway, RecordGateway};
pub use report::{ExportError, write_table_report, write_text_report};
pub use store::{RecordStore, StoreError};
