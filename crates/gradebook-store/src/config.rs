// ABOUTME: Configuration loading for gradebook from environment variables.
// ABOUTME: Resolves the backing data file and the directory that receives exported reports.

use std::path::PathBuf;

use thiserror::Error;

use crate::report::{TABLE_REPORT_FILE, TEXT_REPORT_FILE};

/// Default backing file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "dados_alunos.json";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Paths used by the gradebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradebookConfig {
    pub data_file: PathBuf,
    pub report_dir: PathBuf,
}

impl GradebookConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - GRADEBOOK_DATA_FILE: backing JSON file (default: ./dados_alunos.json)
    /// - GRADEBOOK_REPORT_DIR: directory for exported reports (default: .)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`GradebookConfig::from_env`], reading values through `get`.
    pub fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = path_var(&get, "GRADEBOOK_DATA_FILE")?
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let report_dir =
            path_var(&get, "GRADEBOOK_REPORT_DIR")?.unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            data_file,
            report_dir,
        })
    }

    /// Default destination of the plain-text report.
    pub fn text_report_path(&self) -> PathBuf {
        self.report_dir.join(TEXT_REPORT_FILE)
    }

    /// Default destination of the table report.
    pub fn table_report_path(&self) -> PathBuf {
        self.report_dir.join(TABLE_REPORT_FILE)
    }
}

fn path_var<F>(get: &F, key: &'static str) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
        Some(value) => Ok(Some(PathBuf::from(value))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn config_loads_defaults() {
        let env = vars(&[]);
        let config = GradebookConfig::from_vars(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.data_file, PathBuf::from("dados_alunos.json"));
        assert_eq!(config.report_dir, PathBuf::from("."));
        assert_eq!(
            config.text_report_path(),
            PathBuf::from("./relatorio_notas.txt")
        );
        assert_eq!(
            config.table_report_path(),
            PathBuf::from("./relatorio_alunos.csv")
        );
    }

    #[test]
    fn config_reads_overrides() {
        let env = vars(&[
            ("GRADEBOOK_DATA_FILE", "/var/lib/gradebook/students.json"),
            ("GRADEBOOK_REPORT_DIR", "/tmp/reports"),
        ]);
        let config = GradebookConfig::from_vars(|k| env.get(k).cloned()).unwrap();

        assert_eq!(
            config.data_file,
            PathBuf::from("/var/lib/gradebook/students.json")
        );
        assert_eq!(
            config.table_report_path(),
            PathBuf::from("/tmp/reports/relatorio_alunos.csv")
        );
    }

    #[test]
    fn config_rejects_empty_value() {
        let env = vars(&[("GRADEBOOK_DATA_FILE", "  ")]);
        let err = GradebookConfig::from_vars(|k| env.get(k).cloned()).unwrap_err();

        assert!(
            err.to_string().contains("GRADEBOOK_DATA_FILE"),
            "error should name the variable: {}",
            err
        );
    }
}
