//! Loader-specific types for knowledge table files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading knowledge tables.
#[derive(Error, Debug)]
pub enum KbError {
    /// I/O error reading a table file.
    #[error("IO error reading knowledge table: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing required column in a row.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },

    /// A required field is blank.
    #[error("Empty value in column '{column}' at row {row}")]
    EmptyField {
        /// The column name.
        column: String,
        /// The 1-based data row number.
        row: usize,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required file missing from a knowledge directory.
    #[error("Required knowledge table not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The type of file that was missing.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },
}

/// Result type for knowledge table operations.
pub type KbResult<T> = Result<T, KbError>;

/// Configuration for loading knowledge tables.
#[derive(Debug, Clone, Default)]
pub struct LoadConfig {
    /// Fail on the first malformed row instead of skipping it.
    pub strict: bool,
}

impl LoadConfig {
    /// Creates a config that fails on the first malformed row.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Statistics from loading one table file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows read from the file.
    pub total_records: usize,
    /// Rows inserted into the knowledge base.
    pub inserted_records: usize,
    /// Malformed rows skipped (lenient mode only).
    pub error_count: usize,
}

impl LoadStats {
    /// Returns the percentage of rows that were inserted.
    pub fn insert_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.inserted_records as f64 / self.total_records as f64) * 100.0
        }
    }
}

/// Discovered knowledge table files in a directory.
#[derive(Debug, Clone, Default)]
pub struct KbFiles {
    /// Symptom keyword to condition tables.
    pub symptom_condition_files: Vec<PathBuf>,
    /// Condition to medication tables.
    pub condition_medication_files: Vec<PathBuf>,
}

impl KbFiles {
    /// Creates a new empty KbFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one symptom table is present.
    pub fn has_required_files(&self) -> bool {
        !self.symptom_condition_files.is_empty()
    }

    /// Returns a list of missing required files.
    pub fn missing_files(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.symptom_condition_files.is_empty() {
            missing.push("SymptomConditions");
        }
        missing
    }
}
