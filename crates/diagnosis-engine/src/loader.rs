//! Knowledge table discovery.

use std::fs;
use std::path::Path;

use crate::types::{KbError, KbFiles, KbResult};

/// File name prefix of symptom keyword tables.
pub const SYMPTOM_CONDITIONS_PREFIX: &str = "symptom_conditions";

/// File name prefix of medication tables.
pub const CONDITION_MEDICATIONS_PREFIX: &str = "condition_medications";

/// Discovers knowledge table files in a directory.
///
/// Matches `symptom_conditions*.tsv` and `condition_medications*.tsv`.
/// Files of each kind are returned sorted by name so that load order is
/// stable across platforms.
pub fn discover_kb_files<P: AsRef<Path>>(path: P) -> KbResult<KbFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(KbError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut files = KbFiles::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let filename = entry.file_name();
        let filename_str = filename.to_string_lossy();

        if !filename_str.ends_with(".tsv") {
            continue;
        }

        if filename_str.starts_with(SYMPTOM_CONDITIONS_PREFIX) {
            files.symptom_condition_files.push(entry.path());
        } else if filename_str.starts_with(CONDITION_MEDICATIONS_PREFIX) {
            files.condition_medication_files.push(entry.path());
        }
    }

    files.symptom_condition_files.sort();
    files.condition_medication_files.sort();

    if !files.has_required_files() {
        return Err(KbError::RequiredFileMissing {
            file_type: files.missing_files().join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("symptom_conditions_b.tsv"), "").unwrap();
        fs::write(dir.path().join("symptom_conditions_a.tsv"), "").unwrap();
        fs::write(dir.path().join("condition_medications.tsv"), "").unwrap();
        fs::write(dir.path().join("symptom_conditions.txt"), "").unwrap();
        fs::write(dir.path().join("notes.tsv"), "").unwrap();

        let files = discover_kb_files(dir.path()).unwrap();

        let names: Vec<String> = files
            .symptom_condition_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["symptom_conditions_a.tsv", "symptom_conditions_b.tsv"]
        );
        assert_eq!(files.condition_medication_files.len(), 1);
    }

    #[test]
    fn test_discover_requires_symptom_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("condition_medications.tsv"), "").unwrap();

        let result = discover_kb_files(dir.path());
        assert!(matches!(result, Err(KbError::RequiredFileMissing { .. })));
    }

    #[test]
    fn test_discover_missing_directory() {
        let result = discover_kb_files("/nonexistent/knowledge");
        assert!(matches!(result, Err(KbError::DirectoryNotFound { .. })));
    }
}
