//! In-memory knowledge base.
//!
//! Holds the symptom keyword table and the condition medication table.
//! Both tables keep insertion order, which is the order the matcher and
//! the medication resolver walk them in.
//!
//! ```ignore
//! let mut kb = KnowledgeBase::builtin();
//! let files = discover_kb_files("/opt/diagnosis/kb")?;
//! kb.load_all(&files, &LoadConfig::default())?;
//!
//! // Share read-only from here on
//! let kb = Arc::new(kb);
//! ```

use std::collections::HashMap;
use std::path::Path;

use diagnosis_types::MedicationEntry;

use crate::parser::{KbRecord, TsvParser};
use crate::rows::{ConditionMedicationRow, SymptomConditionRow};
use crate::tables::{CONDITION_MEDICATIONS, SYMPTOM_CONDITIONS};
use crate::types::{KbFiles, KbResult, LoadConfig, LoadStats};

/// In-memory store for the diagnosis knowledge tables.
///
/// Keywords are stored lowercased. Condition lookups ignore case.
///
/// # Example
///
/// ```
/// use diagnosis_engine::KnowledgeBase;
///
/// let kb = KnowledgeBase::builtin();
/// let conditions = kb.get_conditions("Fever").unwrap();
/// assert_eq!(conditions[0], "Common cold");
/// assert!(kb.get_medications("flu").is_some());
/// ```
#[derive(Default)]
pub struct KnowledgeBase {
    /// Keyword to conditions, in table order.
    symptom_conditions: Vec<(String, Vec<String>)>,
    /// Keyword to position in `symptom_conditions`.
    keyword_index: HashMap<String, usize>,
    /// Condition to medications, in table order.
    condition_medications: Vec<(String, Vec<MedicationEntry>)>,
    /// Lowercased condition to position in `condition_medications`.
    condition_index: HashMap<String, usize>,
}

impl std::fmt::Debug for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeBase")
            .field("keywords", &self.symptom_conditions.len())
            .field("conditions", &self.condition_medications.len())
            .finish()
    }
}

/// Counts describing a knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeStats {
    /// Number of symptom keywords.
    pub keywords: usize,
    /// Number of keyword to condition mappings.
    pub symptom_mappings: usize,
    /// Number of conditions with medications.
    pub conditions: usize,
    /// Number of condition to medication mappings.
    pub medication_entries: usize,
}

impl KnowledgeBase {
    /// Creates a new empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a knowledge base holding the builtin tables.
    pub fn builtin() -> Self {
        let mut kb = Self::new();

        for (keyword, conditions) in SYMPTOM_CONDITIONS {
            kb.insert_symptom_conditions(keyword, conditions.iter().copied());
        }

        for (condition, rows) in CONDITION_MEDICATIONS {
            kb.insert_medications(
                condition,
                rows.iter().map(|(name, dosage, frequency, duration)| {
                    MedicationEntry::new(*name, *dosage, *frequency, *duration)
                }),
            );
        }

        kb
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LOADING
    // ═══════════════════════════════════════════════════════════════════════════

    /// Loads keyword to condition rows from a table file.
    ///
    /// # Errors
    /// Fails if the file cannot be opened, its header is wrong, or (in strict
    /// mode) any row is malformed.
    pub fn load_symptom_conditions<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoadConfig,
    ) -> KbResult<LoadStats> {
        load_rows::<SymptomConditionRow, _>(path.as_ref(), config, |row| {
            self.insert_symptom_conditions(&row.keyword, [row.condition])
        })
    }

    /// Loads condition to medication rows from a table file.
    ///
    /// # Errors
    /// Same conditions as [`KnowledgeBase::load_symptom_conditions`].
    pub fn load_condition_medications<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoadConfig,
    ) -> KbResult<LoadStats> {
        load_rows::<ConditionMedicationRow, _>(path.as_ref(), config, |row| {
            self.insert_medications(&row.condition, [row.medication])
        })
    }

    /// Loads every discovered table file, symptom tables first.
    ///
    /// Returns the combined statistics.
    pub fn load_all(&mut self, files: &KbFiles, config: &LoadConfig) -> KbResult<LoadStats> {
        let mut total = LoadStats::default();

        for path in &files.symptom_condition_files {
            let stats = self.load_symptom_conditions(path, config)?;
            accumulate(&mut total, &stats);
        }

        for path in &files.condition_medication_files {
            let stats = self.load_condition_medications(path, config)?;
            accumulate(&mut total, &stats);
        }

        Ok(total)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // INSERTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Appends conditions to a keyword, creating the keyword if needed.
    ///
    /// An existing keyword keeps its table position. Conditions already
    /// listed under the keyword are not repeated.
    pub fn insert_symptom_conditions<I, S>(&mut self, keyword: &str, conditions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keyword = keyword.trim().to_lowercase();
        let index = match self.keyword_index.get(&keyword) {
            Some(&index) => index,
            None => {
                let index = self.symptom_conditions.len();
                self.symptom_conditions.push((keyword.clone(), Vec::new()));
                self.keyword_index.insert(keyword, index);
                index
            }
        };

        let list = &mut self.symptom_conditions[index].1;
        for condition in conditions {
            let condition = condition.into();
            if !list.contains(&condition) {
                list.push(condition);
            }
        }
    }

    /// Appends medications to a condition, creating the condition if needed.
    pub fn insert_medications<I>(&mut self, condition: &str, medications: I)
    where
        I: IntoIterator<Item = MedicationEntry>,
    {
        let condition = condition.trim();
        let key = condition.to_lowercase();
        let index = match self.condition_index.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.condition_medications.len();
                self.condition_medications
                    .push((condition.to_string(), Vec::new()));
                self.condition_index.insert(key, index);
                index
            }
        };

        self.condition_medications[index].1.extend(medications);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LOOKUP
    // ═══════════════════════════════════════════════════════════════════════════

    /// Returns the conditions mapped to a keyword, ignoring case.
    pub fn get_conditions(&self, keyword: &str) -> Option<&[String]> {
        self.keyword_index
            .get(&keyword.trim().to_lowercase())
            .map(|&i| self.symptom_conditions[i].1.as_slice())
    }

    /// Returns the medications listed for a condition, ignoring case.
    pub fn get_medications(&self, condition: &str) -> Option<&[MedicationEntry]> {
        self.condition_index
            .get(&condition.trim().to_lowercase())
            .map(|&i| self.condition_medications[i].1.as_slice())
    }

    /// Iterates keywords and their conditions in table order.
    pub fn symptom_entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.symptom_conditions
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterates conditions and their medications in table order.
    pub fn medication_entries(&self) -> impl Iterator<Item = (&str, &[MedicationEntry])> {
        self.condition_medications
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the number of symptom keywords.
    pub fn keyword_count(&self) -> usize {
        self.symptom_conditions.len()
    }

    /// Returns the number of conditions with medications.
    pub fn condition_count(&self) -> usize {
        self.condition_medications.len()
    }

    /// Returns true if both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.symptom_conditions.is_empty() && self.condition_medications.is_empty()
    }

    /// Returns counts describing both tables.
    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            keywords: self.keyword_count(),
            symptom_mappings: self.symptom_conditions.iter().map(|(_, v)| v.len()).sum(),
            conditions: self.condition_count(),
            medication_entries: self
                .condition_medications
                .iter()
                .map(|(_, v)| v.len())
                .sum(),
        }
    }
}

/// Streams rows from a table file into `insert`.
fn load_rows<T, F>(path: &Path, config: &LoadConfig, mut insert: F) -> KbResult<LoadStats>
where
    T: KbRecord,
    F: FnMut(T),
{
    let mut parser = TsvParser::<_, T>::from_path(path)?;
    let mut stats = LoadStats::default();

    for result in parser.by_ref() {
        match result {
            Ok(row) => {
                insert(row);
                stats.inserted_records += 1;
            }
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping malformed row");
                stats.error_count += 1;
            }
        }
    }

    stats.total_records = parser.records_read();
    tracing::info!(
        path = %path.display(),
        inserted = stats.inserted_records,
        skipped = stats.error_count,
        "loaded knowledge table"
    );

    Ok(stats)
}

fn accumulate(total: &mut LoadStats, stats: &LoadStats) {
    total.total_records += stats.total_records;
    total.inserted_records += stats.inserted_records;
    total.error_count += stats.error_count;
}
