//! Knowledge table row types.
//!
//! Parses `symptom_conditions*.tsv` and `condition_medications*.tsv` rows.

use csv::StringRecord;
use diagnosis_types::MedicationEntry;

use crate::parser::{field, KbRecord};
use crate::types::KbResult;

/// Expected columns in a symptom table.
const SYMPTOM_CONDITION_COLUMNS: &[&str] = &["keyword", "condition"];

/// Expected columns in a medication table.
const CONDITION_MEDICATION_COLUMNS: &[&str] =
    &["condition", "name", "dosage", "frequency", "duration"];

/// One row of a symptom table: one keyword to condition pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomConditionRow {
    /// Symptom keyword, lowercased.
    pub keyword: String,
    /// Candidate condition name.
    pub condition: String,
}

impl KbRecord for SymptomConditionRow {
    const EXPECTED_COLUMNS: &'static [&'static str] = SYMPTOM_CONDITION_COLUMNS;

    fn from_record(record: &StringRecord, row: usize) -> KbResult<Self> {
        Ok(SymptomConditionRow {
            keyword: field::text(record, 0, "keyword", row)?.to_lowercase(),
            condition: field::text(record, 1, "condition", row)?,
        })
    }
}

/// One row of a medication table: one condition to medication pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionMedicationRow {
    /// Condition name.
    pub condition: String,
    /// Suggested medication.
    pub medication: MedicationEntry,
}

impl KbRecord for ConditionMedicationRow {
    const EXPECTED_COLUMNS: &'static [&'static str] = CONDITION_MEDICATION_COLUMNS;

    fn from_record(record: &StringRecord, row: usize) -> KbResult<Self> {
        Ok(ConditionMedicationRow {
            condition: field::text(record, 0, "condition", row)?,
            medication: MedicationEntry {
                name: field::text(record, 1, "name", row)?,
                dosage: field::text(record, 2, "dosage", row)?,
                frequency: field::text(record, 3, "frequency", row)?,
                duration: field::text(record, 4, "duration", row)?,
            },
        })
    }
}
