//! Medication suggestion type.
//!
//! This module provides the `MedicationEntry` struct, one row of the
//! condition → medication table.

/// A medication suggestion from the knowledge base.
///
/// All four fields are free text; no dosage or unit parsing is performed.
///
/// # Examples
///
/// ```
/// use diagnosis_types::MedicationEntry;
///
/// let entry = MedicationEntry::new("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed");
/// assert_eq!(entry.name, "Acetaminophen");
/// assert!(entry.is_named("acetaminophen"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MedicationEntry {
    /// Medication name; the deduplication key.
    pub name: String,
    /// Dosage text, e.g. "500mg".
    pub dosage: String,
    /// Frequency text, e.g. "Twice daily".
    pub frequency: String,
    /// Duration text, e.g. "5-7 days".
    pub duration: String,
}

impl MedicationEntry {
    /// Creates a new entry from its four text fields.
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            duration: duration.into(),
        }
    }

    /// Returns true if this entry's name equals `name`, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medication_entry_fields() {
        let entry = MedicationEntry::new("Metformin", "500-1000mg", "Twice daily", "Long-term");
        assert_eq!(entry.dosage, "500-1000mg");
        assert_eq!(entry.frequency, "Twice daily");
        assert_eq!(entry.duration, "Long-term");
        assert!(entry.is_named("METFORMIN"));
        assert!(!entry.is_named("Metoprolol"));
    }
}
