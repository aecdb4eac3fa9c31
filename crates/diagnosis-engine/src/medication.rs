//! Medication resolution for candidate conditions.

use std::collections::HashSet;

use diagnosis_types::limits::MAX_MEDICATIONS;
use diagnosis_types::MedicationEntry;

use crate::store::KnowledgeBase;

/// Resolves medication suggestions for a list of conditions.
///
/// A table condition applies when either name contains the other, ignoring
/// case. "Pain" therefore applies to "Chest pain", and "Viral infection"
/// applies to "Infection". For each input condition the table is walked in
/// order. Entries are deduplicated by exact name, first wins, and the list
/// is capped at [`MAX_MEDICATIONS`].
///
/// Names are compared as given, without trimming, so an empty name is
/// contained in every table condition.
///
/// # Example
///
/// ```
/// use diagnosis_engine::{resolve_medications, KnowledgeBase};
///
/// let kb = KnowledgeBase::builtin();
/// let meds = resolve_medications(&kb, &["Flu".to_string()]);
/// assert_eq!(meds[0].name, "Acetaminophen");
/// assert!(resolve_medications(&kb, &[]).is_empty());
/// ```
pub fn resolve_medications(kb: &KnowledgeBase, conditions: &[String]) -> Vec<MedicationEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut resolved = Vec::new();

    for condition in conditions {
        let condition = condition.to_lowercase();

        for (key, medications) in kb.medication_entries() {
            let key = key.to_lowercase();
            if !key.contains(&condition) && !condition.contains(&key) {
                continue;
            }
            for medication in medications {
                if seen.insert(medication.name.as_str()) {
                    resolved.push(medication.clone());
                    if resolved.len() == MAX_MEDICATIONS {
                        return resolved;
                    }
                }
            }
        }
    }

    resolved
}

/// Appends `extra` to `base`, skipping names already present, up to
/// [`MAX_MEDICATIONS`] entries.
pub fn merge_medications(base: &mut Vec<MedicationEntry>, extra: Vec<MedicationEntry>) {
    base.truncate(MAX_MEDICATIONS);
    for medication in extra {
        if base.len() == MAX_MEDICATIONS {
            break;
        }
        if !base.iter().any(|m| m.name == medication.name) {
            base.push(medication);
        }
    }
}
