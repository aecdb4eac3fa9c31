//! Symptom keyword matching.
//!
//! A keyword matches when it occurs anywhere in the lowercased symptom text.
//! Matching is substring based, not tokenized: "swelling" also matches
//! inside "swelling in legs", and both keywords contribute.

use std::collections::HashSet;

use diagnosis_types::limits::MAX_POSSIBLE_CONDITIONS;

use crate::store::KnowledgeBase;

/// Returns the candidate conditions for free-text symptoms.
///
/// Conditions of every matching keyword are concatenated in table order,
/// deduplicated keeping the first occurrence, and capped at
/// [`MAX_POSSIBLE_CONDITIONS`]. Returns an empty list when nothing matches.
///
/// # Example
///
/// ```
/// use diagnosis_engine::{match_conditions, KnowledgeBase};
///
/// let kb = KnowledgeBase::builtin();
/// let conditions = match_conditions(&kb, "Runny nose since Monday");
/// assert_eq!(conditions[0], "Common cold");
/// assert!(match_conditions(&kb, "").is_empty());
/// ```
pub fn match_conditions(kb: &KnowledgeBase, symptoms: &str) -> Vec<String> {
    let text = symptoms.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched = Vec::new();

    for (keyword, conditions) in kb.symptom_entries() {
        if keyword.is_empty() || !text.contains(keyword) {
            continue;
        }
        for condition in conditions {
            if matched.len() == MAX_POSSIBLE_CONDITIONS {
                return matched;
            }
            if seen.insert(condition.as_str()) {
                matched.push(condition.clone());
            }
        }
    }

    matched
}

/// Returns the keywords found in the symptom text, in table order.
pub fn matched_keywords<'a>(kb: &'a KnowledgeBase, symptoms: &str) -> Vec<&'a str> {
    let text = symptoms.to_lowercase();
    kb.symptom_entries()
        .map(|(keyword, _)| keyword)
        .filter(|keyword| !keyword.is_empty() && text.contains(keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword_returns_table_order() {
        let kb = KnowledgeBase::builtin();
        let conditions = match_conditions(&kb, "runny nose");
        assert_eq!(
            conditions,
            vec![
                "Common cold",
                "Allergies",
                "Sinusitis",
                "Viral infection",
                "Hay fever",
                "Rhinitis"
            ]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            match_conditions(&kb, "RUNNY NOSE"),
            match_conditions(&kb, "runny nose")
        );
    }

    #[test]
    fn test_capped_at_ten() {
        let kb = KnowledgeBase::builtin();
        // fever alone maps to twelve conditions
        let conditions = match_conditions(&kb, "fever");
        assert_eq!(conditions.len(), MAX_POSSIBLE_CONDITIONS);
        assert_eq!(conditions[0], "Common cold");
        assert_eq!(conditions[9], "Typhoid fever");
    }

    #[test]
    fn test_dedup_across_keywords_first_seen_wins() {
        let mut kb = KnowledgeBase::new();
        kb.insert_symptom_conditions("itching", ["Eczema", "Anxiety"]);
        kb.insert_symptom_conditions("rash", ["Anxiety", "Eczema", "Psoriasis"]);

        assert_eq!(
            match_conditions(&kb, "rash and itching"),
            vec!["Eczema", "Anxiety", "Psoriasis"]
        );
    }

    #[test]
    fn test_substring_false_positive_preserved() {
        let kb = KnowledgeBase::builtin();
        // "swelling" matches inside "swelling in legs"
        let keywords = matched_keywords(&kb, "swelling in legs");
        assert_eq!(keywords, vec!["swelling in legs", "swelling"]);
    }

    #[test]
    fn test_no_match() {
        let kb = KnowledgeBase::builtin();
        assert!(match_conditions(&kb, "feeling great").is_empty());
        assert!(matched_keywords(&kb, "").is_empty());
    }
}
