//! Category rules for the primary diagnosis path.
//!
//! Rules are tried in order; the first rule with a keyword present in the
//! lowercased symptom text fires. A fired rule supplies the diagnosis text,
//! its own base confidence, tests, treatment plan and medications.

use diagnosis_types::MedicationEntry;

use crate::tables::MedicationRow;

/// A symptom category rule.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Category name, e.g. "cardiovascular".
    pub category: &'static str,
    /// Keywords that trigger the rule (substring match).
    pub keywords: &'static [&'static str],
    /// Diagnosis text.
    pub diagnosis: &'static str,
    /// Base confidence, replacing the primary prior.
    pub confidence: f64,
    /// Recommended tests.
    pub tests: &'static [&'static str],
    /// Treatment plan steps.
    pub treatment: &'static [&'static str],
    /// Medication suggestions.
    pub medications: &'static [MedicationRow],
}

impl CategoryRule {
    /// Returns true if any keyword occurs in the already lowercased text.
    pub fn matches(&self, text_lower: &str) -> bool {
        self.keywords.iter().any(|k| text_lower.contains(k))
    }

    /// Returns the rule's medications as owned entries.
    pub fn medication_entries(&self) -> Vec<MedicationEntry> {
        to_entries(self.medications)
    }
}

/// Category rules in evaluation order.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "cardiovascular",
        keywords: &["chest pain", "shortness of breath", "heart", "angina"],
        diagnosis: "Possible cardiovascular issue (Angina/Coronary Artery Disease)",
        confidence: 0.75,
        tests: &[
            "ECG",
            "Blood pressure monitoring",
            "Cardiac enzymes",
            "Stress test",
        ],
        treatment: &[
            "Consult cardiologist",
            "Monitor vital signs",
            "Avoid strenuous activity",
            "Low-sodium diet",
        ],
        medications: &[
            (
                "Nitroglycerin",
                "0.4mg sublingual",
                "As needed for chest pain",
                "Until symptoms resolve",
            ),
            ("Aspirin", "81mg", "Once daily", "Long-term"),
            (
                "Metoprolol",
                "25-50mg",
                "Twice daily",
                "As prescribed by cardiologist",
            ),
            ("Atorvastatin", "10-20mg", "Once daily", "Long-term"),
        ],
    },
    CategoryRule {
        category: "respiratory",
        keywords: &["fever", "cough", "cold", "sore throat", "runny nose"],
        diagnosis: "Upper respiratory infection (Common Cold/Flu)",
        confidence: 0.85,
        tests: &[
            "Chest X-ray",
            "Blood count",
            "Sputum culture",
            "COVID-19 test",
        ],
        treatment: &[
            "Rest",
            "Hydration",
            "Over-the-counter medications",
            "Steam inhalation",
        ],
        medications: &[
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "3-5 days"),
            ("Ibuprofen", "400-600mg", "Every 6-8 hours", "3-5 days"),
            (
                "Guaifenesin",
                "200-400mg",
                "Every 4 hours",
                "Until cough improves",
            ),
            ("Pseudoephedrine", "30-60mg", "Every 4-6 hours", "3-5 days"),
            ("Zinc supplements", "15-30mg", "Once daily", "5-7 days"),
        ],
    },
    CategoryRule {
        category: "neurological",
        keywords: &["headache", "migraine", "dizziness", "tension"],
        diagnosis: "Tension headache or migraine",
        confidence: 0.70,
        tests: &[
            "Neurological examination",
            "Blood pressure",
            "Eye examination",
            "CT scan if severe",
        ],
        treatment: &[
            "Pain management",
            "Stress reduction",
            "Regular sleep pattern",
            "Avoid triggers",
        ],
        medications: &[
            ("Ibuprofen", "400-800mg", "Every 6-8 hours", "As needed"),
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Sumatriptan", "25-100mg", "At onset of migraine", "As needed"),
            (
                "Propranolol",
                "20-40mg",
                "Twice daily",
                "As prescribed for prevention",
            ),
        ],
    },
    CategoryRule {
        category: "gastrointestinal",
        keywords: &[
            "stomach",
            "abdominal",
            "nausea",
            "vomiting",
            "diarrhea",
            "acid reflux",
        ],
        diagnosis: "Gastrointestinal issue (Gastritis/GERD)",
        confidence: 0.80,
        tests: &[
            "Blood tests",
            "Ultrasound",
            "Endoscopy if needed",
            "H. pylori test",
        ],
        treatment: &[
            "Diet modification",
            "Hydration",
            "Consult gastroenterologist",
            "Avoid spicy foods",
        ],
        medications: &[
            ("Omeprazole", "20mg", "Once daily", "4-8 weeks"),
            ("Ranitidine", "150mg", "Twice daily", "4-8 weeks"),
            (
                "Metoclopramide",
                "10mg",
                "Three times daily",
                "As needed for nausea",
            ),
            (
                "Loperamide",
                "2mg",
                "After each loose stool",
                "Until diarrhea resolves",
            ),
        ],
    },
    CategoryRule {
        category: "musculoskeletal",
        keywords: &["joint pain", "arthritis", "swelling", "stiffness"],
        diagnosis: "Osteoarthritis or inflammatory arthritis",
        confidence: 0.75,
        tests: &["X-rays", "Blood tests (ESR, CRP)", "Joint fluid analysis"],
        treatment: &[
            "Physical therapy",
            "Weight management",
            "Joint protection",
            "Regular exercise",
        ],
        medications: &[
            ("Ibuprofen", "400-800mg", "Three times daily", "As needed"),
            ("Naproxen", "250-500mg", "Twice daily", "As needed"),
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Glucosamine", "1500mg", "Once daily", "Long-term"),
        ],
    },
    CategoryRule {
        category: "mental health",
        keywords: &["anxiety", "depression", "stress", "insomnia", "mood"],
        diagnosis: "Anxiety or depressive disorder",
        confidence: 0.70,
        tests: &[
            "Psychological evaluation",
            "Blood tests (thyroid, B12)",
            "Depression screening",
        ],
        treatment: &[
            "Counseling",
            "Stress management",
            "Regular exercise",
            "Sleep hygiene",
        ],
        medications: &[
            (
                "Sertraline",
                "25-50mg",
                "Once daily",
                "As prescribed by psychiatrist",
            ),
            (
                "Alprazolam",
                "0.25-0.5mg",
                "As needed for anxiety",
                "Short-term only",
            ),
            (
                "Melatonin",
                "3-5mg",
                "Once daily at bedtime",
                "As needed for sleep",
            ),
            ("Lavender supplements", "80mg", "Once daily", "4-6 weeks"),
        ],
    },
    CategoryRule {
        category: "metabolic",
        keywords: &["diabetes", "high blood sugar", "frequent urination", "thirst"],
        diagnosis: "Diabetes mellitus (Type 2)",
        confidence: 0.80,
        tests: &[
            "Fasting blood glucose",
            "HbA1c",
            "Lipid profile",
            "Kidney function tests",
        ],
        treatment: &[
            "Diet modification",
            "Regular exercise",
            "Blood sugar monitoring",
            "Weight management",
        ],
        medications: &[
            ("Metformin", "500-1000mg", "Twice daily", "Long-term"),
            ("Glimepiride", "1-4mg", "Once daily", "As prescribed"),
            ("Sitagliptin", "100mg", "Once daily", "As prescribed"),
            (
                "Insulin (if needed)",
                "As prescribed",
                "As prescribed",
                "As prescribed",
            ),
        ],
    },
];

/// Tests recommended when nothing matched.
pub const FALLBACK_TESTS: &[&str] = &[
    "Complete blood count",
    "Basic metabolic panel",
    "Physical examination",
];

/// Treatment plan when nothing matched.
pub const FALLBACK_TREATMENT: &[&str] = &[
    "Follow up with primary care physician",
    "Maintain healthy lifestyle",
];

/// Medications suggested when nothing matched.
pub const FALLBACK_MEDICATIONS: &[MedicationRow] = &[
    ("Multivitamin", "As directed", "Once daily", "Long-term"),
    ("Vitamin D", "1000-2000 IU", "Once daily", "Long-term"),
];

/// Returns the first rule that matches the symptom text.
///
/// # Example
///
/// ```
/// use diagnosis_engine::first_matching_rule;
///
/// let rule = first_matching_rule("Crushing CHEST PAIN and a cough").unwrap();
/// assert_eq!(rule.category, "cardiovascular");
/// assert!(first_matching_rule("nothing relevant").is_none());
/// ```
pub fn first_matching_rule(symptoms: &str) -> Option<&'static CategoryRule> {
    let text = symptoms.to_lowercase();
    CATEGORY_RULES.iter().find(|rule| rule.matches(&text))
}

/// Converts static medication rows to owned entries.
pub(crate) fn to_entries(rows: &[MedicationRow]) -> Vec<MedicationEntry> {
    rows.iter()
        .map(|(name, dosage, frequency, duration)| {
            MedicationEntry::new(*name, *dosage, *frequency, *duration)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_wins() {
        // cardiovascular precedes respiratory
        let rule = first_matching_rule("fever with chest pain").unwrap();
        assert_eq!(rule.category, "cardiovascular");
        assert_eq!(rule.confidence, 0.75);
    }

    #[test]
    fn test_each_category_reachable() {
        let cases = [
            ("angina", "cardiovascular"),
            ("sore throat", "respiratory"),
            ("migraine", "neurological"),
            ("acid reflux", "gastrointestinal"),
            ("stiffness in knees", "musculoskeletal"),
            ("low mood", "mental health"),
            ("constant thirst", "metabolic"),
        ];
        for (text, category) in cases {
            assert_eq!(
                first_matching_rule(text).map(|r| r.category),
                Some(category),
                "text: {}",
                text
            );
        }
    }

    #[test]
    fn test_substring_triggers_preserved() {
        // "cold" inside "scolding" still fires the respiratory rule
        let rule = first_matching_rule("scolding").unwrap();
        assert_eq!(rule.category, "respiratory");
    }

    #[test]
    fn test_rule_medications_are_unique_and_bounded() {
        for rule in CATEGORY_RULES {
            let entries = rule.medication_entries();
            assert!(entries.len() <= diagnosis_types::limits::MAX_MEDICATIONS);
            for (i, entry) in entries.iter().enumerate() {
                assert!(entries[i + 1..].iter().all(|e| e.name != entry.name));
            }
        }
    }

    #[test]
    fn test_fallback_medications() {
        let entries = to_entries(FALLBACK_MEDICATIONS);
        assert_eq!(entries[0].name, "Multivitamin");
        assert_eq!(entries[1].dosage, "1000-2000 IU");
    }
}
