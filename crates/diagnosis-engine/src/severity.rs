//! Severity classification from weighted symptom keywords.

use diagnosis_types::limits::{
    MODERATE_KEYWORD_WEIGHT, MODERATE_SCORE, SEVERE_KEYWORD_WEIGHT, SEVERE_SCORE,
};
use diagnosis_types::Severity;

/// Keywords weighing [`SEVERE_KEYWORD_WEIGHT`] each.
pub const SEVERE_KEYWORDS: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "severe headache",
    "unconsciousness",
    "seizures",
    "paralysis",
    "severe bleeding",
    "sudden vision loss",
    "severe abdominal pain",
];

/// Keywords weighing [`MODERATE_KEYWORD_WEIGHT`] each.
pub const MODERATE_KEYWORDS: &[&str] = &[
    "fever",
    "cough",
    "abdominal pain",
    "dizziness",
    "vomiting",
    "diarrhea",
    "rash",
    "swelling",
    "palpitations",
];

/// Score tiers, highest first.
const TIERS: &[(u32, Severity, &str)] = &[
    (SEVERE_SCORE, Severity::Severe, "Seek immediate medical attention"),
    (
        MODERATE_SCORE,
        Severity::Moderate,
        "Consider consulting a healthcare provider",
    ),
    (0, Severity::Mild, "Monitor symptoms and rest"),
];

/// Outcome of severity classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityAssessment {
    /// Severity tier.
    pub severity: Severity,
    /// Total keyword score.
    pub score: u32,
    /// Fixed recommendation for the tier.
    pub recommendation: &'static str,
    /// Weighted keywords found in the text.
    pub matched: Vec<&'static str>,
}

/// Classifies symptom text by weighted keyword presence.
///
/// Each keyword contributes once no matter how often it occurs. Keywords
/// overlap by substring: "severe abdominal pain" also contains
/// "abdominal pain" and scores both.
///
/// # Example
///
/// ```
/// use diagnosis_engine::classify_severity;
/// use diagnosis_types::Severity;
///
/// let assessment = classify_severity("Sudden chest pain");
/// assert_eq!(assessment.severity, Severity::Severe);
/// assert_eq!(assessment.recommendation, "Seek immediate medical attention");
/// ```
pub fn classify_severity(symptoms: &str) -> SeverityAssessment {
    let text = symptoms.to_lowercase();
    let mut score = 0;
    let mut matched = Vec::new();

    for (keywords, weight) in [
        (SEVERE_KEYWORDS, SEVERE_KEYWORD_WEIGHT),
        (MODERATE_KEYWORDS, MODERATE_KEYWORD_WEIGHT),
    ] {
        for keyword in keywords {
            if text.contains(keyword) {
                score += weight;
                matched.push(*keyword);
            }
        }
    }

    let (severity, recommendation) = tier_for(score);
    SeverityAssessment {
        severity,
        score,
        recommendation,
        matched,
    }
}

/// Returns the tier and recommendation for a score.
pub fn tier_for(score: u32) -> (Severity, &'static str) {
    TIERS
        .iter()
        .find(|(min, _, _)| score >= *min)
        .map(|&(_, severity, recommendation)| (severity, recommendation))
        .unwrap_or((Severity::Mild, "Monitor symptoms and rest"))
}
