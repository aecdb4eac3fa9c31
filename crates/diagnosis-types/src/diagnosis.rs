//! Diagnosis request, result and health advice types.

use std::collections::BTreeMap;

use crate::{limits, MedicationEntry, Severity, UploadedReport, VitalKind, VitalSigns, VitalsError};

/// Input to one diagnosis.
///
/// # Examples
///
/// ```
/// use diagnosis_types::{DiagnosisRequest, VitalSigns};
///
/// let request = DiagnosisRequest::new("fever and cough").with_vitals(VitalSigns {
///     temperature: Some(38.4),
///     ..Default::default()
/// });
///
/// assert!(request.validate().is_ok());
/// assert!(request.reports.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosisRequest {
    /// Free-text symptom description.
    pub symptoms: String,
    /// Vital sign readings, if recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vitals: Option<VitalSigns>,
    /// Uploaded reports to analyze.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reports: Vec<UploadedReport>,
}

impl DiagnosisRequest {
    /// Creates a request with symptom text only.
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            vitals: None,
            reports: Vec::new(),
        }
    }

    /// Sets the vital sign readings.
    pub fn with_vitals(mut self, vitals: VitalSigns) -> Self {
        self.vitals = Some(vitals);
        self
    }

    /// Adds an uploaded report.
    pub fn with_report(mut self, report: UploadedReport) -> Self {
        self.reports.push(report);
        self
    }

    /// Validates the vital sign readings, if any.
    ///
    /// Symptom text is never invalid; an empty string yields the fallback
    /// diagnosis.
    pub fn validate(&self) -> Result<(), VitalsError> {
        match &self.vitals {
            Some(vitals) => vitals.validate(),
            None => Ok(()),
        }
    }
}

/// Output of one diagnosis.
///
/// Constructed fresh per request. `possible_conditions` holds at most
/// [`limits::MAX_POSSIBLE_CONDITIONS`] entries, `medications` at most
/// [`limits::MAX_MEDICATIONS`] entries with unique names, and `confidence`
/// lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosisResult {
    /// Primary diagnosis text.
    pub diagnosis: String,
    /// Candidate conditions in first-seen order.
    pub possible_conditions: Vec<String>,
    /// Severity tier.
    pub severity: Severity,
    /// Confidence score in `[0, 1]`.
    pub confidence: f64,
    /// Recommendations (severity recommendation first, then vitals).
    pub recommendations: Vec<String>,
    /// Recommended diagnostic tests.
    pub recommended_tests: Vec<String>,
    /// Treatment plan steps.
    pub treatment_plan: Vec<String>,
    /// Medication suggestions.
    pub medications: Vec<MedicationEntry>,
    /// Status label per evaluated vital.
    pub vital_status: BTreeMap<VitalKind, String>,
    /// Labels of out-of-range vitals.
    pub abnormal_vitals: Vec<String>,
    /// Finding lines for out-of-range vitals.
    pub findings: Vec<String>,
    /// Finding lines from uploaded report analyses.
    pub report_findings: Vec<String>,
}

impl DiagnosisResult {
    /// Creates the fallback result used when nothing matched.
    ///
    /// # Examples
    ///
    /// ```
    /// use diagnosis_types::{limits, DiagnosisResult, Severity};
    ///
    /// let result = DiagnosisResult::fallback();
    /// assert_eq!(result.diagnosis, limits::FALLBACK_DIAGNOSIS);
    /// assert_eq!(result.severity, Severity::Mild);
    /// assert_eq!(result.confidence, 0.5);
    /// ```
    pub fn fallback() -> Self {
        Self {
            diagnosis: limits::FALLBACK_DIAGNOSIS.to_string(),
            possible_conditions: Vec::new(),
            severity: Severity::Mild,
            confidence: limits::PRIMARY_PRIOR,
            recommendations: Vec::new(),
            recommended_tests: Vec::new(),
            treatment_plan: Vec::new(),
            medications: Vec::new(),
            vital_status: BTreeMap::new(),
            abnormal_vitals: Vec::new(),
            findings: Vec::new(),
            report_findings: Vec::new(),
        }
    }

    /// Returns true if any vital was out of range.
    pub fn has_abnormal_vitals(&self) -> bool {
        !self.abnormal_vitals.is_empty()
    }

    /// Returns the medication names in order.
    pub fn medication_names(&self) -> Vec<&str> {
        self.medications.iter().map(|m| m.name.as_str()).collect()
    }
}

/// General health advice for a patient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthAdvice {
    /// Age and symptom based advice.
    pub general_advice: Vec<String>,
    /// Fixed lifestyle recommendations.
    pub lifestyle_recommendations: Vec<String>,
    /// Age and gender based prevention tips.
    pub prevention_tips: Vec<String>,
    /// Warning signs that warrant medical attention.
    pub when_to_seek_help: Vec<String>,
}
