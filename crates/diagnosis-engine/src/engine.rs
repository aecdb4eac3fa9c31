//! Diagnosis aggregation.
//!
//! [`DiagnosisEngine`] runs the matcher, severity classifier, vitals
//! evaluator, category rules, medication resolver and report analyzer over
//! one request and assembles a [`DiagnosisResult`]. The engine never fails:
//! unmatched input yields the fallback result and analyzer errors degrade to
//! a finding line.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use diagnosis_types::limits::{MAX_CONFIDENCE, PRIMARY_PRIOR, QUICK_PRIOR};
use diagnosis_types::{limits, DiagnosisRequest, DiagnosisResult, UploadedReport, VitalSigns};

use crate::matcher::match_conditions;
use crate::medication::{merge_medications, resolve_medications};
use crate::reports::{failure_line, HeuristicAnalyzer, ReportAnalyzer};
use crate::rules::{
    first_matching_rule, to_entries, FALLBACK_MEDICATIONS, FALLBACK_TESTS, FALLBACK_TREATMENT,
};
use crate::severity::classify_severity;
use crate::store::KnowledgeBase;
use crate::vitals::evaluate_vitals;

/// Rule-based diagnosis engine.
///
/// Cheap to clone; clones share the knowledge base and analyzer.
///
/// # Example
///
/// ```
/// use diagnosis_engine::DiagnosisEngine;
/// use diagnosis_types::{DiagnosisRequest, Severity, VitalSigns};
///
/// let engine = DiagnosisEngine::builtin();
/// let request = DiagnosisRequest::new("fever and cough").with_vitals(VitalSigns {
///     temperature: Some(38.5),
///     ..Default::default()
/// });
///
/// let result = engine.diagnose(&request);
/// assert_eq!(result.diagnosis, "Upper respiratory infection (Common Cold/Flu)");
/// assert_eq!(result.severity, Severity::Moderate);
/// assert!((result.confidence - 0.90).abs() < 1e-9);
/// ```
#[derive(Clone)]
pub struct DiagnosisEngine {
    kb: Arc<KnowledgeBase>,
    analyzer: Arc<dyn ReportAnalyzer>,
}

impl std::fmt::Debug for DiagnosisEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosisEngine")
            .field("kb", &self.kb)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl DiagnosisEngine {
    /// Creates an engine over a shared knowledge base with the heuristic
    /// report analyzer.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self {
            kb,
            analyzer: Arc::new(HeuristicAnalyzer),
        }
    }

    /// Creates an engine over the builtin knowledge tables.
    pub fn builtin() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()))
    }

    /// Replaces the report analyzer.
    pub fn with_analyzer<A: ReportAnalyzer + 'static>(mut self, analyzer: A) -> Self {
        self.analyzer = Arc::new(analyzer);
        self
    }

    /// Returns the knowledge base.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Returns the name of the report analyzer in use.
    pub fn analyzer_name(&self) -> &'static str {
        self.analyzer.name()
    }

    /// Runs the primary diagnosis path.
    ///
    /// Starts from the first matching category rule, or from the joined
    /// candidate conditions at [`PRIMARY_PRIOR`], or from the fallback. Vital
    /// and report deltas are added and the total is clamped to `[0, 1]`.
    pub fn diagnose(&self, request: &DiagnosisRequest) -> DiagnosisResult {
        let conditions = match_conditions(&self.kb, &request.symptoms);
        let severity = classify_severity(&request.symptoms);
        let resolved = resolve_medications(&self.kb, &conditions);

        let mut result = DiagnosisResult::fallback();
        result.severity = severity.severity;
        result.recommendations.push(severity.recommendation.to_string());

        match first_matching_rule(&request.symptoms) {
            Some(rule) => {
                result.diagnosis = rule.diagnosis.to_string();
                result.confidence = rule.confidence;
                result.recommended_tests = to_strings(rule.tests);
                result.treatment_plan = to_strings(rule.treatment);
                result.medications = rule.medication_entries();
                merge_medications(&mut result.medications, resolved);
            }
            None => {
                if !conditions.is_empty() {
                    result.diagnosis = conditions.join(", ");
                }
                result.confidence = PRIMARY_PRIOR;
                result.recommended_tests = to_strings(FALLBACK_TESTS);
                result.treatment_plan = to_strings(FALLBACK_TREATMENT);
                result.medications = if resolved.is_empty() {
                    to_entries(FALLBACK_MEDICATIONS)
                } else {
                    resolved
                };
                result.medications.truncate(limits::MAX_MEDICATIONS);
            }
        }
        result.possible_conditions = conditions;

        let mut confidence = result.confidence;
        if let Some(vitals) = &request.vitals {
            confidence += self.apply_vitals(&mut result, vitals);
        }
        for report in &request.reports {
            confidence += self.apply_report(&mut result, report);
        }
        result.confidence = clamp_confidence(confidence);

        tracing::debug!(
            diagnosis = %result.diagnosis,
            severity = %result.severity,
            confidence = result.confidence,
            conditions = result.possible_conditions.len(),
            "diagnosis complete"
        );

        result
    }

    /// Runs the quick path: knowledge base lookups and vitals only.
    ///
    /// No category rules, tests, treatment plan or report analysis. The
    /// confidence starts at [`QUICK_PRIOR`].
    pub fn quick_diagnose(&self, symptoms: &str, vitals: Option<&VitalSigns>) -> DiagnosisResult {
        let conditions = match_conditions(&self.kb, symptoms);
        let severity = classify_severity(symptoms);

        let mut result = DiagnosisResult::fallback();
        if !conditions.is_empty() {
            result.diagnosis = conditions.join(", ");
        }
        result.severity = severity.severity;
        result.recommendations.push(severity.recommendation.to_string());
        result.medications = resolve_medications(&self.kb, &conditions);
        result.possible_conditions = conditions;

        let mut confidence = QUICK_PRIOR;
        if let Some(vitals) = vitals {
            confidence += self.apply_vitals(&mut result, vitals);
        }
        result.confidence = clamp_confidence(confidence);

        tracing::debug!(
            diagnosis = %result.diagnosis,
            confidence = result.confidence,
            "quick diagnosis complete"
        );

        result
    }

    /// Diagnoses independent requests; output order equals input order.
    #[cfg(feature = "parallel")]
    pub fn diagnose_batch(&self, requests: &[DiagnosisRequest]) -> Vec<DiagnosisResult> {
        requests.par_iter().map(|r| self.diagnose(r)).collect()
    }

    /// Diagnoses independent requests; output order equals input order.
    #[cfg(not(feature = "parallel"))]
    pub fn diagnose_batch(&self, requests: &[DiagnosisRequest]) -> Vec<DiagnosisResult> {
        requests.iter().map(|r| self.diagnose(r)).collect()
    }

    /// Adds vital findings to `result` and returns the confidence delta.
    fn apply_vitals(&self, result: &mut DiagnosisResult, vitals: &VitalSigns) -> f64 {
        let assessment = evaluate_vitals(vitals);
        result.vital_status = assessment.vital_status;
        result.abnormal_vitals = assessment.abnormal;
        result.findings = assessment.findings;
        result.recommendations.extend(assessment.recommendations);
        assessment.confidence_delta
    }

    /// Adds report finding lines to `result` and returns the confidence delta.
    fn apply_report(&self, result: &mut DiagnosisResult, report: &UploadedReport) -> f64 {
        match self.analyzer.analyze(report) {
            Ok(analysis) => {
                result.report_findings.extend(analysis.finding_lines());
                report.kind.confidence_delta()
            }
            Err(e) => {
                tracing::warn!(
                    analyzer = self.analyzer.name(),
                    kind = report.kind.label(),
                    error = %e,
                    "report analysis failed"
                );
                result.report_findings.push(failure_line(report.kind));
                0.0
            }
        }
    }
}

fn clamp_confidence(confidence: f64) -> f64 {
    confidence.clamp(0.0, MAX_CONFIDENCE)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{AnalysisError, NoopAnalyzer, ReportAnalysis};
    use diagnosis_types::{ReportKind, Severity, VitalKind};
    use proptest::prelude::*;

    struct FailingAnalyzer;

    impl ReportAnalyzer for FailingAnalyzer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn analyze(&self, _report: &UploadedReport) -> Result<ReportAnalysis, AnalysisError> {
            Err(AnalysisError::Unavailable("connection refused".to_string()))
        }
    }

    fn all_abnormal_vitals() -> VitalSigns {
        VitalSigns {
            temperature: Some(39.5),
            systolic_bp: Some(170),
            diastolic_bp: Some(105),
            blood_pressure: None,
            pulse_rate: Some(130),
            respiratory_rate: Some(30),
            oxygen_saturation: Some(85),
        }
    }

    #[test]
    fn test_empty_input_is_fallback() {
        let engine = DiagnosisEngine::builtin();
        let result = engine.diagnose(&DiagnosisRequest::new(""));

        assert_eq!(result.diagnosis, "General consultation required");
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.severity, Severity::Mild);
        assert_eq!(result.recommendations, vec!["Monitor symptoms and rest"]);
        assert_eq!(
            result.recommended_tests,
            vec![
                "Complete blood count",
                "Basic metabolic panel",
                "Physical examination"
            ]
        );
        assert_eq!(result.medication_names(), vec!["Multivitamin", "Vitamin D"]);
        assert!(result.possible_conditions.is_empty());
    }

    #[test]
    fn test_cardiovascular_rule() {
        let engine = DiagnosisEngine::builtin();
        let result = engine.diagnose(&DiagnosisRequest::new("chest pain on exertion"));

        assert_eq!(
            result.diagnosis,
            "Possible cardiovascular issue (Angina/Coronary Artery Disease)"
        );
        assert_eq!(result.confidence, 0.75);
        assert_eq!(result.severity, Severity::Severe);
        assert_eq!(result.recommendations[0], "Seek immediate medical attention");
        // Rule medications come first
        assert_eq!(
            &result.medication_names()[..4],
            &["Nitroglycerin", "Aspirin", "Metoprolol", "Atorvastatin"]
        );
        assert!(result.medications.len() <= limits::MAX_MEDICATIONS);
        assert_eq!(result.possible_conditions[0], "Angina");
    }

    #[test]
    fn test_matched_conditions_without_rule() {
        let engine = DiagnosisEngine::builtin();
        let result = engine.diagnose(&DiagnosisRequest::new("ringing ears, tinnitus"));

        assert_eq!(result.confidence, PRIMARY_PRIOR);
        assert!(result.diagnosis.starts_with("Age-related hearing loss, Noise exposure"));
        assert_eq!(result.severity, Severity::Mild);
        // Anxiety maps to medications in the table
        assert!(result.medication_names().contains(&"Sertraline"));
    }

    #[test]
    fn test_vitals_add_confidence_and_findings() {
        let engine = DiagnosisEngine::builtin();
        let request = DiagnosisRequest::new("headache").with_vitals(VitalSigns {
            systolic_bp: Some(150),
            diastolic_bp: Some(95),
            pulse_rate: Some(80),
            ..Default::default()
        });
        let result = engine.diagnose(&request);

        assert!((result.confidence - 0.75).abs() < 1e-9);
        assert_eq!(
            result.vital_status.get(&VitalKind::BloodPressure).map(String::as_str),
            Some("High (Hypertension)")
        );
        assert_eq!(result.vital_status.get(&VitalKind::Pulse).map(String::as_str), Some("Normal"));
        assert_eq!(
            result.findings,
            vec!["Hypertension detected - cardiovascular risk factor"]
        );
        assert_eq!(
            result.recommendations,
            vec![
                "Monitor symptoms and rest",
                "Monitor blood pressure and consider lifestyle changes"
            ]
        );
    }

    #[test]
    fn test_confidence_clamped_under_maximal_accumulation() {
        let engine = DiagnosisEngine::builtin();
        let request = DiagnosisRequest::new("fever, cough, chest pain")
            .with_vitals(all_abnormal_vitals())
            .with_report(UploadedReport::new(ReportKind::Ecg))
            .with_report(UploadedReport::new(ReportKind::Xray))
            .with_report(UploadedReport::lab("glucose high"));

        let result = engine.diagnose(&request);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_report_deltas_and_lines() {
        let engine = DiagnosisEngine::builtin().with_analyzer(NoopAnalyzer);
        let request = DiagnosisRequest::new("").with_report(UploadedReport::new(ReportKind::Ecg));

        let result = engine.diagnose(&request);
        assert!((result.confidence - 0.60).abs() < 1e-9);
        assert_eq!(
            result.report_findings[0],
            "ECG Analysis: Heart Rate - Unable to determine, Rhythm - Unable to determine"
        );
    }

    #[test]
    fn test_analyzer_failure_degrades_to_finding() {
        let engine = DiagnosisEngine::builtin().with_analyzer(FailingAnalyzer);
        let request = DiagnosisRequest::new("")
            .with_report(UploadedReport::new(ReportKind::Xray))
            .with_report(UploadedReport::lab("normal"));

        let result = engine.diagnose(&request);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(
            result.report_findings,
            vec!["X-ray analysis failed", "Lab report analysis failed"]
        );
    }

    #[test]
    fn test_unreadable_lab_report_gets_placeholder() {
        let engine = DiagnosisEngine::builtin();
        let request = DiagnosisRequest::new("").with_report(UploadedReport::new(ReportKind::Lab));

        let result = engine.diagnose(&request);
        assert_eq!(
            result.report_findings,
            vec![
                "Lab Report Findings: Report could not be processed",
                "Lab Abnormalities: Analysis failed"
            ]
        );
        assert!((result.confidence - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_quick_diagnose() {
        let engine = DiagnosisEngine::builtin();
        let vitals = VitalSigns {
            temperature: Some(38.0),
            ..Default::default()
        };
        let result = engine.quick_diagnose("runny nose", Some(&vitals));

        assert_eq!(
            result.diagnosis,
            "Common cold, Allergies, Sinusitis, Viral infection, Hay fever, Rhinitis"
        );
        assert!((result.confidence - 0.65).abs() < 1e-9);
        assert!(result.recommended_tests.is_empty());
        assert!(result.treatment_plan.is_empty());
        assert_eq!(result.medications[0].name, "Acetaminophen");
    }

    #[test]
    fn test_quick_diagnose_no_match() {
        let engine = DiagnosisEngine::builtin();
        let result = engine.quick_diagnose("", None);
        assert_eq!(result.diagnosis, "General consultation required");
        assert_eq!(result.confidence, QUICK_PRIOR);
        assert!(result.medications.is_empty());
    }

    #[test]
    fn test_diagnose_is_idempotent() {
        let engine = DiagnosisEngine::builtin();
        let request = DiagnosisRequest::new("nausea and dizziness")
            .with_vitals(all_abnormal_vitals())
            .with_report(UploadedReport::lab("hemoglobin low, anemia"));

        assert_eq!(engine.diagnose(&request), engine.diagnose(&request));
    }

    #[test]
    fn test_batch_preserves_order() {
        let engine = DiagnosisEngine::builtin();
        let requests = vec![
            DiagnosisRequest::new("chest pain"),
            DiagnosisRequest::new(""),
            DiagnosisRequest::new("joint pain"),
        ];

        let results = engine.diagnose_batch(&requests);
        assert_eq!(results.len(), 3);
        for (request, result) in requests.iter().zip(&results) {
            assert_eq!(&engine.diagnose(request), result);
        }
        assert_eq!(results[1].diagnosis, "General consultation required");
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiagnosisEngine>();
    }

    proptest! {
        #[test]
        fn prop_bounded_outputs(
            symptoms in "[a-z ,]{0,80}",
            temperature in proptest::option::of(30.0f64..43.0),
            pulse in proptest::option::of(20u32..220),
            saturation in proptest::option::of(50u32..=100),
        ) {
            let engine = DiagnosisEngine::builtin();
            let request = DiagnosisRequest::new(symptoms).with_vitals(VitalSigns {
                temperature,
                pulse_rate: pulse,
                oxygen_saturation: saturation,
                ..Default::default()
            });
            let result = engine.diagnose(&request);

            prop_assert!(result.possible_conditions.len() <= limits::MAX_POSSIBLE_CONDITIONS);
            prop_assert!(result.medications.len() <= limits::MAX_MEDICATIONS);
            prop_assert!((0.0..=1.0).contains(&result.confidence));

            let mut names = result.medication_names();
            let count = names.len();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), count);
        }

        #[test]
        fn prop_keyword_text_matches_first_condition(index in 0usize..66) {
            let engine = DiagnosisEngine::builtin();
            let (keyword, conditions) = engine.knowledge_base().symptom_entries().nth(index).unwrap();
            let result = engine.quick_diagnose(&keyword.to_uppercase(), None);
            prop_assert!(result.possible_conditions.contains(&conditions[0]));
        }
    }
}
