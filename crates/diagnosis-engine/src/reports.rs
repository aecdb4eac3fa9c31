//! Uploaded report analysis.
//!
//! Report analysis is an injected capability. The engine calls a
//! [`ReportAnalyzer`] for each uploaded report and turns the outcome into
//! finding lines and a confidence delta. Two analyzers ship here:
//! [`NoopAnalyzer`] always returns the placeholder analysis, and
//! [`HeuristicAnalyzer`] scans lab report text for keywords.

use diagnosis_types::limits::PLACEHOLDER_CONFIDENCE;
use diagnosis_types::{ReportKind, UploadedReport};
use thiserror::Error;

/// Confidence reported by a heuristic analysis.
pub const HEURISTIC_CONFIDENCE: f64 = 0.5;

/// Text shown for an ECG value that could not be read.
const UNDETERMINED: &str = "Unable to determine";

/// Lab terms reported as "<Term> mentioned".
const LAB_CONDITION_TERMS: &[(&str, &str)] = &[
    ("diabetes", "Diabetes mentioned"),
    ("hypertension", "Hypertension mentioned"),
    ("anemia", "Anemia mentioned"),
    ("infection", "Infection mentioned"),
    ("inflammation", "Inflammation mentioned"),
];

/// Errors an analyzer may return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The analysis backend could not be reached.
    #[error("Analyzer unavailable: {0}")]
    Unavailable(String),
}

/// Result of analyzing one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportAnalysis {
    /// Kind of the analyzed report.
    pub kind: ReportKind,
    /// Key findings.
    pub findings: Vec<String>,
    /// Abnormal values or patterns.
    pub abnormalities: Vec<String>,
    /// Follow-up recommendations.
    pub recommendations: Vec<String>,
    /// Analyzer confidence in `[0, 1]`.
    pub confidence: f64,
    /// ECG heart rate, if read.
    pub heart_rate: Option<String>,
    /// ECG rhythm, if read.
    pub rhythm: Option<String>,
}

impl ReportAnalysis {
    /// Creates an empty analysis with the given confidence.
    pub fn new(kind: ReportKind, confidence: f64) -> Self {
        Self {
            kind,
            findings: Vec::new(),
            abnormalities: Vec::new(),
            recommendations: Vec::new(),
            confidence,
            heart_rate: None,
            rhythm: None,
        }
    }

    /// Returns the analysis used when a report could not be processed.
    ///
    /// # Example
    ///
    /// ```
    /// use diagnosis_engine::ReportAnalysis;
    /// use diagnosis_types::ReportKind;
    ///
    /// let placeholder = ReportAnalysis::placeholder(ReportKind::Xray);
    /// assert_eq!(placeholder.confidence, 0.3);
    /// assert_eq!(placeholder.recommendations, vec!["Manual review required"]);
    /// ```
    pub fn placeholder(kind: ReportKind) -> Self {
        let mut analysis = Self::new(kind, PLACEHOLDER_CONFIDENCE);
        analysis.recommendations = vec!["Manual review required".to_string()];

        match kind {
            ReportKind::Ecg => {
                analysis.heart_rate = Some(UNDETERMINED.to_string());
                analysis.rhythm = Some(UNDETERMINED.to_string());
                analysis.findings = vec!["ECG image could not be processed".to_string()];
                analysis.abnormalities = vec!["Image analysis failed".to_string()];
            }
            ReportKind::Xray => {
                analysis.findings = vec!["X-ray image could not be processed".to_string()];
                analysis.abnormalities = vec!["Image analysis failed".to_string()];
            }
            ReportKind::Lab => {
                analysis.findings = vec!["Report could not be processed".to_string()];
                analysis.abnormalities = vec!["Analysis failed".to_string()];
            }
        }

        analysis
    }

    /// Renders the finding lines added to a diagnosis result.
    pub fn finding_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        match self.kind {
            ReportKind::Ecg => {
                lines.push(format!(
                    "ECG Analysis: Heart Rate - {}, Rhythm - {}",
                    self.heart_rate.as_deref().unwrap_or("Unknown"),
                    self.rhythm.as_deref().unwrap_or("Unknown")
                ));
                if !self.findings.is_empty() {
                    lines.push(format!("ECG Findings: {}", self.findings.join(", ")));
                }
                if !self.abnormalities.is_empty() {
                    lines.push(format!(
                        "ECG Abnormalities: {}",
                        self.abnormalities.join(", ")
                    ));
                }
            }
            ReportKind::Xray => {
                lines.push(format!("X-ray Analysis: {}", self.findings.join(", ")));
                if !self.abnormalities.is_empty() {
                    lines.push(format!(
                        "X-ray Abnormalities: {}",
                        self.abnormalities.join(", ")
                    ));
                }
            }
            ReportKind::Lab => {
                if !self.findings.is_empty() {
                    lines.push(format!("Lab Report Findings: {}", self.findings.join(", ")));
                }
                if !self.abnormalities.is_empty() {
                    lines.push(format!(
                        "Lab Abnormalities: {}",
                        self.abnormalities.join(", ")
                    ));
                }
            }
        }

        lines
    }
}

/// Returns the finding line recorded when analysis of `kind` fails.
pub fn failure_line(kind: ReportKind) -> String {
    format!("{} analysis failed", kind.label())
}

/// A report analysis capability.
pub trait ReportAnalyzer: Send + Sync {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Analyzes one report.
    fn analyze(&self, report: &UploadedReport) -> Result<ReportAnalysis, AnalysisError>;
}

/// Analyzer that performs no analysis and returns the placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalyzer;

impl ReportAnalyzer for NoopAnalyzer {
    fn name(&self) -> &'static str {
        "none"
    }

    fn analyze(&self, report: &UploadedReport) -> Result<ReportAnalysis, AnalysisError> {
        Ok(ReportAnalysis::placeholder(report.kind))
    }
}

/// Analyzer using keyword heuristics on report text and provider findings.
///
/// - Lab report text is scanned for raised or lowered
///   values, condition mentions and follow-up wording. Substring matching is
///   deliberate and loose: "follow up" also counts as a lowered value
///   because it contains "low". A lab report without text gets the
///   placeholder.
/// - ECG and X-ray reports use provider findings when present; an ECG
///   finding of the form "Heart rate: 72 bpm" or "Rhythm: sinus" fills the
///   matching field. Without findings the placeholder is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl ReportAnalyzer for HeuristicAnalyzer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn analyze(&self, report: &UploadedReport) -> Result<ReportAnalysis, AnalysisError> {
        match report.kind {
            ReportKind::Lab => {
                let text = match report.content.as_deref() {
                    Some(text) if !text.trim().is_empty() => text,
                    _ => return Ok(ReportAnalysis::placeholder(ReportKind::Lab)),
                };
                let mut analysis = analyze_lab_text(text);
                let mut findings = report.findings.clone();
                findings.append(&mut analysis.findings);
                analysis.findings = findings;
                Ok(analysis)
            }
            ReportKind::Ecg | ReportKind::Xray if report.findings.is_empty() => {
                Ok(ReportAnalysis::placeholder(report.kind))
            }
            ReportKind::Ecg => Ok(analyze_ecg_findings(&report.findings)),
            ReportKind::Xray => {
                let mut analysis = ReportAnalysis::new(ReportKind::Xray, HEURISTIC_CONFIDENCE);
                analysis.findings = report.findings.clone();
                Ok(analysis)
            }
        }
    }
}

/// Scans lab report text for keyword patterns.
pub fn analyze_lab_text(text: &str) -> ReportAnalysis {
    let text = text.to_lowercase();
    let has_any = |terms: &[&str]| terms.iter().any(|t| text.contains(t));
    let mut analysis = ReportAnalysis::new(ReportKind::Lab, HEURISTIC_CONFIDENCE);

    if has_any(&["high", "elevated"]) {
        analysis
            .abnormalities
            .push("Elevated values detected".to_string());
    }
    if has_any(&["low", "decreased"]) {
        analysis
            .abnormalities
            .push("Decreased values detected".to_string());
    }

    for (term, finding) in LAB_CONDITION_TERMS {
        if text.contains(term) {
            analysis.findings.push(finding.to_string());
        }
    }

    if has_any(&["follow up", "monitor"]) {
        analysis
            .recommendations
            .push("Follow-up recommended".to_string());
    }
    if has_any(&["consult", "refer"]) {
        analysis
            .recommendations
            .push("Specialist consultation recommended".to_string());
    }

    analysis
}

fn analyze_ecg_findings(findings: &[String]) -> ReportAnalysis {
    let mut analysis = ReportAnalysis::new(ReportKind::Ecg, HEURISTIC_CONFIDENCE);

    for finding in findings {
        if let Some(value) = labeled_value(finding, "heart rate") {
            analysis.heart_rate = Some(value);
        } else if let Some(value) = labeled_value(finding, "rhythm") {
            analysis.rhythm = Some(value);
        } else {
            analysis.findings.push(finding.clone());
        }
    }

    analysis
}

/// Returns the value of a "Label: value" or "Label - value" finding.
///
/// `label` is ASCII and matched case-insensitively.
fn labeled_value(finding: &str, label: &str) -> Option<String> {
    let prefix = finding.get(..label.len())?;
    if !prefix.eq_ignore_ascii_case(label) {
        return None;
    }
    let value = finding
        .get(label.len()..)?
        .trim_start()
        .trim_start_matches(&[':', '-'][..])
        .trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Merged view of several report analyses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSummary {
    /// Mean analyzer confidence, 0 when there are no analyses.
    pub overall_confidence: f64,
    /// Findings prefixed with the report type.
    pub key_findings: Vec<String>,
    /// Abnormalities prefixed with the report type.
    pub abnormalities: Vec<String>,
    /// Recommendations of every analysis, in order.
    pub recommendations: Vec<String>,
}

/// Merges analyses into one summary.
pub fn summarize_reports(analyses: &[ReportAnalysis]) -> ReportSummary {
    let mut summary = ReportSummary::default();
    if analyses.is_empty() {
        return summary;
    }

    for analysis in analyses {
        let prefix = summary_prefix(analysis.kind);
        summary.key_findings.extend(
            analysis
                .findings
                .iter()
                .map(|f| format!("{}: {}", prefix, f)),
        );
        summary.abnormalities.extend(
            analysis
                .abnormalities
                .iter()
                .map(|a| format!("{}: {}", prefix, a)),
        );
        summary
            .recommendations
            .extend(analysis.recommendations.iter().cloned());
    }

    let total: f64 = analyses.iter().map(|a| a.confidence).sum();
    summary.overall_confidence = total / analyses.len() as f64;
    summary
}

fn summary_prefix(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Ecg => "ECG",
        ReportKind::Xray => "X-ray",
        ReportKind::Lab => "Report",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_heuristics() {
        let analysis = analyze_lab_text(
            "Fasting glucose ELEVATED. Findings consistent with diabetes and mild anemia. Refer to endocrinology.",
        );
        assert_eq!(analysis.abnormalities, vec!["Elevated values detected"]);
        assert_eq!(
            analysis.findings,
            vec!["Diabetes mentioned", "Anemia mentioned"]
        );
        assert_eq!(
            analysis.recommendations,
            vec!["Specialist consultation recommended"]
        );
        assert_eq!(analysis.confidence, HEURISTIC_CONFIDENCE);
    }

    #[test]
    fn test_follow_up_counts_as_low() {
        let analysis = analyze_lab_text("Please follow up in two weeks");
        assert_eq!(analysis.abnormalities, vec!["Decreased values detected"]);
        assert_eq!(analysis.recommendations, vec!["Follow-up recommended"]);
    }

    #[test]
    fn test_lab_without_text_is_placeholder() {
        for report in [UploadedReport::new(ReportKind::Lab), UploadedReport::lab("   ")] {
            let analysis = HeuristicAnalyzer.analyze(&report).unwrap();
            assert_eq!(analysis, ReportAnalysis::placeholder(ReportKind::Lab));
            assert_eq!(analysis.recommendations, vec!["Manual review required"]);
        }
    }

    #[test]
    fn test_lab_provider_findings_come_first() {
        let report = UploadedReport::lab("infection markers").with_findings(["CRP 45 mg/L"]);
        let analysis = HeuristicAnalyzer.analyze(&report).unwrap();
        assert_eq!(analysis.findings, vec!["CRP 45 mg/L", "Infection mentioned"]);
    }

    #[test]
    fn test_image_without_findings_is_placeholder() {
        let report = UploadedReport::new(ReportKind::Xray);
        let analysis = HeuristicAnalyzer.analyze(&report).unwrap();
        assert_eq!(analysis, ReportAnalysis::placeholder(ReportKind::Xray));
    }

    #[test]
    fn test_ecg_labels_with_non_ascii_values() {
        let report = UploadedReport::new(ReportKind::Ecg).with_findings([
            "Heart rate: İİİİİİİİİİİİ",
            "RHYTHM: İrregular sinus",
            "İnverted T waves",
        ]);
        let analysis = HeuristicAnalyzer.analyze(&report).unwrap();
        assert_eq!(analysis.heart_rate.as_deref(), Some("İİİİİİİİİİİİ"));
        assert_eq!(analysis.rhythm.as_deref(), Some("İrregular sinus"));
        assert_eq!(analysis.findings, vec!["İnverted T waves"]);
    }

    #[test]
    fn test_ecg_fields_from_findings() {
        let report = UploadedReport::new(ReportKind::Ecg).with_findings([
            "Heart rate: 88 bpm",
            "Rhythm - Sinus",
            "ST elevation in V2",
        ]);
        let analysis = HeuristicAnalyzer.analyze(&report).unwrap();
        assert_eq!(analysis.heart_rate.as_deref(), Some("88 bpm"));
        assert_eq!(analysis.rhythm.as_deref(), Some("Sinus"));
        assert_eq!(
            analysis.finding_lines(),
            vec![
                "ECG Analysis: Heart Rate - 88 bpm, Rhythm - Sinus",
                "ECG Findings: ST elevation in V2"
            ]
        );
    }

    #[test]
    fn test_placeholder_lines() {
        let lines = ReportAnalysis::placeholder(ReportKind::Ecg).finding_lines();
        assert_eq!(
            lines[0],
            "ECG Analysis: Heart Rate - Unable to determine, Rhythm - Unable to determine"
        );
        assert_eq!(lines[2], "ECG Abnormalities: Image analysis failed");

        let lab = ReportAnalysis::placeholder(ReportKind::Lab).finding_lines();
        assert_eq!(
            lab,
            vec![
                "Lab Report Findings: Report could not be processed",
                "Lab Abnormalities: Analysis failed"
            ]
        );
    }

    #[test]
    fn test_noop_always_placeholder() {
        let report = UploadedReport::lab("glucose high");
        let analysis = NoopAnalyzer.analyze(&report).unwrap();
        assert_eq!(analysis.confidence, PLACEHOLDER_CONFIDENCE);
        assert_eq!(NoopAnalyzer.name(), "none");
    }

    #[test]
    fn test_failure_lines() {
        assert_eq!(failure_line(ReportKind::Ecg), "ECG analysis failed");
        assert_eq!(failure_line(ReportKind::Xray), "X-ray analysis failed");
        assert_eq!(failure_line(ReportKind::Lab), "Lab report analysis failed");
    }

    #[test]
    fn test_summarize_reports() {
        let summary = summarize_reports(&[
            ReportAnalysis::placeholder(ReportKind::Ecg),
            analyze_lab_text("hemoglobin decreased, anemia"),
        ]);

        assert!((summary.overall_confidence - 0.4).abs() < 1e-9);
        assert_eq!(
            summary.key_findings,
            vec![
                "ECG: ECG image could not be processed",
                "Report: Anemia mentioned"
            ]
        );
        assert_eq!(
            summary.abnormalities,
            vec![
                "ECG: Image analysis failed",
                "Report: Decreased values detected"
            ]
        );
        assert_eq!(summary.recommendations, vec!["Manual review required"]);
        assert_eq!(summarize_reports(&[]), ReportSummary::default());
    }
}
