//! Plain-text rendering of results.

use diagnosis_types::{DiagnosisResult, MedicationEntry};

/// Renders medications as a bulleted prescription block.
///
/// # Example
///
/// ```
/// use diagnosis_engine::format_medications;
/// use diagnosis_types::MedicationEntry;
///
/// let text = format_medications(&[MedicationEntry::new("Aspirin", "81mg", "Once daily", "Long-term")]);
/// assert_eq!(text, "• Aspirin - 81mg\n  Frequency: Once daily\n  Duration: Long-term");
/// ```
pub fn format_medications(medications: &[MedicationEntry]) -> String {
    let mut text = String::new();
    for m in medications {
        text.push_str(&format!(
            "• {} - {}\n  Frequency: {}\n  Duration: {}\n\n",
            m.name, m.dosage, m.frequency, m.duration
        ));
    }
    text.trim().to_string()
}

/// Renders the vital and report findings of a result.
///
/// Vital finding lines are listed under a "Vital Signs Analysis:" header.
/// When every evaluated vital was normal, the per-vital status is listed
/// instead. Report lines follow.
pub fn format_analysis(result: &DiagnosisResult) -> String {
    let mut lines = Vec::new();

    if !result.findings.is_empty() {
        lines.push("Vital Signs Analysis:".to_string());
        lines.extend(result.findings.iter().map(|f| format!("• {}", f)));
    } else if !result.vital_status.is_empty() {
        lines.push("Vital Signs Analysis:".to_string());
        lines.extend(
            result
                .vital_status
                .iter()
                .map(|(kind, status)| format!("• {}: {}", kind.display_name(), status)),
        );
    }

    lines.extend(result.report_findings.iter().cloned());
    lines.join("\n")
}
