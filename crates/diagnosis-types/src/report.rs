//! Uploaded report type.

use crate::ReportKind;

/// A report attached to a diagnosis request.
///
/// `content` holds extracted text (typically a lab report). `findings` holds
/// opaque finding strings produced by an external analysis provider; they are
/// passed through without interpretation.
///
/// # Examples
///
/// ```
/// use diagnosis_types::{ReportKind, UploadedReport};
///
/// let report = UploadedReport::lab("Glucose elevated, follow up in 2 weeks");
/// assert_eq!(report.kind, ReportKind::Lab);
/// assert!(report.has_content());
/// assert!(report.findings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UploadedReport {
    /// Kind of report.
    pub kind: ReportKind,
    /// Extracted report text, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Option<String>,
    /// Findings supplied by an external provider.
    #[cfg_attr(feature = "serde", serde(default))]
    pub findings: Vec<String>,
}

impl UploadedReport {
    /// Creates a report of the given kind with no content and no findings.
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            content: None,
            findings: Vec::new(),
        }
    }

    /// Creates a lab report from its extracted text.
    pub fn lab(content: impl Into<String>) -> Self {
        Self {
            kind: ReportKind::Lab,
            content: Some(content.into()),
            findings: Vec::new(),
        }
    }

    /// Attaches provider findings to this report.
    pub fn with_findings<I, S>(mut self, findings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.findings = findings.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the report carries non-blank text.
    pub fn has_content(&self) -> bool {
        self.content
            .as_deref()
            .map(|c| !c.trim().is_empty())
            .unwrap_or(false)
    }
}
