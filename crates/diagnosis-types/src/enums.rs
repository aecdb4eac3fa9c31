//! Enumeration types for diagnosis inputs and outputs.
//!
//! This module provides enum representations for the coded values carried by
//! requests and results: severity tiers, vital sign kinds, uploaded report
//! kinds and patient gender.

use crate::limits;

/// Severity tier derived from symptom keyword scoring.
///
/// # Examples
///
/// ```
/// use diagnosis_types::Severity;
///
/// assert_eq!(Severity::from_name("SEVERE"), Some(Severity::Severe));
/// assert!(Severity::Severe > Severity::Mild);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// No weighted keyword present.
    #[default]
    Mild,
    /// Only moderate keywords present, total score below the severe threshold.
    Moderate,
    /// Score at or above the severe threshold.
    Severe,
}

impl Severity {
    /// Returns the lowercase name of this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Parses a tier name, ignoring case.
    ///
    /// Returns `None` if the name is not a known tier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vital sign evaluated against fixed clinical thresholds.
///
/// Variants are declared in evaluation order, so ordered maps keyed by
/// `VitalKind` list readings in the order they were evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VitalKind {
    /// Body temperature (°C).
    Temperature,
    /// Systolic/diastolic blood pressure (mmHg).
    BloodPressure,
    /// Pulse rate (beats per minute).
    Pulse,
    /// Oxygen saturation (%).
    OxygenSaturation,
    /// Respiratory rate (breaths per minute).
    RespiratoryRate,
}

impl VitalKind {
    /// All vital kinds in evaluation order.
    pub const ALL: [VitalKind; 5] = [
        Self::Temperature,
        Self::BloodPressure,
        Self::Pulse,
        Self::OxygenSaturation,
        Self::RespiratoryRate,
    ];

    /// Returns the snake_case key of this vital.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::BloodPressure => "blood_pressure",
            Self::Pulse => "pulse",
            Self::OxygenSaturation => "oxygen_saturation",
            Self::RespiratoryRate => "respiratory_rate",
        }
    }

    /// Returns the human-readable name of this vital.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::BloodPressure => "Blood Pressure",
            Self::Pulse => "Pulse",
            Self::OxygenSaturation => "Oxygen Saturation",
            Self::RespiratoryRate => "Respiratory Rate",
        }
    }
}

impl std::fmt::Display for VitalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an uploaded report.
///
/// Each kind carries the confidence delta applied when its analysis succeeds.
///
/// # Examples
///
/// ```
/// use diagnosis_types::ReportKind;
///
/// assert_eq!(ReportKind::Ecg.label(), "ECG");
/// assert!(ReportKind::Ecg.confidence_delta() > ReportKind::Lab.confidence_delta());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReportKind {
    /// Electrocardiogram image.
    Ecg,
    /// X-ray image.
    Xray,
    /// Laboratory report text.
    Lab,
}

impl ReportKind {
    /// Returns the human-readable label used in finding lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ecg => "ECG",
            Self::Xray => "X-ray",
            Self::Lab => "Lab report",
        }
    }

    /// Returns the confidence delta for a successful analysis of this kind.
    pub fn confidence_delta(self) -> f64 {
        match self {
            Self::Ecg => limits::ECG_CONFIDENCE_DELTA,
            Self::Xray => limits::XRAY_CONFIDENCE_DELTA,
            Self::Lab => limits::LAB_CONFIDENCE_DELTA,
        }
    }
}

/// Patient gender as recorded on a patient form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other.
    Other,
}

impl Gender {
    /// Creates a Gender from its single-letter form code (`M`, `F`, `O`).
    ///
    /// Returns `None` if the code is not recognized.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Self::Male),
            'F' => Some(Self::Female),
            'O' => Some(Self::Other),
            _ => None,
        }
    }

    /// Returns the single-letter form code.
    pub fn to_code(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
            Self::Other => 'O',
        }
    }
}
