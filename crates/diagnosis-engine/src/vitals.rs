//! Vital sign evaluation against fixed thresholds.
//!
//! Thresholds live in one ordered rule table. For each vital the first rule
//! whose threshold is crossed decides the status; a vital that crosses no
//! rule is "Normal". All comparisons are strict.

use std::collections::BTreeMap;

use diagnosis_types::limits::{
    DIASTOLIC_HIGH, DIASTOLIC_LOW, OXYGEN_CONFIDENCE_DELTA, OXYGEN_SATURATION_LOW, PULSE_HIGH,
    PULSE_LOW, RESPIRATORY_RATE_HIGH, RESPIRATORY_RATE_LOW, SYSTOLIC_HIGH, SYSTOLIC_LOW,
    TEMPERATURE_HIGH_C, TEMPERATURE_LOW_C, VITAL_CONFIDENCE_DELTA,
};
use diagnosis_types::{VitalKind, VitalSigns};

/// Status of an in-range vital.
pub const STATUS_NORMAL: &str = "Normal";

/// Status of blood pressure text that could not be parsed.
pub const STATUS_UNPARSABLE: &str = "Unable to parse";

/// A threshold a reading may cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Scalar reading strictly above the value.
    Above(f64),
    /// Scalar reading strictly below the value.
    Below(f64),
    /// Systolic or diastolic strictly above its value.
    PressureAbove {
        /// Systolic limit.
        systolic: f64,
        /// Diastolic limit.
        diastolic: f64,
    },
    /// Systolic or diastolic strictly below its value.
    PressureBelow {
        /// Systolic limit.
        systolic: f64,
        /// Diastolic limit.
        diastolic: f64,
    },
}

/// A single vital reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// One number.
    Scalar(f64),
    /// Systolic over diastolic.
    Pressure {
        /// Systolic value.
        systolic: f64,
        /// Diastolic value.
        diastolic: f64,
    },
}

impl Threshold {
    /// Returns true if the reading crosses this threshold.
    pub fn crossed_by(&self, reading: Reading) -> bool {
        match (*self, reading) {
            (Threshold::Above(limit), Reading::Scalar(v)) => v > limit,
            (Threshold::Below(limit), Reading::Scalar(v)) => v < limit,
            (
                Threshold::PressureAbove { systolic, diastolic },
                Reading::Pressure {
                    systolic: s,
                    diastolic: d,
                },
            ) => s > systolic || d > diastolic,
            (
                Threshold::PressureBelow { systolic, diastolic },
                Reading::Pressure {
                    systolic: s,
                    diastolic: d,
                },
            ) => s < systolic || d < diastolic,
            _ => false,
        }
    }
}

/// One row of the vital threshold table.
#[derive(Debug, Clone, Copy)]
pub struct VitalRule {
    /// Vital this rule applies to.
    pub kind: VitalKind,
    /// Threshold that triggers the rule.
    pub threshold: Threshold,
    /// Status label, e.g. "High (Fever)".
    pub status: &'static str,
    /// Abnormal vital label, e.g. "High temperature".
    pub abnormal: &'static str,
    /// Clinical finding line.
    pub finding: &'static str,
    /// Recommendation added to the result.
    pub recommendation: &'static str,
    /// Confidence delta.
    pub delta: f64,
}

/// Vital threshold rules in evaluation order.
pub const VITAL_RULES: &[VitalRule] = &[
    VitalRule {
        kind: VitalKind::Temperature,
        threshold: Threshold::Below(TEMPERATURE_LOW_C),
        status: "Low (Hypothermia risk)",
        abnormal: "Low temperature",
        finding: "Low temperature - may indicate hypothermia or shock",
        recommendation: "Seek medical attention for hypothermia",
        delta: VITAL_CONFIDENCE_DELTA,
    },
    VitalRule {
        kind: VitalKind::Temperature,
        threshold: Threshold::Above(TEMPERATURE_HIGH_C),
        status: "High (Fever)",
        abnormal: "High temperature",
        finding: "Fever detected - may indicate infection",
        recommendation: "Monitor fever and consider antipyretics",
        delta: VITAL_CONFIDENCE_DELTA,
    },
    VitalRule {
        kind: VitalKind::BloodPressure,
        threshold: Threshold::PressureAbove {
            systolic: SYSTOLIC_HIGH,
            diastolic: DIASTOLIC_HIGH,
        },
        status: "High (Hypertension)",
        abnormal: "High blood pressure",
        finding: "Hypertension detected - cardiovascular risk factor",
        recommendation: "Monitor blood pressure and consider lifestyle changes",
        delta: VITAL_CONFIDENCE_DELTA,
    },
    VitalRule {
        kind: VitalKind::BloodPressure,
        threshold: Threshold::PressureBelow {
            systolic: SYSTOLIC_LOW,
            diastolic: DIASTOLIC_LOW,
        },
        status: "Low (Hypotension)",
        abnormal: "Low blood pressure",
        finding: "Hypotension detected - may indicate shock or dehydration",
        recommendation: "Increase fluid intake and monitor symptoms",
        delta: VITAL_CONFIDENCE_DELTA,
    },
    VitalRule {
        kind: VitalKind::Pulse,
        threshold: Threshold::Above(PULSE_HIGH),
        status: "High (Tachycardia)",
        abnormal: "High pulse rate",
        finding: "Tachycardia detected - may indicate stress, fever, or cardiac issue",
        recommendation: "Monitor heart rate and consider stress reduction",
        delta: VITAL_CONFIDENCE_DELTA,
    },
    VitalRule {
        kind: VitalKind::Pulse,
        threshold: Threshold::Below(PULSE_LOW),
        status: "Low (Bradycardia)",
        abnormal: "Low pulse rate",
        finding: "Bradycardia detected - may indicate cardiac conduction issue",
        recommendation: "Monitor heart rate and consider medical evaluation",
        delta: VITAL_CONFIDENCE_DELTA,
    },
    VitalRule {
        kind: VitalKind::OxygenSaturation,
        threshold: Threshold::Below(OXYGEN_SATURATION_LOW),
        status: "Low (Low saturation)",
        abnormal: "Low oxygen saturation",
        finding: "Low oxygen saturation - may indicate respiratory or cardiac issue",
        recommendation: "Seek prompt medical evaluation for low oxygen saturation",
        delta: OXYGEN_CONFIDENCE_DELTA,
    },
    VitalRule {
        kind: VitalKind::RespiratoryRate,
        threshold: Threshold::Above(RESPIRATORY_RATE_HIGH),
        status: "High (Tachypnea)",
        abnormal: "High respiratory rate",
        finding: "Tachypnea detected - may indicate respiratory distress",
        recommendation: "Monitor breathing and seek care if distress worsens",
        delta: VITAL_CONFIDENCE_DELTA,
    },
    VitalRule {
        kind: VitalKind::RespiratoryRate,
        threshold: Threshold::Below(RESPIRATORY_RATE_LOW),
        status: "Low (Bradypnea)",
        abnormal: "Low respiratory rate",
        finding: "Bradypnea detected - may indicate respiratory depression",
        recommendation: "Seek medical evaluation for slow breathing",
        delta: VITAL_CONFIDENCE_DELTA,
    },
];

/// Returns the first rule for `kind` crossed by `reading`.
pub fn find_rule(kind: VitalKind, reading: Reading) -> Option<&'static VitalRule> {
    VITAL_RULES
        .iter()
        .find(|rule| rule.kind == kind && rule.threshold.crossed_by(reading))
}

/// Outcome of evaluating a set of vital signs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalsAssessment {
    /// Status label per evaluated vital.
    pub vital_status: BTreeMap<VitalKind, String>,
    /// Labels of out-of-range vitals.
    pub abnormal: Vec<String>,
    /// Finding lines for out-of-range vitals.
    pub findings: Vec<String>,
    /// Recommendations for out-of-range vitals.
    pub recommendations: Vec<String>,
    /// Sum of the deltas of out-of-range vitals.
    pub confidence_delta: f64,
}

/// Evaluates every present vital in [`VitalKind::ALL`] order.
///
/// Absent readings are skipped. Blood pressure text that does not parse
/// gets the "Unable to parse" status and contributes nothing else.
///
/// # Example
///
/// ```
/// use diagnosis_engine::evaluate_vitals;
/// use diagnosis_types::{VitalKind, VitalSigns};
///
/// let assessment = evaluate_vitals(&VitalSigns {
///     temperature: Some(38.0),
///     pulse_rate: Some(72),
///     ..Default::default()
/// });
///
/// assert_eq!(assessment.vital_status[&VitalKind::Temperature], "High (Fever)");
/// assert_eq!(assessment.vital_status[&VitalKind::Pulse], "Normal");
/// assert_eq!(assessment.abnormal, vec!["High temperature"]);
/// ```
pub fn evaluate_vitals(vitals: &VitalSigns) -> VitalsAssessment {
    let mut assessment = VitalsAssessment::default();

    for kind in VitalKind::ALL {
        let reading = match reading_for(vitals, kind) {
            None => continue,
            Some(Ok(reading)) => reading,
            Some(Err(text)) => {
                tracing::debug!(vital = %kind, value = %text, "unparsable vital reading");
                assessment
                    .vital_status
                    .insert(kind, STATUS_UNPARSABLE.to_string());
                continue;
            }
        };

        match find_rule(kind, reading) {
            Some(rule) => {
                assessment.vital_status.insert(kind, rule.status.to_string());
                assessment.abnormal.push(rule.abnormal.to_string());
                assessment.findings.push(rule.finding.to_string());
                assessment
                    .recommendations
                    .push(rule.recommendation.to_string());
                assessment.confidence_delta += rule.delta;
            }
            None => {
                assessment
                    .vital_status
                    .insert(kind, STATUS_NORMAL.to_string());
            }
        }
    }

    assessment
}

/// Extracts one reading; `Err` carries unparsable text.
fn reading_for(vitals: &VitalSigns, kind: VitalKind) -> Option<Result<Reading, String>> {
    let scalar = |v: Option<u32>| -> Option<Result<Reading, String>> {
        v.map(|v| Ok(Reading::Scalar(f64::from(v))))
    };

    match kind {
        VitalKind::Temperature => vitals.temperature.map(|t| Ok(Reading::Scalar(t))),
        VitalKind::BloodPressure => vitals.blood_pressure_reading().map(|parsed| {
            parsed
                .map(|(s, d)| Reading::Pressure {
                    systolic: f64::from(s),
                    diastolic: f64::from(d),
                })
                .map_err(|e| e.to_string())
        }),
        VitalKind::Pulse => scalar(vitals.pulse_rate),
        VitalKind::OxygenSaturation => scalar(vitals.oxygen_saturation),
        VitalKind::RespiratoryRate => scalar(vitals.respiratory_rate),
    }
}
