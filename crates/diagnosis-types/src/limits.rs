//! Fixed limits, priors and thresholds used by the diagnosis engine.
//!
//! These values are part of the observable behavior of the engine and are
//! not configurable at runtime.
//!
//! # Examples
//!
//! ```
//! use diagnosis_types::limits;
//!
//! assert_eq!(limits::MAX_POSSIBLE_CONDITIONS, 10);
//! assert_eq!(limits::MAX_MEDICATIONS, 8);
//! assert!(limits::TEMPERATURE_HIGH_C > limits::TEMPERATURE_LOW_C);
//! ```

// =============================================================================
// Result Bounds
// =============================================================================

/// Maximum number of candidate conditions in a diagnosis result.
pub const MAX_POSSIBLE_CONDITIONS: usize = 10;

/// Maximum number of medication suggestions in a diagnosis result.
pub const MAX_MEDICATIONS: usize = 8;

// =============================================================================
// Confidence
// =============================================================================

/// Starting confidence for the primary diagnosis path.
///
/// Also the confidence of the fallback result.
pub const PRIMARY_PRIOR: f64 = 0.5;

/// Starting confidence for the quick (knowledge-base only) diagnosis path.
pub const QUICK_PRIOR: f64 = 0.6;

/// Confidence added for each out-of-range vital sign.
pub const VITAL_CONFIDENCE_DELTA: f64 = 0.05;

/// Confidence added for low oxygen saturation.
pub const OXYGEN_CONFIDENCE_DELTA: f64 = 0.10;

/// Confidence added for an analyzed ECG report.
pub const ECG_CONFIDENCE_DELTA: f64 = 0.10;

/// Confidence added for an analyzed X-ray report.
pub const XRAY_CONFIDENCE_DELTA: f64 = 0.05;

/// Confidence added for an analyzed lab report.
pub const LAB_CONFIDENCE_DELTA: f64 = 0.05;

/// Confidence reported by a placeholder report analysis.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.3;

/// Upper bound of every confidence value.
pub const MAX_CONFIDENCE: f64 = 1.0;

// =============================================================================
// Fallback
// =============================================================================

/// Diagnosis text used when nothing matched.
pub const FALLBACK_DIAGNOSIS: &str = "General consultation required";

// =============================================================================
// Severity Scoring
// =============================================================================

/// Score contributed by each severe keyword present in the symptom text.
pub const SEVERE_KEYWORD_WEIGHT: u32 = 3;

/// Score contributed by each moderate keyword present in the symptom text.
pub const MODERATE_KEYWORD_WEIGHT: u32 = 1;

/// Minimum score classified as severe.
pub const SEVERE_SCORE: u32 = 3;

/// Minimum score classified as moderate.
pub const MODERATE_SCORE: u32 = 1;

// =============================================================================
// Vital Sign Thresholds (all comparisons are strict)
// =============================================================================

/// Temperature above this value (°C) is a fever.
pub const TEMPERATURE_HIGH_C: f64 = 37.5;

/// Temperature below this value (°C) is a hypothermia risk.
pub const TEMPERATURE_LOW_C: f64 = 35.0;

/// Systolic pressure above this value (mmHg) is hypertensive.
pub const SYSTOLIC_HIGH: f64 = 140.0;

/// Diastolic pressure above this value (mmHg) is hypertensive.
pub const DIASTOLIC_HIGH: f64 = 90.0;

/// Systolic pressure below this value (mmHg) is hypotensive.
pub const SYSTOLIC_LOW: f64 = 90.0;

/// Diastolic pressure below this value (mmHg) is hypotensive.
pub const DIASTOLIC_LOW: f64 = 60.0;

/// Pulse above this value (bpm) is tachycardia.
pub const PULSE_HIGH: f64 = 100.0;

/// Pulse below this value (bpm) is bradycardia.
pub const PULSE_LOW: f64 = 60.0;

/// Oxygen saturation below this value (%) is low.
pub const OXYGEN_SATURATION_LOW: f64 = 95.0;

/// Respiratory rate above this value (breaths/min) is tachypnea.
pub const RESPIRATORY_RATE_HIGH: f64 = 20.0;

/// Respiratory rate below this value (breaths/min) is bradypnea.
pub const RESPIRATORY_RATE_LOW: f64 = 12.0;
