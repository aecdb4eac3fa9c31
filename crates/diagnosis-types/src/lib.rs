//! # diagnosis-types
//!
//! Type definitions for rule-based diagnosis suggestions.
//!
//! This crate provides the plain data types exchanged with the diagnosis
//! engine: symptom requests, vital sign readings, uploaded reports,
//! medication suggestions and diagnosis results, together with the fixed
//! thresholds and priors the engine applies.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use diagnosis_types::{DiagnosisRequest, ReportKind, UploadedReport, VitalSigns};
//! use diagnosis_types::limits;
//!
//! let request = DiagnosisRequest::new("persistent cough and fever")
//!     .with_vitals(VitalSigns {
//!         temperature: Some(38.1),
//!         blood_pressure: Some("128/84".to_string()),
//!         ..Default::default()
//!     })
//!     .with_report(UploadedReport::new(ReportKind::Xray));
//!
//! assert!(request.validate().is_ok());
//! assert!(38.1 > limits::TEMPERATURE_HIGH_C);
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! diagnosis-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod diagnosis;
mod enums;
pub mod limits;
mod medication;
mod report;
mod vitals;

// Re-export all public types at crate root
pub use diagnosis::{DiagnosisRequest, DiagnosisResult, HealthAdvice};
pub use enums::{Gender, ReportKind, Severity, VitalKind};
pub use medication::MedicationEntry;
pub use report::UploadedReport;
pub use vitals::{
    fahrenheit_to_celsius, parse_blood_pressure, BloodPressureParseError, VitalSigns, VitalsError,
};
