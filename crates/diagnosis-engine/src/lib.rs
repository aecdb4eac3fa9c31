//! # diagnosis-engine
//!
//! Rule-based diagnosis suggestions from free-text symptoms, vital signs and
//! uploaded reports.
//!
//! The engine matches symptom keywords against a knowledge base of candidate
//! conditions, classifies severity, evaluates vital signs against fixed
//! thresholds, applies category rules, resolves medication suggestions and
//! folds in report analyses. Every step is deterministic table lookup.
//!
//! ## Knowledge base
//!
//! [`KnowledgeBase::builtin`] carries the compiled-in tables. Tables can also
//! be loaded from tab-separated files:
//!
//! ```text
//! symptom_conditions*.tsv       keyword  condition
//! condition_medications*.tsv    condition  name  dosage  frequency  duration
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): Batch diagnosis runs on the rayon thread pool.
//!
//! ## Usage
//!
//! ```rust
//! use diagnosis_engine::{format_medications, DiagnosisEngine};
//! use diagnosis_types::{DiagnosisRequest, Severity};
//!
//! let engine = DiagnosisEngine::builtin();
//! let result = engine.diagnose(&DiagnosisRequest::new("joint pain and stiffness"));
//!
//! assert_eq!(result.diagnosis, "Osteoarthritis or inflammatory arthritis");
//! assert_eq!(result.severity, Severity::Mild);
//! assert!(format_medications(&result.medications).starts_with("• Ibuprofen"));
//! ```

#![warn(missing_docs)]

mod advice;
mod engine;
mod format;
mod loader;
mod matcher;
mod medication;
pub mod parser;
mod reports;
mod rows;
mod rules;
mod severity;
mod store;
mod tables;
mod types;
mod vitals;

pub use advice::health_advice;
pub use engine::DiagnosisEngine;
pub use format::{format_analysis, format_medications};
pub use loader::{discover_kb_files, CONDITION_MEDICATIONS_PREFIX, SYMPTOM_CONDITIONS_PREFIX};
pub use matcher::{match_conditions, matched_keywords};
pub use medication::{merge_medications, resolve_medications};
pub use parser::{KbRecord, TsvParser};
pub use reports::{
    analyze_lab_text, failure_line, summarize_reports, AnalysisError, HeuristicAnalyzer,
    NoopAnalyzer, ReportAnalysis, ReportAnalyzer, ReportSummary, HEURISTIC_CONFIDENCE,
};
pub use rows::{ConditionMedicationRow, SymptomConditionRow};
pub use rules::{
    first_matching_rule, CategoryRule, CATEGORY_RULES, FALLBACK_MEDICATIONS, FALLBACK_TESTS,
    FALLBACK_TREATMENT,
};
pub use severity::{
    classify_severity, tier_for, SeverityAssessment, MODERATE_KEYWORDS, SEVERE_KEYWORDS,
};
pub use store::{KnowledgeBase, KnowledgeStats};
pub use types::{KbError, KbFiles, KbResult, LoadConfig, LoadStats};
pub use vitals::{
    evaluate_vitals, find_rule, Reading, Threshold, VitalRule, VitalsAssessment, STATUS_NORMAL,
    STATUS_UNPARSABLE, VITAL_RULES,
};

// Re-export diagnosis-types for convenience
pub use diagnosis_types;
