//! # diagnosis-service
//!
//! HTTP JSON service for rule-based diagnosis suggestions.
//!
//! This crate provides an axum server that exposes the diagnosis engine
//! from the diagnosis-engine crate. Configuration is read from environment
//! variables; see [`ServiceConfig::from_env`].

#![warn(missing_docs)]

pub mod config;
pub mod error;
mod server;

pub use config::{AnalyzerKind, ServiceConfig};
pub use error::ApiError;
pub use server::{
    AdviceRequest, BatchDiagnoseRequest, BatchDiagnoseResponse, DiagnoseResponse,
    DiagnosisServer, HealthResponse, QuickDiagnoseRequest, StatsResponse,
};

// Re-export the engine for convenience
pub use diagnosis_engine;
