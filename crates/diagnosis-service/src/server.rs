//! HTTP server implementation.
//!
//! Endpoints:
//! - GET  /api/health           - liveness and engine summary
//! - POST /api/diagnose         - primary diagnosis
//! - POST /api/diagnose/quick   - knowledge base and vitals only
//! - POST /api/diagnose/batch   - several independent diagnoses
//! - POST /api/advice           - general health advice
//! - GET  /api/knowledge/stats  - knowledge base counts

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use diagnosis_engine::{format_analysis, format_medications, health_advice, DiagnosisEngine};
use diagnosis_types::{DiagnosisRequest, DiagnosisResult, Gender, HealthAdvice, VitalSigns};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Diagnosis HTTP server.
#[derive(Clone)]
pub struct DiagnosisServer {
    engine: Arc<DiagnosisEngine>,
}

impl DiagnosisServer {
    /// Creates a new server around the given engine.
    pub fn new(engine: DiagnosisEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &DiagnosisEngine {
        &self.engine
    }

    /// Builds the axum router with all endpoints.
    pub fn router(self) -> Router {
        Router::new()
            .route("/api/health", get(health))
            .route("/api/diagnose", post(diagnose))
            .route("/api/diagnose/quick", post(quick_diagnose))
            .route("/api/diagnose/batch", post(diagnose_batch))
            .route("/api/advice", post(advice))
            .route("/api/knowledge/stats", get(knowledge_stats))
            .with_state(self)
    }
}

// ── Request / Response types ────────────────────────────────────────

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: String,
    /// Report analyzer in use.
    pub analyzer: String,
    /// Symptom keywords loaded.
    pub keywords: usize,
}

/// Diagnosis result plus its plain-text renderings.
#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    /// Structured result.
    #[serde(flatten)]
    pub result: DiagnosisResult,
    /// Prescription block for the medications.
    pub prescription_text: String,
    /// Vital sign and report findings as text.
    pub analysis_text: String,
}

impl From<DiagnosisResult> for DiagnoseResponse {
    fn from(result: DiagnosisResult) -> Self {
        Self {
            prescription_text: format_medications(&result.medications),
            analysis_text: format_analysis(&result),
            result,
        }
    }
}

/// Quick diagnosis request.
#[derive(Debug, Deserialize)]
pub struct QuickDiagnoseRequest {
    /// Free-text symptoms.
    pub symptoms: String,
    /// Optional vital signs.
    #[serde(default)]
    pub vitals: Option<VitalSigns>,
}

/// Batch diagnosis request.
#[derive(Debug, Deserialize)]
pub struct BatchDiagnoseRequest {
    /// Independent requests.
    pub requests: Vec<DiagnosisRequest>,
}

/// Batch diagnosis response, in request order.
#[derive(Debug, Serialize)]
pub struct BatchDiagnoseResponse {
    /// One response per request.
    pub results: Vec<DiagnoseResponse>,
}

/// Health advice request.
#[derive(Debug, Default, Deserialize)]
pub struct AdviceRequest {
    /// Optional symptoms.
    #[serde(default)]
    pub symptoms: Option<String>,
    /// Optional age in years.
    #[serde(default)]
    pub age: Option<u32>,
    /// Optional gender.
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Knowledge base statistics response.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Symptom keywords.
    pub keywords: usize,
    /// Keyword to condition mappings.
    pub symptom_mappings: usize,
    /// Conditions with medications.
    pub conditions: usize,
    /// Condition to medication mappings.
    pub medication_entries: usize,
}

// ── Handlers ────────────────────────────────────────────────────────

async fn health(State(server): State<DiagnosisServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        analyzer: server.engine.analyzer_name().to_string(),
        keywords: server.engine.knowledge_base().keyword_count(),
    })
}

async fn diagnose(
    State(server): State<DiagnosisServer>,
    payload: Result<Json<DiagnosisRequest>, JsonRejection>,
) -> Result<Json<DiagnoseResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let result = server.engine.diagnose(&request);
    tracing::info!(
        diagnosis = %result.diagnosis,
        severity = %result.severity,
        confidence = result.confidence,
        "Diagnosis generated"
    );

    Ok(Json(result.into()))
}

async fn quick_diagnose(
    State(server): State<DiagnosisServer>,
    payload: Result<Json<QuickDiagnoseRequest>, JsonRejection>,
) -> Result<Json<DiagnoseResponse>, ApiError> {
    let Json(request) = payload?;
    if let Some(vitals) = &request.vitals {
        vitals.validate()?;
    }

    let result = server
        .engine
        .quick_diagnose(&request.symptoms, request.vitals.as_ref());

    Ok(Json(result.into()))
}

async fn diagnose_batch(
    State(server): State<DiagnosisServer>,
    payload: Result<Json<BatchDiagnoseRequest>, JsonRejection>,
) -> Result<Json<BatchDiagnoseResponse>, ApiError> {
    let Json(batch) = payload?;
    for request in &batch.requests {
        request.validate()?;
    }

    let engine = Arc::clone(&server.engine);
    let results = tokio::task::spawn_blocking(move || engine.diagnose_batch(&batch.requests))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!("Batch of {} diagnoses generated", results.len());

    Ok(Json(BatchDiagnoseResponse {
        results: results.into_iter().map(DiagnoseResponse::from).collect(),
    }))
}

async fn advice(
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<HealthAdvice>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(health_advice(
        request.symptoms.as_deref(),
        request.age,
        request.gender,
    )))
}

async fn knowledge_stats(State(server): State<DiagnosisServer>) -> Json<StatsResponse> {
    let stats = server.engine.knowledge_base().stats();
    Json(StatsResponse {
        keywords: stats.keywords,
        symptom_mappings: stats.symptom_mappings,
        conditions: stats.conditions,
        medication_entries: stats.medication_entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        DiagnosisServer::new(DiagnosisEngine::builtin()).router()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["analyzer"], "heuristic");
        assert_eq!(body["keywords"], 66);
    }

    #[tokio::test]
    async fn test_diagnose_respiratory_with_fever() {
        let request = serde_json::json!({
            "symptoms": "fever and cough",
            "vitals": { "temperature": 38.6, "blood_pressure": "120/80" }
        });
        let response = app().oneshot(post_json("/api/diagnose", request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["diagnosis"], "Upper respiratory infection (Common Cold/Flu)");
        assert_eq!(body["severity"], "moderate");
        assert!((body["confidence"].as_f64().unwrap() - 0.90).abs() < 1e-9);
        assert_eq!(body["vital_status"]["temperature"], "High (Fever)");
        assert_eq!(body["vital_status"]["blood_pressure"], "Normal");
        assert!(body["prescription_text"]
            .as_str()
            .unwrap()
            .starts_with("• Acetaminophen - 500-1000mg"));
        assert_eq!(
            body["analysis_text"],
            "Vital Signs Analysis:\n• Fever detected - may indicate infection"
        );
    }

    #[tokio::test]
    async fn test_diagnose_empty_symptoms_is_fallback() {
        let response = app()
            .oneshot(post_json("/api/diagnose", serde_json::json!({ "symptoms": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["diagnosis"], "General consultation required");
        assert_eq!(body["confidence"], 0.5);
        assert_eq!(body["severity"], "mild");
    }

    #[tokio::test]
    async fn test_diagnose_with_reports() {
        let request = serde_json::json!({
            "symptoms": "tired",
            "reports": [
                { "kind": "lab", "content": "Hemoglobin low, consistent with anemia. Glucose high." },
                { "kind": "ecg" }
            ]
        });
        let response = app().oneshot(post_json("/api/diagnose", request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        // 0.5 prior + 0.05 lab + 0.10 ecg
        assert!((body["confidence"].as_f64().unwrap() - 0.65).abs() < 1e-9);
        let lines = body["report_findings"].as_array().unwrap();
        assert!(lines.iter().any(|l| l == "Lab Report Findings: Anemia mentioned"));
        assert!(lines.iter().any(|l| l.as_str().unwrap().starts_with("ECG Analysis:")));
    }

    #[tokio::test]
    async fn test_invalid_vitals_rejected() {
        let request = serde_json::json!({
            "symptoms": "fever",
            "vitals": { "oxygen_saturation": 140 }
        });
        let response = app().oneshot(post_json("/api/diagnose", request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "INVALID_VITALS");
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/diagnose")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_quick_diagnose() {
        let request = serde_json::json!({
            "symptoms": "runny nose",
            "vitals": { "pulse_rate": 120 }
        });
        let response = app()
            .oneshot(post_json("/api/diagnose/quick", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!((body["confidence"].as_f64().unwrap() - 0.65).abs() < 1e-9);
        assert_eq!(body["recommended_tests"].as_array().unwrap().len(), 0);
        assert_eq!(body["possible_conditions"][0], "Common cold");
    }

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let request = serde_json::json!({
            "requests": [
                { "symptoms": "chest pain" },
                { "symptoms": "" },
                { "symptoms": "joint pain" }
            ]
        });
        let response = app()
            .oneshot(post_json("/api/diagnose/batch", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["severity"], "severe");
        assert_eq!(results[1]["diagnosis"], "General consultation required");
        assert_eq!(
            results[2]["diagnosis"],
            "Osteoarthritis or inflammatory arthritis"
        );
    }

    #[tokio::test]
    async fn test_advice() {
        let request = serde_json::json!({
            "symptoms": "headache",
            "age": 12,
            "gender": "male"
        });
        let response = app().oneshot(post_json("/api/advice", request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(
            body["general_advice"][0],
            "Ensure adequate sleep and nutrition for growth"
        );
        assert_eq!(body["prevention_tips"][1], "Consider prostate health screenings");
        assert_eq!(
            body["when_to_seek_help"][0],
            "Seek immediate help for severe, sudden headache"
        );
        assert_eq!(body["lifestyle_recommendations"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_knowledge_stats() {
        let response = app().oneshot(get_request("/api/knowledge/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["keywords"], 66);
        assert_eq!(body["conditions"], 44);
    }
}
