use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use supplier_compliance::api;
use supplier_compliance::db;
use supplier_compliance::domain::{
    ComplianceStatus, DomainError, InsightGenerator, NewComplianceRecord, NewSupplier,
};
use supplier_compliance::infrastructure::AppState;
use tower::util::ServiceExt; // for `oneshot`

const CANNED_INSIGHTS: &str = r#"{"status": "analyzed", "risk_level": "low"}"#;

/// Stub insight generator that records every prompt it receives
#[derive(Default)]
struct RecordingGenerator {
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingGenerator {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl InsightGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(DomainError::External("quota exceeded".to_string()));
        }
        Ok(CANNED_INSIGHTS.to_string())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

async fn setup(generator: Arc<RecordingGenerator>) -> (AppState, Router) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let state = AppState::new(db, generator);
    let app = api::api_router(state.clone());
    (state, app)
}

// Helper to create a test supplier
async fn create_test_supplier(state: &AppState, name: &str, country: &str) -> i32 {
    state
        .supplier_repo
        .create(NewSupplier {
            name: name.to_string(),
            country: country.to_string(),
            contract_terms: None,
            compliance_score: None,
            last_audit: None,
        })
        .await
        .expect("Failed to create supplier")
        .id
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn check_request(body: &Value) -> Request<Body> {
    Request::builder()
        .uri("/suppliers/check-compliance")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_check_compliance_unknown_supplier() {
    let generator = Arc::new(RecordingGenerator::default());
    let (state, app) = setup(generator.clone()).await;

    let response = app
        .oneshot(check_request(&json!({
            "supplier_id": 42,
            "metric": "labor_safety",
            "result": 91.5,
            "date_recorded": "2024-05-01"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["error"], "Supplier not found");

    let records = state.compliance_repo.find_by_supplier(42).await.unwrap();
    assert!(records.is_empty());
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn test_check_compliance_success_marks_record_analyzed() {
    let generator = Arc::new(RecordingGenerator::default());
    let (state, app) = setup(generator.clone()).await;
    let supplier_id = create_test_supplier(&state, "Acme", "US").await;

    let response = app
        .oneshot(check_request(&json!({
            "supplier_id": supplier_id,
            "metric": "labor_safety",
            "result": 91.5,
            "date_recorded": "2024-05-01"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Compliance data analyzed");
    assert_eq!(json["insights"], CANNED_INSIGHTS);

    let records = state
        .compliance_repo
        .find_by_supplier(supplier_id)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.metric, "labor_safety");
    assert_eq!(record.result, 91.5);
    assert_eq!(record.date_recorded, date(2024, 5, 1));
    assert_eq!(record.status, ComplianceStatus::Analyzed);
    assert_eq!(record.insights.as_deref(), Some(CANNED_INSIGHTS));

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Metric: labor_safety"));
    assert!(prompts[0].contains("Result: 91.5"));
}

#[tokio::test]
async fn test_check_compliance_generator_failure_leaves_record_pending() {
    let generator = Arc::new(RecordingGenerator::failing());
    let (state, app) = setup(generator.clone()).await;
    let supplier_id = create_test_supplier(&state, "Acme", "US").await;

    let response = app
        .oneshot(check_request(&json!({
            "supplier_id": supplier_id,
            "metric": "emissions",
            "result": 12.0,
            "date_recorded": "2024-06-30"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = read_json(response).await["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.contains("quota exceeded"));

    let records = state
        .compliance_repo
        .find_by_supplier(supplier_id)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, ComplianceStatus::PendingAnalysis);
    assert!(records[0].insights.is_none());
}

#[tokio::test]
async fn test_check_compliance_invalid_payload() {
    let generator = Arc::new(RecordingGenerator::default());
    let (state, app) = setup(generator.clone()).await;
    let supplier_id = create_test_supplier(&state, "Acme", "US").await;

    let response = app
        .oneshot(check_request(&json!({
            "supplier_id": supplier_id,
            "metric": "emissions",
            "result": "high",
            "date_recorded": "2024-06-30"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(state
        .compliance_repo
        .find_by_supplier(supplier_id)
        .await
        .unwrap()
        .is_empty());
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn test_insights_unknown_supplier() {
    let generator = Arc::new(RecordingGenerator::default());
    let (_state, app) = setup(generator.clone()).await;

    let response = app
        .oneshot(get_request("/suppliers/insights/7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn test_insights_without_records_skips_generator() {
    let generator = Arc::new(RecordingGenerator::default());
    let (state, app) = setup(generator.clone()).await;
    let supplier_id = create_test_supplier(&state, "Initech", "CA").await;

    let response = app
        .oneshot(get_request(&format!("/suppliers/insights/{}", supplier_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["supplier_id"], supplier_id);
    assert_eq!(json["supplier_name"], "Initech");
    assert_eq!(
        json["insights"],
        "No compliance records found for this supplier."
    );
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn test_insights_summarize_every_record() {
    let generator = Arc::new(RecordingGenerator::default());
    let (state, app) = setup(generator.clone()).await;
    let supplier_id = create_test_supplier(&state, "Globex", "DE").await;
    let other_id = create_test_supplier(&state, "Other", "IT").await;

    let measurements = [
        ("labor_safety", 80.0, date(2024, 1, 15)),
        ("emissions", 42.75, date(2024, 2, 15)),
        ("waste_handling", 99.0, date(2024, 3, 15)),
    ];
    for (metric, result, date_recorded) in measurements {
        state
            .compliance_repo
            .create_pending(NewComplianceRecord {
                supplier_id,
                metric: metric.to_string(),
                result,
                date_recorded,
            })
            .await
            .unwrap();
    }
    state
        .compliance_repo
        .create_pending(NewComplianceRecord {
            supplier_id: other_id,
            metric: "not_for_globex".to_string(),
            result: 1.0,
            date_recorded: date(2024, 4, 1),
        })
        .await
        .unwrap();

    let response = app
        .oneshot(get_request(&format!("/suppliers/insights/{}", supplier_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["supplier_id"], supplier_id);
    assert_eq!(json["supplier_name"], "Globex");
    assert_eq!(json["insights"], CANNED_INSIGHTS);

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];
    assert!(prompt.contains("Supplier: Globex"));
    assert!(prompt.contains("Country: DE"));
    assert!(prompt.contains(
        "Metric: labor_safety, Result: 80.0, Date: 2024-01-15\n\
         Metric: emissions, Result: 42.75, Date: 2024-02-15\n\
         Metric: waste_handling, Result: 99.0, Date: 2024-03-15"
    ));
    assert!(!prompt.contains("not_for_globex"));
}

#[tokio::test]
async fn test_insights_generator_failure_is_server_error() {
    let generator = Arc::new(RecordingGenerator::failing());
    let (state, app) = setup(generator.clone()).await;
    let supplier_id = create_test_supplier(&state, "Acme", "US").await;
    state
        .compliance_repo
        .create_pending(NewComplianceRecord {
            supplier_id,
            metric: "labor_safety".to_string(),
            result: 50.0,
            date_recorded: date(2024, 1, 1),
        })
        .await
        .unwrap();

    let response = app
        .oneshot(get_request(&format!("/suppliers/insights/{}", supplier_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
