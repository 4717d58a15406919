// HTTP route handlers for the fxminer API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use chrono::Utc;
use fxminer_common::types::{CurrencyPair, JobParameters, TimeFrame};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::kaggle::KaggleClient;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TestQuery {
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
}

fn default_action() -> String {
    "test".to_string()
}

/// GET / - Dashboard page
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../templates/dashboard.html"))
}

/// GET /status - Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /api/kaggle/test - Dispatch a test action against the Kaggle API
pub async fn kaggle_test(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TestQuery>,
) -> Response {
    // A fresh client per request; no cross-request pooling.
    let client = KaggleClient::new(
        state.config.credentials.clone(),
        state.config.kaggle_base_url.clone(),
    );

    match query.action.as_str() {
        "test" => {
            info!("Testing Kaggle API connection...");
            let connected = client.test_connection().await;
            let message = if connected {
                "Kaggle API connection successful!"
            } else {
                "Kaggle API connection failed"
            };

            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "data": {
                        "connected": connected,
                        "username": state.config.credentials.username,
                        "message": message,
                        "timestamp": Utc::now(),
                    }
                })),
            )
                .into_response()
        }
        "submit" => {
            info!("Testing job submission...");
            let params = demo_parameters();

            match client.submit_job(&params).await {
                Ok(job) => {
                    info!(
                        job_id = %job.job_id,
                        notebook_bytes = job.notebook.len(),
                        "Test job submitted"
                    );
                    (
                        StatusCode::OK,
                        Json(json!({
                            "success": true,
                            "data": {
                                "jobId": job.job_id,
                                "message": "Test job submitted successfully!",
                                "parameters": params,
                            }
                        })),
                    )
                        .into_response()
                }
                Err(e) => {
                    error!(error = %e, "Job submission failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "success": false, "error": e.to_string() })),
                    )
                        .into_response()
                }
            }
        }
        "status" => {
            let job_id = query.job_id.as_deref().unwrap_or("test-job-id");

            match client.job_status(job_id).await {
                Ok(status) => {
                    info!(job_id = %job_id, state = %status.status, progress = status.progress, "Job status fetched");
                    (
                        StatusCode::OK,
                        Json(json!({ "success": true, "data": status })),
                    )
                        .into_response()
                }
                Err(e) => {
                    error!(job_id = %job_id, error = %e, "Failed to fetch job status");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "success": false, "error": e.to_string() })),
                    )
                        .into_response()
                }
            }
        }
        other => {
            error!(action = %other, "Unknown dashboard action");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": "Invalid action. Use: test, submit, or status"
                })),
            )
                .into_response()
        }
    }
}

/// Fixed demo parameter set used by the submit test action.
pub(crate) fn demo_parameters() -> JobParameters {
    JobParameters {
        currency_pair: CurrencyPair {
            base: "EUR".to_string(),
            quote: "USD".to_string(),
            symbol: "EURUSD".to_string(),
        },
        time_frame: TimeFrame {
            value: "1h".to_string(),
            label: "1 Hour".to_string(),
            minutes: 60,
        },
        window_size: 20,
        min_support: 0.05,
        min_confidence: 0.7,
        data_points: 5000,
    }
}
