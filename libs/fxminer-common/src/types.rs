use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The currency pair a mining job analyzes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
    pub symbol: String,
}

/// Candle interval for the analysis window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeFrame {
    pub value: String,
    pub label: String,
    pub minutes: u32,
}

/// Immutable input to a pattern mining job submission.
///
/// Field names follow the dashboard's JSON contract (camelCase), since these
/// are echoed back verbatim in submit responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobParameters {
    pub currency_pair: CurrencyPair,
    pub time_frame: TimeFrame,
    pub window_size: u32,
    pub min_support: f64,
    pub min_confidence: f64,
    pub data_points: u32,
}

/// Lifecycle states a remote job can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Submitted,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobState::Submitted => "submitted",
            JobState::Running => "running",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
            JobState::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Point-in-time status report for a job.
///
/// Fabricated per call in the current simulation; there is no durable store
/// behind it. `progress` stays within 0..=100 and 100 always pairs with
/// `JobState::Completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub id: String,
    pub status: JobState,
    pub progress: u8,
    pub message: String,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
}

/// Uniform response body for every dashboard API action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_status() -> JobStatus {
        JobStatus {
            id: "demo-user/forex-pattern-mining-1700000000000".to_string(),
            status: JobState::Running,
            progress: 64,
            message: "Pattern mining analysis in progress...".to_string(),
            start_time: Utc::now(),
            end_time: None,
            execution_time: Some(142.5),
        }
    }

    #[test]
    fn job_status_uses_camel_case_wire_names() {
        let value = serde_json::to_value(sample_status()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("startTime"));
        assert!(obj.contains_key("executionTime"));
        assert!(!obj.contains_key("start_time"));
        // endTime is unset and must be omitted, not null
        assert!(!obj.contains_key("endTime"));
        assert_eq!(obj["status"], "running");
    }

    #[test]
    fn job_state_serializes_lowercase() {
        for (state, expected) in [
            (JobState::Submitted, "\"submitted\""),
            (JobState::Running, "\"running\""),
            (JobState::Completed, "\"completed\""),
            (JobState::Failed, "\"failed\""),
            (JobState::Cancelled, "\"cancelled\""),
        ] {
            assert_eq!(serde_json::to_string(&state).unwrap(), expected);
            assert_eq!(format!("\"{}\"", state), expected);
        }
    }

    #[test]
    fn job_parameters_round_trip_keeps_contract_names() {
        let json = serde_json::json!({
            "currencyPair": { "base": "EUR", "quote": "USD", "symbol": "EURUSD" },
            "timeFrame": { "value": "1h", "label": "1 Hour", "minutes": 60 },
            "windowSize": 20,
            "minSupport": 0.05,
            "minConfidence": 0.7,
            "dataPoints": 5000
        });
        let params: JobParameters = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(params.currency_pair.symbol, "EURUSD");
        assert_eq!(params.time_frame.minutes, 60);
        assert_eq!(serde_json::to_value(&params).unwrap(), json);
    }

    #[test]
    fn envelope_parses_both_outcomes() {
        let ok: ApiEnvelope =
            serde_json::from_str(r#"{"success":true,"data":{"connected":true}}"#).unwrap();
        assert!(ok.success);
        assert!(ok.data.is_some());
        assert!(ok.error.is_none());

        let err: ApiEnvelope =
            serde_json::from_str(r#"{"success":false,"error":"Invalid action"}"#).unwrap();
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("Invalid action"));
    }
}
