// Kaggle API client: connectivity probe, mock job submission, status poll.

use chrono::Utc;
use fxminer_common::config::KaggleCredentials;
use fxminer_common::types::{JobParameters, JobStatus};
use thiserror::Error;
use tracing::{error, info};

use crate::notebook;
use crate::sim;

#[derive(Debug, Error)]
pub enum KaggleError {
    // Transport failures never surface here: the probe converts them to a
    // plain `false`, which submit reports as this variant.
    #[error("Failed to connect to Kaggle API. Please check your credentials.")]
    Unauthenticated,
    #[error("notebook template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

/// A freshly minted submission.
///
/// The rendered notebook is returned alongside the id but not transmitted
/// anywhere; an eventual upload path can consume it without an interface
/// change.
#[derive(Debug, Clone)]
pub struct SubmittedJob {
    pub job_id: String,
    pub notebook: String,
}

/// Thin client over the Kaggle HTTP API.
///
/// Constructed per request with the process credentials; holds no state
/// beyond the reqwest client it was built with.
pub struct KaggleClient {
    http: reqwest::Client,
    credentials: KaggleCredentials,
    base_url: String,
}

impl KaggleClient {
    pub fn new(credentials: KaggleCredentials, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            base_url,
        }
    }

    /// Probe connectivity with a lightweight authenticated listing call.
    ///
    /// Never fails: transport errors and non-success statuses both come back
    /// as `false`, with the cause logged.
    pub async fn test_connection(&self) -> bool {
        let url = format!("{}/datasets/list?page=1&pageSize=1", self.base_url);

        match self
            .http
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.api_key))
            .send()
            .await
        {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    error!(status = %response.status(), "Kaggle connection test failed");
                }
                ok
            }
            Err(e) => {
                error!(error = %e, "Kaggle connection test failed");
                false
            }
        }
    }

    /// Submit a pattern mining job.
    ///
    /// Re-checks connectivity first and refuses to mint an id when the probe
    /// fails. The notebook payload is generated but not uploaded; the only
    /// durable effect is the returned id. Two calls with identical
    /// parameters yield distinct ids.
    pub async fn submit_job(&self, params: &JobParameters) -> Result<SubmittedJob, KaggleError> {
        if !self.test_connection().await {
            return Err(KaggleError::Unauthenticated);
        }

        let job_id = self.mint_job_id();
        let notebook = notebook::render(params)?;

        info!(
            job_id = %job_id,
            symbol = %params.currency_pair.symbol,
            time_frame = %params.time_frame.label,
            notebook_bytes = notebook.len(),
            "Pattern mining job prepared for submission"
        );

        Ok(SubmittedJob { job_id, notebook })
    }

    /// Fetch status for a job.
    ///
    /// Simulated until a real kernel-status endpoint is wired in; callers
    /// must not treat the output as authoritative. Result-typed so the stub
    /// can be swapped for a real poll without touching call sites.
    pub async fn job_status(&self, job_id: &str) -> Result<JobStatus, KaggleError> {
        Ok(sim::job_status(job_id))
    }

    fn mint_job_id(&self) -> String {
        format!(
            "{}/forex-pattern-mining-{}",
            self.credentials.username,
            Utc::now().timestamp_millis()
        )
    }
}
