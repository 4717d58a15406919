// CLI commands: each one drives a dashboard action and prints the envelope.

use anyhow::{bail, Context, Result};
use fxminer_common::types::ApiEnvelope;

/// Probe Kaggle connectivity.
pub async fn test_connection(api_url: &str) -> Result<()> {
    println!("🔌 Testing Kaggle API connection...");
    let envelope = fetch_action(api_url, "test", None).await?;

    let connected = envelope
        .data
        .as_ref()
        .and_then(|d| d["connected"].as_bool())
        .unwrap_or(false);

    if connected {
        println!("✅ Kaggle API reachable");
    } else {
        println!("⚠️  Kaggle API not reachable - check KAGGLE_USERNAME/KAGGLE_KEY on the server");
    }
    Ok(())
}

/// Submit the demo job.
pub async fn submit_job(api_url: &str) -> Result<()> {
    println!("🚀 Submitting demo pattern mining job...");
    let envelope = fetch_action(api_url, "submit", None).await?;

    if let Some(job_id) = envelope.data.as_ref().and_then(|d| d["jobId"].as_str()) {
        println!("✅ Job submitted: {}", job_id);
        println!("\n📋 Next step:");
        println!("  fxminer-cli status --job-id '{}'", job_id);
    }
    Ok(())
}

/// Fetch (simulated) job status.
pub async fn job_status(api_url: &str, job_id: &str) -> Result<()> {
    println!("📊 Fetching status for: {}", job_id);
    let envelope = fetch_action(api_url, "status", Some(job_id)).await?;

    if let Some(data) = envelope.data.as_ref() {
        let state = data["status"].as_str().unwrap_or("unknown");
        let progress = data["progress"].as_u64().unwrap_or(0);
        println!("✅ {} - {}% complete", state, progress);
    }
    Ok(())
}

/// GET the dashboard endpoint, pretty-print the envelope, fail on errors.
async fn fetch_action(api_url: &str, action: &str, job_id: Option<&str>) -> Result<ApiEnvelope> {
    let mut url = format!("{}/api/kaggle/test?action={}", api_url, action);
    if let Some(id) = job_id {
        url.push_str("&jobId=");
        url.push_str(id);
    }

    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("request to {} failed - is fxminer-api running?", url))?;

    let envelope: ApiEnvelope = response
        .json()
        .await
        .context("response body is not a valid API envelope")?;

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if !envelope.success {
        bail!(
            "action '{}' failed: {}",
            action,
            envelope.error.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(envelope)
}
