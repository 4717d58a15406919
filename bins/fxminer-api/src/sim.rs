// Simulated job status, kept apart from the client so a real kernel poll
// can replace it without touching callers.

use chrono::Utc;
use fxminer_common::types::{JobState, JobStatus};
use rand::Rng;

/// Synthesize a status report for a job.
///
/// ~70% of calls report a running job with progress in 50..90, the rest a
/// completed one at 100. Progress 100 always pairs with `Completed`.
pub fn job_status(job_id: &str) -> JobStatus {
    let mut rng = rand::thread_rng();

    let progress: u8 = if rng.gen::<f64>() > 0.3 {
        rng.gen_range(50..90)
    } else {
        100
    };

    let status = if progress == 100 {
        JobState::Completed
    } else {
        JobState::Running
    };

    let message = match status {
        JobState::Completed => "Pattern mining analysis completed successfully",
        _ => "Pattern mining analysis in progress...",
    };

    JobStatus {
        id: job_id.to_string(),
        status,
        progress,
        message: message.to_string(),
        start_time: Utc::now(),
        end_time: None,
        execution_time: Some(120.0 + rng.gen::<f64>() * 60.0),
    }
}
