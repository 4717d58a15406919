mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fxminer-cli")]
#[command(about = "Fxminer CLI - Exercise the pattern mining dashboard API", long_about = None)]
struct Cli {
    /// Base URL of a running fxminer-api instance
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe Kaggle API connectivity through the dashboard endpoint
    Test,

    /// Submit the demo pattern mining job
    Submit,

    /// Fetch the (simulated) status of a job
    Status {
        /// Job identifier returned by a previous submit
        #[arg(short, long, default_value = "test-job-id")]
        job_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test => commands::test_connection(&cli.api_url).await?,
        Commands::Submit => commands::submit_job(&cli.api_url).await?,
        Commands::Status { job_id } => commands::job_status(&cli.api_url, &job_id).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
