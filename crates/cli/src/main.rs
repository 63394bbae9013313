use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::{config::ConnectorSettings, notebook::adapter::JobAdapter};
use model::execution::handle::JobHandle;
use serde::Serialize;
use tracing::Level;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "adbctl", version = "0.1.0", about = "Analytic database notebook connector")]
struct Cli {
    /// User recorded on submissions and cancellations
    #[arg(long, default_value = "cli")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let settings = ConnectorSettings::from_env()?;
    let adapter = JobAdapter::connect(cli.user, &settings)?;

    match cli.command {
        Commands::Submit { statement } => {
            let handle = adapter.execute(&statement).await?;
            print_json(&handle)?;
        }
        Commands::Status { job_id } => {
            let state = adapter.check_status(&handle_for(job_id)).await?;
            println!("{state}");
        }
        Commands::Cancel { job_id } => {
            let outcome = adapter.cancel(&handle_for(job_id)).await?;
            print_json(&outcome)?;
        }
        Commands::Log { job_id } => {
            let log = adapter.get_log(&handle_for(job_id)).await?;
            println!("{log}");
        }
        Commands::Jobs { job_id } => {
            let listings = adapter.get_jobs(&handle_for(job_id))?;
            print_json(&listings)?;
        }
        Commands::Result { job_id } => {
            let result = adapter.fetch_result(&handle_for(job_id));
            print_json(&result)?;
        }
        Commands::Autocomplete { database } => {
            let payload = adapter
                .autocomplete(database.as_deref(), None, None, None)
                .await?;
            print_json(&payload)?;
        }
    }

    Ok(())
}

/// Handle reconstructed from a bare job id; the CRN is only known right
/// after submission and none of the operations here need it.
fn handle_for(job_id: String) -> JobHandle {
    JobHandle {
        id: Some(job_id),
        crn: None,
        has_result_set: false,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
