//! Rehearsal planner CLI.
//!
//! # Usage
//!
//! ```bash
//! # Plan upcoming sessions for a configured show
//! rehearsal-planner plan hamlet
//!
//! # Include sessions whose date has already passed
//! rehearsal-planner plan hamlet --include-past
//! ```
//!
//! The show id must exist in `shows.yaml`; the store token comes from the
//! `AIRTABLE_API_TOKEN` environment variable (a `.env` file is honored).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rehearsal_planner::config;
use rehearsal_planner::run::{self, SessionOutcome};
use rehearsal_planner::store::AirtableClient;
use rehearsal_planner::Error;

const TOKEN_VAR: &str = "AIRTABLE_API_TOKEN";

#[derive(Parser)]
#[command(name = "rehearsal-planner")]
#[command(version)]
#[command(about = "Plan rehearsal sessions based on actor availabilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and store the rehearsal plan for a show
    Plan {
        /// Show id from the shows configuration file
        show: String,

        /// Also plan sessions whose date is today or earlier
        #[arg(long)]
        include_past: bool,

        /// Path to the shows configuration file
        #[arg(long, default_value = "shows.yaml")]
        shows: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rehearsal_planner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Plan {
            show,
            include_past,
            shows,
        } => plan_command(&show, include_past, &shows).await,
    }
}

async fn plan_command(
    show_id: &str,
    include_past: bool,
    shows_path: &PathBuf,
) -> anyhow::Result<()> {
    let shows = config::load_shows(shows_path)?;
    let show = config::find_show(&shows, show_id)?;
    let token =
        std::env::var(TOKEN_VAR).map_err(|_| Error::MissingCredential(TOKEN_VAR.into()))?;

    let client = AirtableClient::new(token, &show.base_id)?;

    println!("Creating plan for the show {}", show.name);
    let summary = run::plan_show(&client, &client, include_past)
        .await
        .with_context(|| format!("planning run failed for show '{}'", show.id))?;

    for report in &summary.reports {
        match &report.outcome {
            SessionOutcome::Stored => println!(
                "{}: {} scene(s), {} needed, {} not needed",
                report.date, report.scene_count, report.needed_count, report.not_needed_count
            ),
            SessionOutcome::Skipped => {
                println!("{}: no rehearsable scene, skipped", report.date)
            }
            SessionOutcome::Failed(message) => {
                println!("{}: failed to store plan: {}", report.date, message)
            }
        }
    }
    println!(
        "Planned {} of {} session(s), {} failed",
        summary.stored(),
        summary.sessions(),
        summary.failed()
    );

    Ok(())
}
