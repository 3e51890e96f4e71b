//! tutorboard-web - Tutor matching and booking service
//!
//! Loads the tutor roster once at startup and serves the JSON API for
//! listings, slot resolution and client submissions.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tutorboard_core::config::Config;
use tutorboard_core::roster::Roster;
use tutorboard_core::TutorBoard;
use tutorboard_web::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "tutorboard-web", version, about = "Tutor matching and booking service")]
struct Args {
    /// Data directory holding tutors.json and the collection files
    #[arg(long)]
    data_dir: Option<String>,

    /// HTTP bind address
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting TutorBoard (tutorboard-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();
    let config = Config::resolve(args.data_dir.as_deref(), args.bind.as_deref());
    info!("Data directory: {}", config.data_dir.display());

    // The roster is loaded once and shared read-only for the process
    // lifetime; a reload is a restart.
    let roster = match Roster::load(&config.roster_path()) {
        Ok(roster) => {
            info!("Loaded roster: {} tutors, {} goals", roster.len(), roster.goals().len());
            Arc::new(roster)
        }
        Err(e) => {
            error!("Failed to load roster: {}", e);
            return Err(e.into());
        }
    };

    let board = Arc::new(TutorBoard::new(roster, &config.data_dir));
    let state = AppState::new(board);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("tutorboard-web listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
