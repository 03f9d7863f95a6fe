//! Runs the shift tracker dialogs over standard input and output.
//!
//! Usage:
//!
//! ```text
//! shift-console [--config <path>] [--operator <id>]
//! ```
//!
//! Each input line is one chat message. Commands start with `/`; while a
//! `Sí`/`No` prompt is showing, typing `sí` or `no` answers it. After
//! `/auto`, paste the activity list and end it with a blank line. A
//! representative configuration file is:
//!
//! ```json
//! {
//!   "log_filter": "shift_tracker=debug",
//!   "operator": "night-desk",
//!   "session_timeout_secs": 900
//! }
//! ```
//!
//! Logs go to standard error. `RUST_LOG` overrides the configured filter.

use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use mockable::DefaultClock;
use shift_tracker::{
    config::BotConfig,
    console::{ConsoleOutbox, ConsoleSession},
    dialog::services::DialogController,
    task::{adapters::memory::InMemoryTaskStore, domain::OperatorId},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "shift-console", about = "Track shift activities from the terminal")]
struct Cli {
    /// Path to a JSON configuration file.
    #[arg(long, env = "SHIFT_TRACKER_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Operator identity, overriding the configured one.
    #[arg(long, env = "SHIFT_TRACKER_OPERATOR")]
    operator: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => BotConfig::load(path)?,
        None => BotConfig::default(),
    };
    init_tracing(&config)?;

    let operator = OperatorId::new(cli.operator.unwrap_or_else(|| config.operator.clone()));
    let outbox = Arc::new(ConsoleOutbox::new(tokio::io::stdout()));
    let interpreter = outbox.interpreter();
    let mut controller = DialogController::new(
        Arc::new(InMemoryTaskStore::new()),
        outbox,
        Arc::new(DefaultClock),
    );
    if let Some(timeout) = config.session_timeout() {
        controller = controller.with_session_timeout(timeout);
    }

    tracing::info!(%operator, "shift console ready");
    let mut session = ConsoleSession::new(&controller, interpreter, operator.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Err(err) = session.feed(&line).await {
            tracing::error!(%operator, error = %err, "failed to handle input");
        }
    }
    if let Err(err) = session.finish().await {
        tracing::error!(%operator, error = %err, "failed to handle input");
    }
    tracing::info!(%operator, "input closed, shutting down");
    Ok(())
}

fn init_tracing(config: &BotConfig) -> Result<(), BoxError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}
