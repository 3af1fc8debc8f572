use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use sicherung::api::BackupApi;
use sicherung::checksum;
use sicherung::client::PanelClient;
use sicherung::config;
use sicherung::error::{http_error_to_human, SubmitRejected};
use sicherung::flash::BACKUPS_CREATE;
use sicherung::flow::{CreateBackupFlow, Submission};
use sicherung::state::PanelState;
use sicherung::store::BackupCommand;
use sicherung::types::{BackupRecord, ServerId};

#[derive(Debug, Parser)]
#[command(author, version, about = "Backups eines Panel-Servers erstellen und prüfen")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start a new backup of a server.
    Create {
        #[arg(long)]
        server: String,
        /// Leave empty to let the panel generate a name.
        #[arg(long, default_value = "")]
        name: String,
        /// Newline-separated ignore patterns.
        #[arg(long, conflicts_with = "ignored_file")]
        ignored: Option<String>,
        /// Read the ignore patterns from a file.
        #[arg(long)]
        ignored_file: Option<PathBuf>,
    },
    /// List the backups of a server.
    List {
        #[arg(long)]
        server: String,
    },
    /// Show a checksum the way the panel displays it.
    Checksum { value: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Create { server, name, ignored, ignored_file } => {
            let ignored = match (ignored, ignored_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read ignore file {}", path.display()))?,
                (None, None) => String::new(),
            };
            create(ServerId::new(server), name, ignored).await
        }
        Command::List { server } => list(ServerId::new(server)).await,
        Command::Checksum { value } => {
            println!("{}", checksum::render(&value));
            Ok(())
        }
    }
}

fn client() -> anyhow::Result<PanelClient> {
    let app_cfg = config::load()?;
    info!("Using panel at {}", app_cfg.panel.url);
    PanelClient::new(&app_cfg.panel).context("failed to build HTTP client")
}

async fn create(server: ServerId, name: String, ignored: String) -> anyhow::Result<()> {
    let api = client()?;
    let mut state = PanelState::new(server.clone());
    let mut flow = CreateBackupFlow::new(server);

    state.apply_all(flow.open());
    flow.set_name(name);
    flow.set_ignored(ignored);

    match flow.submit_with(&api).await {
        Ok(effects) => state.apply_all(effects),
        Err(SubmitRejected::Invalid(errors)) => {
            for e in errors.iter() {
                eprintln!("{}", e);
            }
            anyhow::bail!("backup form is invalid");
        }
        Err(other) => return Err(other.into()),
    }

    match flow.submission() {
        Submission::Succeeded => {
            if let Some(record) = state.backups.items().last() {
                print_record(record);
            }
            Ok(())
        }
        _ => {
            let msg = state
                .flashes
                .by_key(BACKUPS_CREATE)
                .map(|m| m.message.clone())
                .collect::<Vec<_>>()
                .join("; ");
            anyhow::bail!("failed to create backup: {}", msg)
        }
    }
}

async fn list(server: ServerId) -> anyhow::Result<()> {
    let api = client()?;
    let mut state = PanelState::new(server.clone());
    let items = api
        .list_backups(&server)
        .await
        .map_err(|e| anyhow::anyhow!(http_error_to_human(&e)))?;
    state.dispatch(BackupCommand::Set(items));
    for record in state.backups.items() {
        print_record(record);
    }
    Ok(())
}

fn print_record(record: &BackupRecord) {
    let status = if record.is_completed() { "completed" } else { "in progress" };
    println!(
        "{}  {}  {}  {} bytes  {}",
        record.uuid,
        record.name,
        record.created_at.format("%Y-%m-%d %H:%M"),
        record.bytes,
        status
    );
}
