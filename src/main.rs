mod app;
mod audio;
mod error;
mod logging;
mod models;
mod persistence;
mod share;
mod tui;
mod wheel;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use app::{load_registry, run_tui, RunOptions};
use persistence::JsonStore;

#[derive(Parser)]
#[command(name = "teamwheel")]
#[command(version = "0.1.0")]
#[command(about = "Spin a wheel to sort people into teams")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// State file to load and save (defaults to the config directory)
    #[arg(long, env = "TEAMWHEEL_STATE")]
    state: Option<PathBuf>,

    /// Share token (or link containing tab=<token>) to import on startup
    #[arg(short, long)]
    import: Option<String>,

    /// Disable sound cues
    #[arg(short, long)]
    mute: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved wheels
    List,
    /// Print the share token for a saved wheel
    Share {
        /// Wheel id as shown by `list`
        id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let store = match cli.state {
        Some(path) => JsonStore::new(path),
        None => JsonStore::new(persistence::default_state_path()?),
    };

    match cli.command {
        Some(Commands::List) => {
            let registry = load_registry(&store);
            for session in registry.sessions() {
                let marker = if session.id() == registry.active_id() { "*" } else { " " };
                println!(
                    "{} {:>3}  {:<20} pool {:>3}  teams {:>2}  spins {}",
                    marker,
                    session.id(),
                    session.label(),
                    session.names().len(),
                    session.teams().len(),
                    session.stats().total_spins
                );
            }
            println!("{} wheels, next id {}", registry.len(), registry.next_id());
        }
        Some(Commands::Share { id }) => {
            let registry = load_registry(&store);
            let session = registry
                .get(id)
                .with_context(|| format!("no wheel with id {}", id))?;
            println!("{}", share::encode(&session.config()));
        }
        None => {
            let config = persistence::load_config()?;
            run_tui(RunOptions {
                store,
                config,
                import: cli.import,
                muted: cli.mute,
            })
            .await?;
        }
    }

    Ok(())
}
