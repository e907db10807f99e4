use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use ef_app::{AppError, AppResult, Network, Session, SessionConfig, parse_sections};
use ef_core::{NetworkId, RoomId};

#[derive(Parser)]
#[command(name = "escapeflow")]
#[command(about = "Escape route planner - maximum evacuation flow through building networks", long_about = None)]
struct Cli {
    /// Session configuration (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session on stdin/stdout
    Repl,
    /// Execute a command script
    Run {
        /// Path to the script, one command per line
        script: PathBuf,
    },
    /// One-shot maximum flow on an ad-hoc network
    Flow {
        /// Sections separated by ';', e.g. "a5b;b3c"
        #[arg(long)]
        sections: String,
        /// Start room
        start: String,
        /// Target room
        end: String,
    },
}

/// Identifier given to the network built by `flow`.
const ADHOC_NETWORK: &str = "ADHOC";

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => cmd_repl(config),
        Commands::Run { script } => cmd_run(config, &script),
        Commands::Flow {
            sections,
            start,
            end,
        } => cmd_flow(&sections, &start, &end),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_repl(config: SessionConfig) -> AppResult<()> {
    let mut session = Session::new(config);
    session.run(io::stdin().lock(), io::stdout().lock())
}

fn cmd_run(config: SessionConfig, script: &Path) -> AppResult<()> {
    let file = File::open(script).map_err(|source| AppError::FileRead {
        path: script.to_path_buf(),
        source,
    })?;
    tracing::info!(script = %script.display(), "running script");
    let mut session = Session::new(config);
    session.run(BufReader::new(file), io::stdout().lock())
}

fn cmd_flow(sections: &str, start: &str, end: &str) -> AppResult<()> {
    let id = NetworkId::parse(ADHOC_NETWORK)?;
    let mut network = Network::create(id, parse_sections(sections)?)?;
    let flow = network.max_flow(&RoomId::parse(start)?, &RoomId::parse(end)?)?;
    println!("{}", flow);
    Ok(())
}
