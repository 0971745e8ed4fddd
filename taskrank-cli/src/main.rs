use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use taskrank_client::{AnalysisSession, HttpScoringClient};
use taskrank_core::Strategy;
use tracing_subscriber::EnvFilter;

mod config;
mod interactive;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(name = "taskrank", version, about = "Queue tasks, score them remotely, review the ranking")]
struct Cli {
    /// Scoring service root URL (overrides config.toml)
    #[arg(long, env = "TASKRANK_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides config.toml)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session: add tasks, pick a strategy, analyze
    Session,

    /// Import a JSON array of tasks and analyze it in one go
    Analyze {
        /// Path to a JSON file, or `-` for stdin
        #[arg(long)]
        file: PathBuf,

        /// Strategy id (default: config.toml [analysis].default_strategy)
        #[arg(long)]
        strategy: Option<String>,
    },

    /// Fetch the service's saved suggestions
    Suggest,

    /// List available scoring strategies
    Strategies,

    /// Config file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.taskrank/config.toml with defaults (if missing)
    Init,

    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load_config()?;
    if let Some(url) = cli.base_url {
        cfg.backend.base_url = url;
    }
    if let Some(secs) = cli.timeout_secs {
        cfg.backend.timeout_secs = secs;
    }

    match cli.command {
        Command::Session => {
            let mut session = open_session(&cfg)?;
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            interactive::run(&mut session, &mut input, &mut out).await?;
        }

        Command::Analyze { file, strategy } => {
            let payload = read_payload(&file)?;
            let mut session = open_session(&cfg)?;

            if let Some(id) = strategy {
                session.select_strategy(&id)?;
            }
            let added = session
                .import_bulk_text(payload)
                .with_context(|| format!("importing {}", file.display()))?;

            println!(
                "Analyzing {} tasks with {} ({})\n",
                added,
                session.strategy().id(),
                session.strategy().label()
            );
            let results = session.analyze().await.context("analyze")?;
            print!("{}", render::results_table(results));
        }

        Command::Suggest => {
            let mut session = open_session(&cfg)?;
            let results = session.suggest().await.context("suggest")?;
            print!("{}", render::results_table(results));
        }

        Command::Strategies => {
            print!("{}", render::strategies(cfg.default_strategy()?));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn open_session(cfg: &config::Config) -> Result<AnalysisSession<HttpScoringClient>> {
    let strategy: Strategy = cfg.default_strategy()?;
    let timeout: Duration = cfg.timeout();
    if timeout.is_zero() {
        bail!("timeout_secs must be greater than zero");
    }
    let client = HttpScoringClient::new(&cfg.backend.base_url, timeout)
        .with_context(|| format!("building client for {}", cfg.backend.base_url))?;
    Ok(AnalysisSession::new(client).with_strategy(strategy))
}

fn read_payload(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s).context("read stdin")?;
        return Ok(s);
    }
    std::fs::read_to_string(file).with_context(|| format!("read {}", file.display()))
}
