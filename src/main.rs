//! vsp CLI entry point.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

/// Version string: package version plus git hash for dev builds.
fn build_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let date = env!("VSP_BUILD_DATE");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if sha != "unknown" => {
                let short = &sha[..sha.len().min(7)];
                format!("{version} ({short} {date})")
            }
            _ => format!("{version} ({date})"),
        }
    })
}

#[derive(Parser)]
#[command(
    name = "vsp",
    version = build_version(),
    about = "Replay recorded voice-agent sessions with latency markers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session's recording with the synchronized transcript
    Play {
        /// Path to the session JSON file
        session: PathBuf,
        /// Directory root-relative audio locators resolve against
        /// (defaults to the session file's directory)
        #[arg(long)]
        media_root: Option<PathBuf>,
    },
    /// Show a session summary without playing it
    Info {
        /// Path to the session JSON file
        session: PathBuf,
        /// Directory root-relative audio locators resolve against
        #[arg(long)]
        media_root: Option<PathBuf>,
    },
    /// List session files in a directory
    Ls {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    // Quiet unless RUST_LOG asks for more; logs go to stderr so the
    // player's alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            session,
            media_root,
        } => commands::play::handle_play(&session, media_root.as_deref()),
        Commands::Info {
            session,
            media_root,
        } => commands::info::handle_info(&session, media_root.as_deref()),
        Commands::Ls { dir } => commands::ls::handle_ls(&dir),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "vsp", &mut io::stdout());
            Ok(())
        }
    }
}
