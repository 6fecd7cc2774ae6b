mod cmd_analysis;
mod cmd_config;
mod cmd_detect;
mod cmd_journal;
mod cmd_stats;
mod cmd_sticker;
mod cmd_yoga;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use moodlog_core::MoodlogConfig;
use moodlog_store::HistoryStore;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "moodlog", version, about = "Local-first mood journal")]
struct Cli {
    /// Store directory (default: $MOODLOG_HOME or the platform data dir)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect the emotion in a piece of text and record it
    Detect {
        /// Text describing how you feel
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or clear the emotion history
    History {
        /// Delete every recorded emotion
        #[arg(long)]
        clear: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write and manage journal entries
    Journal {
        #[command(subcommand)]
        cmd: cmd_journal::JournalCmd,
    },
    /// Yoga recommendations and practice log
    Yoga {
        #[command(subcommand)]
        cmd: cmd_yoga::YogaCmd,
    },
    /// Achievement stickers
    Sticker {
        #[command(subcommand)]
        cmd: cmd_sticker::StickerCmd,
    },
    /// Show dashboard statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the current streak
    Streak,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        cmd: cmd_config::ConfigCmd,
    },
    /// Validate and display a sentiment analysis result
    Analysis {
        /// JSON file produced by the analysis service, or `-` for stdin
        source: String,
    },
    /// Clear the signed-in session (history is kept)
    Logout,
}

/// Open the store and its config.
pub(crate) fn open(root: &Path) -> anyhow::Result<(HistoryStore, MoodlogConfig)> {
    let store = HistoryStore::open(root)?;
    let config = moodlog_store::load_config(store.paths())?;
    Ok((store, config))
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = cli.root.unwrap_or_else(moodlog_store::store_root);
    tracing::debug!(root = %root.display(), "using store");

    match cli.cmd {
        Command::Detect { text, json } => cmd_detect::detect(&root, &text.join(" "), json),
        Command::History { clear, json } => cmd_detect::history(&root, clear, json),
        Command::Journal { cmd } => cmd_journal::run(cmd, &root),
        Command::Yoga { cmd } => cmd_yoga::run(cmd, &root),
        Command::Sticker { cmd } => cmd_sticker::run(cmd, &root),
        Command::Stats { json } => cmd_stats::stats(&root, json),
        Command::Streak => cmd_stats::streak(&root),
        Command::Config { cmd } => cmd_config::run(cmd, &root),
        Command::Analysis { source } => cmd_analysis::show(&source),
        Command::Logout => cmd_stats::logout(&root),
    }
}
