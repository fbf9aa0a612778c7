mod commands;

use anchor_core::{AnchorConfig, Category};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::config::ConfigAction;

const DEFAULT_HISTORY_LIMIT: &str = "20";

#[derive(Parser)]
#[command(name = "anchor")]
#[command(about = "A steady companion through life's emotional waves", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive conversation
    Chat {
        /// Session to continue (defaults to a new session)
        #[arg(short, long)]
        session: Option<String>,
        /// Don't write the snapshot when the chat ends
        #[arg(long)]
        no_save: bool,
    },
    /// Classify the emotional tone of a message
    Classify {
        /// Message text
        #[arg(required = true)]
        text: Vec<String>,
        /// Show per-category scores and matched keywords
        #[arg(short, long)]
        explain: bool,
    },
    /// List stored sessions
    Sessions,
    /// Summarize the emotional mix of a session
    Summary {
        #[arg(short, long)]
        session: String,
    },
    /// Show per-mood statistics for a session
    Report {
        #[arg(short, long)]
        session: String,
    },
    /// Show the most recent interactions of a session
    History {
        #[arg(short, long)]
        session: String,
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // keep log lines from interleaving with the conversation
    let default_filter = if matches!(cli.command, Commands::Chat { .. }) {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();

    match cli.command {
        Commands::Chat { session, no_save } => {
            commands::chat::handle_chat_command(session, no_save)
        }
        Commands::Classify { text, explain } => classify_command(&text.join(" "), explain),
        Commands::Sessions => commands::report::handle_sessions_command(),
        Commands::Summary { session } => commands::report::handle_summary_command(&session),
        Commands::Report { session } => commands::report::handle_report_command(&session),
        Commands::History { session, limit } => {
            commands::report::handle_history_command(&session, limit)
        }
        Commands::Config { action } => commands::config::handle_config_command(action),
    }
}

fn classify_command(message: &str, explain: bool) -> Result<()> {
    let config = AnchorConfig::load_or_default().context("Failed to load config")?;
    let classifier = config.classifier().context("Failed to load lexicon")?;
    let result = classifier.classify_full(message);

    println!("{}", result.category);
    if explain {
        println!("\nScores:");
        for category in Category::SCORED {
            println!("  {category:<9} {:>3}", result.scores.get(category));
        }
        if !result.matches.is_empty() {
            println!("\nMatched keywords:");
            for m in &result.matches {
                let note = if m.negated { " (negated)" } else { "" };
                println!("  {} -> {}{note}", m.keyword, m.category);
            }
        }
    }
    Ok(())
}
