mod render;
mod session;

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sleuth_core::catalog::Edition;
use sleuth_core::engine::DeductionEngine;
use sleuth_core::engine::suggestion::SuggestionReport;

/// Deduction notebook for Clue-style board games.
#[derive(Debug, Parser)]
#[command(
    name = "sleuth",
    author,
    version,
    about = "Tracks who can hold which card and deduces the solution"
)]
struct Cli {
    /// Path to the saved notebook state.
    #[arg(
        long,
        value_name = "FILE",
        default_value = "sleuth.json",
        global = true
    )]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start a new game and log your starting hand.
    New {
        /// Edition key: "classic" or "master_detective".
        #[arg(long, default_value = "classic")]
        edition: String,
        /// Your own name; you are always first in the roster.
        #[arg(long)]
        user: String,
        /// The other players, comma separated, in seating order.
        #[arg(long, value_delimiter = ',')]
        opponents: Vec<String>,
        /// Your starting hand, comma separated card names.
        #[arg(long, value_delimiter = ',')]
        hand: Vec<String>,
    },
    /// Log another player's suggestion and who, if anyone, refuted it.
    Suggest {
        #[arg(long)]
        suggester: String,
        #[arg(long)]
        suspect: String,
        #[arg(long)]
        weapon: String,
        #[arg(long)]
        room: String,
        /// Players who showed a card, comma separated, in order.
        /// Omit entirely if the suggestion went all the way around.
        #[arg(long, value_delimiter = ',')]
        refuters: Vec<String>,
    },
    /// Log a card you showed when refuting someone else's suggestion.
    Shown {
        /// The player whose suggestion you refuted.
        #[arg(long)]
        suggester: String,
        /// The exact card you showed.
        #[arg(long)]
        card: String,
    },
    /// Print the solution, the deduction table, and pending log lines.
    Status,
    /// Discard the saved game.
    Reset,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::New {
            edition,
            user,
            opponents,
            hand,
        } => cmd_new(&cli.state, &edition, &user, opponents, hand),
        Command::Suggest {
            suggester,
            suspect,
            weapon,
            room,
            refuters,
        } => cmd_suggest(&cli.state, suggester, suspect, weapon, room, refuters),
        Command::Shown { suggester, card } => cmd_shown(&cli.state, &suggester, &card),
        Command::Status => cmd_status(&cli.state),
        Command::Reset => cmd_reset(&cli.state),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    // Ignore error if a global subscriber is already set (e.g., in tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn cmd_new(
    state: &PathBuf,
    edition: &str,
    user: &str,
    opponents: Vec<String>,
    hand: Vec<String>,
) -> anyhow::Result<()> {
    if session::exists(state) {
        bail!(
            "a game is already in progress at {}; run `sleuth reset` first",
            state.display()
        );
    }

    let edition: Edition = edition.parse()?;
    let opponents = trimmed(opponents);
    if opponents.is_empty() {
        bail!("at least one opponent is required");
    }

    let mut engine = DeductionEngine::new(edition, user.trim(), &opponents);
    engine.input_hand(&trimmed(hand));
    render::print_log(&engine.drain_log());
    session::save(state, &engine)?;
    println!(
        "Started a {} game for {} against {} opponent(s).",
        edition,
        engine.user(),
        engine.roster().len() - 1
    );
    Ok(())
}

fn cmd_suggest(
    state: &PathBuf,
    suggester: String,
    suspect: String,
    weapon: String,
    room: String,
    refuters: Vec<String>,
) -> anyhow::Result<()> {
    let mut engine = session::load(state)?;
    let report = SuggestionReport {
        suggester: suggester.trim().to_string(),
        suspect: suspect.trim().to_string(),
        weapon: weapon.trim().to_string(),
        room: room.trim().to_string(),
        refuters: trimmed(refuters),
    };
    engine.record_suggestion(&report);
    render::print_log(&engine.drain_log());
    session::save(state, &engine)?;
    Ok(())
}

fn cmd_shown(state: &PathBuf, suggester: &str, card: &str) -> anyhow::Result<()> {
    let mut engine = session::load(state)?;
    engine.record_user_refutation(suggester.trim(), card.trim());
    render::print_log(&engine.drain_log());
    session::save(state, &engine)?;
    Ok(())
}

fn cmd_status(state: &PathBuf) -> anyhow::Result<()> {
    let mut engine = session::load(state)?;
    render::print_summary(&engine);
    let log = engine.drain_log();
    if !log.is_empty() {
        println!();
        render::print_log(&log);
    }
    // The drained log stays drained on the next invocation.
    session::save(state, &engine)?;
    Ok(())
}

fn cmd_reset(state: &PathBuf) -> anyhow::Result<()> {
    if session::reset(state)? {
        println!("Discarded the saved game at {}.", state.display());
    } else {
        println!("No saved game at {}.", state.display());
    }
    Ok(())
}

fn trimmed(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
