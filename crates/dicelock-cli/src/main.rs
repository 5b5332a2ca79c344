//! Dicelock console game.
//!
//! Plays one provably fair dice duel against the machine opponent. Every
//! random decision the machine makes is committed to with an HMAC digest
//! before the human responds and the key is revealed afterwards, so the
//! transcript can be checked by hand.

mod console;

use clap::Parser;
use dicelock_core::{parse_dice, GameSession, SessionEnd};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXAMPLE: &str = "Example: dicelock \"2,2,4,4,9,9\" \"6,8,1,1,8,6\" \"7,5,3,7,5,3\"";

/// Provably fair dice duel
#[derive(Parser, Debug)]
#[command(name = "dicelock", about = "Provably fair dice duel against the machine", after_help = EXAMPLE)]
struct Args {
    /// Dice configurations, each a comma-separated list of integer faces
    #[arg(required = true, num_args = 3.., value_name = "DICE")]
    dice: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(count = args.dice.len(), "parsed dice arguments");

    let dice = match parse_dice(&args.dice) {
        Ok(dice) => dice,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{EXAMPLE}");
            std::process::exit(1);
        }
    };

    let mut collector = console::ConsoleCollector::new();
    let mut presenter = console::ConsolePresenter::new();
    let session = match GameSession::new(dice, &mut collector, &mut presenter) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{EXAMPLE}");
            std::process::exit(1);
        }
    };

    match session.run() {
        // The presenter already reported the result or acknowledged the
        // exit; nothing left to say.
        Ok(SessionEnd::Completed(_)) | Ok(SessionEnd::Aborted) => {}
        Err(err) => {
            eprintln!("Fatal: {err}");
            std::process::exit(1);
        }
    }
}
