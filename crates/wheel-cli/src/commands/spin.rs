use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use crate::GlobalArgs;
use crate::bell::BellNotifier;

/// How long to sleep between polls of a running spin.
const FRAME: Duration = Duration::from_millis(16);

/// Options for a single command-line spin.
pub struct SpinArgs {
    pub target: Option<String>,
    pub duration: u64,
    pub spins: u32,
    pub sound: bool,
    pub quiet: bool,
}

pub fn run(global: &GlobalArgs, args: &SpinArgs) -> Result<(), String> {
    let mut session = super::open_session(global, args.duration, args.spins)?;

    if let Some(text) = &args.target {
        session.set_preset_text(text).map_err(|e| e.to_string())?;
    }
    if args.sound {
        session.set_notifier(BellNotifier::stderr());
    }

    let labels: Vec<String> = session.entries().iter().map(|e| e.label.clone()).collect();
    let Some(resolution) = session.spin() else {
        println!("  Nothing to spin: the wheel has no entries.");
        return Ok(());
    };
    tracing::debug!(index = resolution.index, delta = resolution.delta, "spin started");

    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let outcome = loop {
        if let Some(outcome) = session.poll() {
            break outcome;
        }
        if !args.quiet
            && let Some(label) = session
                .wheel()
                .live_index(labels.len())
                .and_then(|i| labels.get(i))
        {
            let mut err = io::stderr();
            write!(err, "\r  {label:<width$}").ok();
            err.flush().ok();
        }
        thread::sleep(FRAME);
    };
    if !args.quiet {
        eprintln!();
    }

    println!(
        "  {} {} (slice {})",
        "Winner:".green().bold(),
        outcome.entry.label.bold(),
        outcome.winning_index
    );
    if session.entries().len() < labels.len() && !args.quiet {
        println!(
            "  Removed from the wheel ({} entries left)",
            session.entries().len()
        );
    }

    super::save_session(&session)
}
