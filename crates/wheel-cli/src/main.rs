//! CLI frontend for the prize wheel.

mod bell;
mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wheel",
    about = "Prize wheel for giveaways, classroom picks, and team draws",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// State file holding entries, settings, and the spin log
    #[arg(short, long, global = true, default_value = "wheel.json")]
    pub file: PathBuf,

    /// Admin PIN that unlocks entry editing and preset outcomes
    #[arg(
        long,
        global = true,
        env = "WHEEL_ADMIN_PIN",
        default_value = "1234",
        hide_env_values = true
    )]
    pub admin_pin: String,

    /// RNG seed for reproducible random spins
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a state file with the default entries
    Init {
        /// Overwrite an existing state file
        #[arg(long)]
        force: bool,
    },

    /// List, add, or remove wheel entries
    #[command(subcommand)]
    Entries(EntriesCommand),

    /// Replace the entries with a demo wheel (classroom, giveaway, teams)
    Demo {
        /// Demo wheel name
        name: String,
    },

    /// Spin the wheel and record the winner
    Spin {
        /// Preset winning slice index (admin only; invalid values spin at random)
        #[arg(short, long)]
        target: Option<String>,

        /// Spin duration in milliseconds
        #[arg(short, long, default_value = "4800")]
        duration: u64,

        /// Extra full turns per spin
        #[arg(long, default_value = "6")]
        spins: u32,

        /// Ring the terminal bell while spinning
        #[arg(long)]
        sound: bool,

        /// Only print the winner
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the most recent spins
    Log {
        /// Number of spins to show
        #[arg(short = 'n', long, default_value = "8")]
        limit: usize,
    },

    /// Show win counts per label
    Leaderboard {
        /// Number of rows to show
        #[arg(short = 'n', long, default_value = "8")]
        limit: usize,
    },

    /// Export the spin log as CSV
    Export {
        /// Output file path; `-o` alone writes spin-results.csv (default: stdout)
        #[arg(
            short,
            long,
            num_args = 0..=1,
            default_missing_value = wheel_session::export::DEFAULT_EXPORT_FILE
        )]
        output: Option<PathBuf>,
    },

    /// Clear the spin log
    Clear,

    /// Unlock admin controls
    Login {
        /// The admin PIN
        pin: String,
    },

    /// Lock admin controls
    Logout,

    /// Show or change wheel settings
    Settings {
        /// Remove the winning entry after each spin (admin only): on or off
        #[arg(long)]
        remove_after: Option<Toggle>,
    },

    /// Launch the interactive wheel
    Tui {
        /// Spin duration in milliseconds
        #[arg(short, long, default_value = "4800")]
        duration: u64,

        /// Extra full turns per spin
        #[arg(long, default_value = "6")]
        spins: u32,
    },
}

#[derive(Subcommand)]
enum EntriesCommand {
    /// List entries in slice order
    List,

    /// Add an entry (admin only)
    Add {
        /// Slice label
        label: String,

        /// Image path or URL for the slice
        #[arg(long)]
        image: Option<String>,

        /// Slice color, e.g. "#ff8800"
        #[arg(long)]
        color: Option<String>,
    },

    /// Remove the entry at an index (admin only)
    Remove {
        /// Zero-based slice index
        index: usize,
    },
}

/// An on/off switch argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Toggle {
    /// Enabled.
    On,
    /// Disabled.
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("wheel_cli={level},wheel_session={level},wheel_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global.log_level);
    let global = &cli.global;

    let result = match cli.command {
        Commands::Init { force } => commands::init::run(global, force),
        Commands::Entries(EntriesCommand::List) => commands::entries::list(global),
        Commands::Entries(EntriesCommand::Add {
            label,
            image,
            color,
        }) => commands::entries::add(global, &label, image, color),
        Commands::Entries(EntriesCommand::Remove { index }) => {
            commands::entries::remove(global, index)
        }
        Commands::Demo { name } => commands::demo::run(global, &name),
        Commands::Spin {
            target,
            duration,
            spins,
            sound,
            quiet,
        } => commands::spin::run(
            global,
            &commands::spin::SpinArgs {
                target,
                duration,
                spins,
                sound,
                quiet,
            },
        ),
        Commands::Log { limit } => commands::log::run(global, limit),
        Commands::Leaderboard { limit } => commands::leaderboard::run(global, limit),
        Commands::Export { output } => commands::export::run(global, output.as_deref()),
        Commands::Clear => commands::clear::run(global),
        Commands::Login { pin } => commands::auth::login(global, &pin),
        Commands::Logout => commands::auth::logout(global),
        Commands::Settings { remove_after } => {
            commands::settings::run(global, remove_after.map(Toggle::enabled))
        }
        Commands::Tui { duration, spins } => {
            commands::open_session(global, duration, spins).and_then(tui::run)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
