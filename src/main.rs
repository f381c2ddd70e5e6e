use anyhow::Result;
use clap::{Parser, Subcommand};

use intent_signal::cli::{
    handle_history_command, handle_options_command, handle_signals_command,
    handle_unlock_command,
};
use intent_signal::config::{paths::SignalPaths, settings::Settings};
use intent_signal::logging::init_logging;
use intent_signal::storage::Storage;

#[derive(Parser)]
#[command(
    name = "intent-signal",
    version,
    about = "Terminal dashboard for intent signals",
    long_about = "intent-signal lists buying-intent signals by company. Companies stay \
                  hidden until a signal is unlocked through the unlock dialog or the \
                  'unlock' command."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// List the unlock options
    Options {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the signal feed
    Signals,

    /// Unlock signals without the TUI
    Unlock {
        /// Option ids (current, super_strong, very_strong, strong, all)
        options: Vec<String>,
        /// Signal whose badge resolves 'current'
        #[arg(short, long)]
        badge: Option<String>,
    },

    /// Show recent unlocks
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory with the sample feed
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SignalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let _log_guard = init_logging(&paths, &settings)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) | None => {
            intent_signal::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Options { json }) => {
            handle_options_command(json)?;
        }
        Some(Commands::Signals) => {
            handle_signals_command(&storage, &settings)?;
        }
        Some(Commands::Unlock { options, badge }) => {
            handle_unlock_command(&storage, &settings, &options, badge.as_deref())?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing intent-signal at: {}", paths.base_dir().display());
            let seeded = intent_signal::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if seeded {
                println!();
                println!("A sample feed of 7 signals has been created.");
            }
            println!();
            println!("Run 'intent-signal signals' to see the feed.");
        }
        Some(Commands::Config) => {
            println!("intent-signal Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Signals file:    {}", paths.signals_file().display());
            println!("Unlock ledger:   {}", paths.unlock_log().display());
            println!("Log directory:   {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Log level:              {}", settings.log_level);
            println!("  Tick rate (ms):         {}", settings.tick_rate_ms);
            println!("  Record unlocks:         {}", settings.record_unlocks);
            println!("  Mask locked companies:  {}", settings.mask_locked_companies);
        }
    }

    Ok(())
}
