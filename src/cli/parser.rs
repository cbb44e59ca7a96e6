use clap::{Parser, Subcommand};

/// Command-line interface definition for lifestats
/// CLI application to track personal life events with SQLite
#[derive(Parser)]
#[command(
    name = "lifestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal life-tracking CLI: log events, normalize names, and crunch the stats with SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the alias document path
    #[arg(global = true, long = "aliases-file", value_name = "FILE")]
    pub aliases_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Log a bathroom-family event (or rewrite one with --edit)
    Add {
        /// Event type tag (open vocabulary, e.g. pee, poop, cum)
        event_type: String,

        /// Timestamp (YYYY-MM-DDTHH:MM[:SS]); defaults to now
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,

        /// Free-text location
        #[arg(long)]
        location: Option<String>,

        /// First participant name, as typed (normalized via the alias table)
        #[arg(long)]
        who: Option<String>,

        /// Second participant name
        #[arg(long = "who2", value_name = "WHO")]
        who2: Option<String>,

        /// The event happened in a shared virtual space
        #[arg(long)]
        vr: bool,

        /// Rewrite the event with this id instead of inserting
        #[arg(long = "edit", value_name = "ID", requires = "at")]
        edit: Option<i64>,
    },

    /// Log a toothbrushing (or rewrite one with --edit)
    Brush {
        /// Timestamp (YYYY-MM-DDTHH:MM[:SS]); defaults to now
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,

        /// The flosser was used too
        #[arg(long)]
        flosser: bool,

        /// Brushing duration in seconds
        #[arg(long, value_name = "SECONDS")]
        duration: Option<i64>,

        /// Rewrite the event with this id instead of inserting
        #[arg(long = "edit", value_name = "ID", requires = "at")]
        edit: Option<i64>,
    },

    /// Delete an event by id
    Del {
        id: i64,

        /// Delete from the dental family instead of the bathroom family
        #[arg(long)]
        dental: bool,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show the full statistics dashboard
    Stats {
        /// Emit the dashboard payload as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show the top participant names
    Top {
        /// How many names to show (default from config, 3)
        #[arg(long)]
        limit: Option<u32>,

        /// Event type to rank (default from config)
        #[arg(long = "event-type", value_name = "TYPE")]
        event_type: Option<String>,
    },

    /// Print or replace the name alias table
    Aliases {
        #[arg(long = "print", help = "Print the alias table as JSON")]
        print_aliases: bool,

        /// Replace the whole table with the given JSON document
        #[arg(long = "replace", value_name = "FILE")]
        replace: Option<String>,
    },

    /// Bulk-import events from a CSV export
    Import {
        /// CSV file with header-named columns (Timestamp, Event Type, ...)
        file: String,

        /// Import into the dental family instead of the bathroom family
        #[arg(long)]
        dental: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show database information
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
