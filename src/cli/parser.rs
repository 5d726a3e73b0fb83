use clap::{Parser, Subcommand};

/// Command-line interface definition for SurfSync
/// CLI application to track surf sessions with SQLite
#[derive(Parser)]
#[command(
    name = "surfsync",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple surf logbook CLI: track sessions, boards and stoke using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(
            long = "bare",
            help = "Start with an empty logbook instead of the demo sessions"
        )]
        bare: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit table")]
        print: bool,
    },

    /// Log a surf session
    Add {
        /// Spot name (e.g. Pipeline)
        spot: String,

        /// Session date (YYYY-MM-DD)
        #[arg(long = "date", help = "Session date (YYYY-MM-DD, defaults to today)")]
        date: Option<String>,

        /// Board from the catalog
        #[arg(
            long = "board",
            help = "Board name from the catalog (defaults to the configured board)"
        )]
        board: Option<String>,

        /// Waves caught
        #[arg(
            long = "waves",
            allow_negative_numbers = true,
            help = "Waves caught (0-200)"
        )]
        waves: Option<i64>,

        /// Mood rating
        #[arg(
            long = "mood",
            allow_negative_numbers = true,
            help = "Mood rating: 1=Tired .. 5=Stoked"
        )]
        mood: Option<i64>,

        #[arg(long = "swell", help = "Swell size: <1m, 1-2m, 2-3m, 3m+")]
        swell: Option<String>,

        #[arg(
            long = "wind",
            help = "Wind direction: Offshore, Cross-Off, Onshore, None"
        )]
        wind: Option<String>,

        #[arg(long = "tide", help = "Tide state: High, Mid, Low, Rising, Dropping")]
        tide: Option<String>,

        #[arg(long = "notes", help = "Free-form notes (max 160 characters)")]
        notes: Option<String>,
    },

    /// Edit an existing session (unset flags keep the stored values)
    Edit {
        /// Session id to edit
        id: i64,

        #[arg(long = "spot", help = "New spot name")]
        spot: Option<String>,

        #[arg(long = "date", help = "New session date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "board", help = "New board name from the catalog")]
        board: Option<String>,

        #[arg(
            long = "waves",
            allow_negative_numbers = true,
            help = "New wave count (0-200)"
        )]
        waves: Option<i64>,

        #[arg(
            long = "mood",
            allow_negative_numbers = true,
            help = "New mood rating (1-5)"
        )]
        mood: Option<i64>,

        #[arg(long = "swell", help = "New swell size")]
        swell: Option<String>,

        #[arg(long = "wind", help = "New wind direction")]
        wind: Option<String>,

        #[arg(long = "tide", help = "New tide state")]
        tide: Option<String>,

        #[arg(long = "notes", help = "New notes (max 160 characters)")]
        notes: Option<String>,
    },

    /// Delete a session by id
    Del {
        /// Session id to delete
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List sessions, optionally filtered
    List {
        #[arg(long = "spot", help = "Only sessions at this spot (exact match)")]
        spot: Option<String>,

        #[arg(long = "board", help = "Only sessions on this board (exact match)")]
        board: Option<String>,

        #[arg(long = "mood", help = "Only sessions with this mood rating (1-5)")]
        mood: Option<i64>,
    },

    /// Show board usage, the most-surfed spot and the mood trend
    Stats,

    /// List the board catalog or add a board
    Boards {
        #[arg(long = "add", value_name = "NAME", help = "Append a board to the catalog")]
        add: Option<String>,

        #[arg(
            long = "icon",
            value_name = "GLYPH",
            requires = "add",
            help = "Glyph shown next to the new board"
        )]
        icon: Option<String>,
    },

    /// List known spots (presets plus everything logged)
    Spots,

    /// Print or set the daily reminder time
    Reminder {
        /// New reminder time (HH:MM); prints the current one when omitted
        time: Option<String>,
    },
}
