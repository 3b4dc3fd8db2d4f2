use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabits
/// Track habits to start or cut on a weekly grid, stored in SQLite
#[derive(Parser)]
#[command(
    name = "rhabits",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small habit tracker: define habits to start or cut and tick them off week by week",
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
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add, list or delete habits
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Show the weekly grid
    Table {
        /// Any date inside the week to show (YYYY-MM-DD); defaults to the current week.
        /// Unparsable values silently fall back to the current week.
        #[arg(long = "week", short = 'w')]
        week: Option<String>,

        /// Print the grid as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Flip the completion state of a habit on a given day
    Toggle {
        /// Habit id (see `habit list`)
        habit_id: i64,

        /// Day to toggle (YYYY-MM-DD)
        date: String,
    },

    /// Start the web interface
    Serve {
        /// Listen address, e.g. 127.0.0.1:5000 (overrides the config file)
        #[arg(long = "bind", short = 'b')]
        bind: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,

        /// Habit type: start (build it up) or cut (give it up)
        #[arg(long = "type", short = 't')]
        kind: String,
    },

    /// List habits, newest first
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a habit and all of its checks
    Del {
        /// Habit id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
