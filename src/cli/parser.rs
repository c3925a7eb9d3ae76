use crate::core::export::ExportFormat;
use crate::models::widget::WidgetSize;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fittrack
#[derive(Parser)]
#[command(
    name = "fittrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal fitness tracker: log workouts, hydration, meditation, fasting and measurements",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Manage dashboard widgets
    Widget {
        #[command(subcommand)]
        action: WidgetAction,
    },

    /// Show the dashboard
    Dashboard,

    /// Show all derived statistics
    Stats {
        #[arg(long, help = "Reference day (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },

    /// Log workout repetitions
    Workout {
        #[command(subcommand)]
        action: WorkoutAction,
    },

    /// Workout session timer
    Session {
        #[command(subcommand)]
        action: TimerAction,
    },

    /// Fasting window
    Fasting {
        #[command(subcommand)]
        action: FastingAction,
    },

    /// Log water intake (ounces)
    Hydration {
        #[command(subcommand)]
        action: AmountAction,
    },

    /// Log a meditation session (minutes)
    Meditation {
        #[command(subcommand)]
        action: AmountAction,
    },

    /// Log cardio (minutes)
    Cardio {
        #[command(subcommand)]
        action: AmountAction,
    },

    /// Mark or unmark rest days
    Recovery {
        #[command(subcommand)]
        action: RecoveryAction,
    },

    /// Record supplements taken or skipped
    Supplement {
        #[command(subcommand)]
        action: SupplementAction,
    },

    /// Record a body measurement
    Measure {
        /// Measurement kind (weight, waist, chest, ...)
        kind: String,

        /// Measured value
        value: f64,

        #[arg(long, help = "Unit (defaults to the configured measurement unit)")]
        unit: Option<String>,

        #[arg(long, help = "Date (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },

    /// Export tracked data
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WidgetAction {
    /// List widgets in dashboard order
    List {
        #[arg(long, help = "Include disabled widgets")]
        all: bool,
    },

    /// Flip a widget between enabled and disabled
    Toggle { id: String },

    /// Enable a widget
    Enable { id: String },

    /// Disable a widget
    Disable { id: String },

    /// Move a widget to a new position (0-based)
    Move { id: String, position: u32 },

    /// Change a widget's title or size
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, value_enum)]
        size: Option<WidgetSize>,
    },

    /// Restore the default layout
    Reset,
}

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Add repetitions to the day's count
    Add {
        exercise: String,
        reps: u32,

        #[arg(long, help = "Date (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },

    /// Overwrite the day's count (0 clears it)
    Set {
        exercise: String,
        reps: u32,

        #[arg(long, help = "Date (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TimerAction {
    Start,
    Stop,
    Status,
}

#[derive(Subcommand)]
pub enum FastingAction {
    Start {
        #[arg(long, help = "Target length in hours (defaults to the configured target)")]
        hours: Option<u32>,
    },
    Stop,
    Status,
}

#[derive(Subcommand)]
pub enum AmountAction {
    Add {
        amount: f64,

        #[arg(long, help = "Date (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum RecoveryAction {
    Mark {
        #[arg(long, help = "Date (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },
    Unmark {
        #[arg(long, help = "Date (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SupplementAction {
    Take {
        item: String,

        #[arg(long, help = "Date (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },
    Skip {
        item: String,

        #[arg(long, help = "Date (YYYY-MM-DD, today, yesterday)")]
        date: Option<String>,
    },
}
