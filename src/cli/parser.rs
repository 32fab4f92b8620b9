use crate::models::Preset;
use clap::{Parser, Subcommand};

/// Command-line interface definition for otrate
/// CLI application to compute daily pay rates from school bell schedules
#[derive(Parser)]
#[command(
    name = "otrate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute occasional-teacher daily pay rates from school bell schedules",
    long_about = None
)]
pub struct Cli {
    /// Override the bell-schedule file (JSON)
    #[arg(global = true, long = "schedules")]
    pub schedules: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and a starter schedule file
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

    /// Calculate the pay point and daily rate for an assignment
    Calc {
        /// School name, as listed by `otrate schools`
        school: String,

        #[arg(long = "in", help = "Assignment start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "Assignment end time (HH:MM)")]
        end: Option<String>,

        #[arg(
            long,
            value_enum,
            help = "Fill missing times from a preset (default: full-day)"
        )]
        preset: Option<Preset>,

        #[arg(long, help = "Base daily rate (overrides the configured one)")]
        rate: Option<f64>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,

        #[arg(long, help = "Also draw the assignment on the school-day timeline")]
        timeline: bool,
    },

    /// Show a school's bell schedule
    Info {
        school: String,
    },

    /// List known schools
    Schools {
        #[arg(long, short, help = "Show the best matches for a partial name")]
        search: Option<String>,
    },

    /// Draw a school's day with an optional selection
    Timeline {
        school: String,

        #[arg(long = "in", help = "Selection start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "Selection end time (HH:MM)")]
        end: Option<String>,

        #[arg(long, help = "Track width in columns")]
        width: Option<usize>,
    },
}
