use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for shiftgrid
/// Lays out solver assignments on a weekly day/hour grid
#[derive(Parser)]
#[command(
    name = "shiftgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a weekly staff schedule: overnight shifts are split across midnight",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file written, no operation log)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Hour-by-day grid for the terminal
    Text,
    /// Standalone SVG document
    Svg,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default days and shifts
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// List the configured shifts and their hour ranges
    Shifts,

    /// Render the weekly layout of a solver result
    Show {
        /// Solver result (JSON)
        #[arg(long, short, value_name = "FILE")]
        input: String,

        /// Only show the shifts of this person (exact name)
        #[arg(long, short)]
        person: Option<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: ShowFormat,

        /// Write to this file (absolute path) instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Disable ANSI colors in text output
        #[arg(long = "no-color")]
        no_color: bool,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the day × shift table, hired staff and objective of a solver result
    Table {
        /// Solver result (JSON)
        #[arg(long, short, value_name = "FILE")]
        input: String,
    },

    /// Export the day/shift/assigned table
    Export {
        /// Solver result (JSON)
        #[arg(long, short, value_name = "FILE")]
        input: String,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Output format; inferred from the file extension when omitted
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the operation log
    Log {
        #[arg(long = "print", help = "Print every line of the operation log")]
        print: bool,
    },
}
