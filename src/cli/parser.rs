use crate::config::Config;
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for hoslog
/// CLI application to inspect and export HOS daily logs of a planned trip
#[derive(Parser)]
#[command(
    name = "hoslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Driver daily logs from a planned trip: HOS totals, route positions, log sheets",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.hoslog/hoslog.conf
    #[arg(global = true, long = "config", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
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

    /// Per-day HOS totals, miles and violations
    Summary {
        /// Trip result file (backend `routeData` JSON)
        trip: String,

        /// Only this log day (1-based)
        #[arg(long = "day")]
        day: Option<u32>,
    },

    /// Event-by-event itinerary with resolved positions
    Itinerary {
        /// Trip result file (backend `routeData` JSON)
        trip: String,

        /// Only events of this log day (1-based)
        #[arg(long = "day")]
        day: Option<u32>,
    },

    /// Map markers for stops, breaks, resets and fuel
    Markers {
        /// Trip result file (backend `routeData` JSON)
        trip: String,
    },

    /// Where a single event is on the route
    Locate {
        /// Trip result file (backend `routeData` JSON)
        trip: String,

        /// Trip-wide event index (0-based, as listed by `itinerary`)
        #[arg(long = "event")]
        event: usize,
    },

    /// Export log sheets (pdf) or the itinerary (json, csv, xlsx)
    Export {
        /// Trip result file (backend `routeData` JSON)
        trip: String,

        #[arg(long, value_enum, help = "Export format: pdf, json, csv or xlsx")]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl Cli {
    /// Configuration file in effect: `--config` or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file)
    }
}
