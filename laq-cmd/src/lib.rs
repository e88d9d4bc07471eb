//! Command implementations for the laq CLI.
//!
//! Provides subcommands for computing and inspecting the dashboard views
//! derived from a pair of pollutant readings CSVs.

use clap::{Args, Subcommand};
use laq_views::stats::POOR_AIR_THRESHOLD;

pub mod report;

/// Source file arguments shared by every subcommand.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the ozone readings CSV (bundled LA sample when omitted)
    #[arg(long)]
    pub ozone_csv: Option<String>,

    /// Path to the PM2.5 readings CSV (bundled LA sample when omitted)
    #[arg(long)]
    pub pm25_csv: Option<String>,
}

/// Selection arguments shared by the view-producing subcommands.
#[derive(Args)]
pub struct SelectionArgs {
    /// Calendar month to inspect, e.g. 2024-01 (latest-day snapshot when
    /// omitted)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Comma-separated pollutants to include: ozone,pm2.5 (all when
    /// omitted)
    #[arg(short, long)]
    pub pollutants: Option<String>,

    /// AQI threshold for the poor air quality summary
    #[arg(short, long, default_value_t = POOR_AIR_THRESHOLD)]
    pub threshold: f64,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the full view payload (map, trends, statistics) as JSON
    Views {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the poor air quality summary lines for a selection
    Summary {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List the months selectable for these sources
    Months {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Views { sources, selection } => report::run_views(&sources, &selection),
        Command::Summary { sources, selection } => report::run_summary(&sources, &selection),
        Command::Months { sources } => report::run_months(&sources),
    }
}
