use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::Measure;

#[derive(Parser)]
#[command(name = "climate-report")]
#[command(about = "Reporting tool for national temperature and anomaly timeseries")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Dataset CSV file (year, source, temperature, anomaly)")]
    pub dataset: PathBuf,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu of reports (default)
    Menu,

    /// Temperature for a single year and source
    Lookup {
        #[arg(short, long)]
        year: i64,

        #[arg(short, long)]
        source: String,
    },

    /// Per-source summary statistics (mean, std, max, min)
    Summary {
        #[arg(short, long, value_enum, default_value_t = Measure::Temperature)]
        measure: Measure,

        #[arg(long, default_value = "false", help = "Emit JSON instead of a table")]
        json: bool,
    },

    /// Year-by-source table of one measure
    Pivot {
        #[arg(short, long, value_enum, default_value_t = Measure::Temperature)]
        measure: Measure,
    },
}
