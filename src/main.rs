use clap::Parser;
use climate_report::cli::{run, Cli};
use climate_report::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
