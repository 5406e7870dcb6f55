use std::io::{self, Write};

use tracing::Level;

use crate::cli::args::{Cli, Commands};
use crate::cli::menu::run_menu;
use crate::cli::render::{render_lookup, render_pivot, render_summary};
use crate::error::Result;
use crate::snapshot::DatasetSnapshot;

pub fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    // One read per run; every report below is a pure function of this snapshot.
    let snapshot = DatasetSnapshot::load(&cli.dataset)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_menu(&snapshot, &mut input, &mut out)?;
        }

        Commands::Lookup { year, source } => {
            let outcome = snapshot.lookup(year, &source)?;
            writeln!(out, "{}", render_lookup(&outcome, year, &source))?;
        }

        Commands::Summary { measure, json } => {
            let summary = snapshot.summarize(measure)?;
            if json {
                serde_json::to_writer_pretty(&mut out, &summary)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", render_summary(&summary))?;
            }
        }

        Commands::Pivot { measure } => {
            let series = snapshot.clean(measure)?;
            writeln!(out, "{}", render_pivot(&series.pivot()))?;
        }
    }

    Ok(())
}
