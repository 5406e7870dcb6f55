use std::io::{BufRead, Write};

use crate::cli::render::{render_lookup, render_pivot, render_summary};
use crate::error::Result;
use crate::models::Measure;
use crate::snapshot::DatasetSnapshot;

const MENU_OPTIONS: [&str; 6] = [
    "Temperature report - single year",
    "Summary of temperature statistics",
    "Summary of anomaly statistics",
    "Temperature table by year and source",
    "Anomaly table by year and source",
    "Exit",
];

/// Interactive menu loop over a loaded snapshot.
///
/// All validation happens here against the reference sets, with re-prompts
/// on bad input; the core is only ever called with values it can answer.
pub fn run_menu<R: BufRead, W: Write>(
    snapshot: &DatasetSnapshot,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        let choice = select_option(input, output)?;
        match choice {
            0 => {
                if let Some((year, source)) = prompt_lookup_key(snapshot, input, output)? {
                    let outcome = snapshot.lookup(year, &source)?;
                    writeln!(output, "{}", render_lookup(&outcome, year, &source))?;
                }
            }
            1 => {
                let summary = snapshot.summarize(Measure::Temperature)?;
                writeln!(output, "{}", render_summary(&summary))?;
            }
            2 => {
                let summary = snapshot.summarize(Measure::Anomaly)?;
                writeln!(output, "{}", render_summary(&summary))?;
            }
            3 => {
                let series = snapshot.clean(Measure::Temperature)?;
                writeln!(output, "{}", render_pivot(&series.pivot()))?;
            }
            4 => {
                let series = snapshot.clean(Measure::Anomaly)?;
                writeln!(output, "{}", render_pivot(&series.pivot()))?;
            }
            _ => {
                writeln!(output, "Bye")?;
                return Ok(());
            }
        }
    }
}

/// Print the menu and read a selection, re-prompting until it is valid.
fn select_option<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        writeln!(output, "[{i}] {option}")?;
    }

    loop {
        write!(output, "0-{}:: ", MENU_OPTIONS.len() - 1)?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            // EOF on stdin reads as exit.
            None => return Ok(MENU_OPTIONS.len() - 1),
        };
        match line.trim().parse::<usize>() {
            Ok(choice) if choice < MENU_OPTIONS.len() => return Ok(choice),
            _ => writeln!(output, "{} is not a valid option\nTry again", line.trim())?,
        }
    }
}

/// Prompt for a (year, source) pair validated against the reference sets.
///
/// Returns None when the dataset has no usable years to offer, or on EOF.
fn prompt_lookup_key<R: BufRead, W: Write>(
    snapshot: &DatasetSnapshot,
    input: &mut R,
    output: &mut W,
) -> Result<Option<(i64, String)>> {
    let (min_year, max_year) = match snapshot.reference().year_range() {
        Some(range) => range,
        None => {
            writeln!(output, "The dataset contains no usable years.")?;
            return Ok(None);
        }
    };

    let year = loop {
        write!(output, "Enter a year between {min_year} and {max_year}: ")?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.trim().parse::<i64>() {
            Ok(year) if snapshot.reference().contains_year(year) => break year,
            Ok(year) => writeln!(
                output,
                "Error: Year {year} not found in the data. Please enter a year from {min_year} to {max_year}."
            )?,
            Err(_) => writeln!(output, "Error: Invalid year. Please enter a numerical year.")?,
        }
    };

    let source = loop {
        write!(output, "Enter a single source name: ")?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };
        let trimmed = line.trim();
        if snapshot.reference().contains_source(trimmed) {
            break trimmed.to_string();
        }
        writeln!(
            output,
            "Error: The source name '{trimmed}' is not found in the data. Please enter a valid source."
        )?;
    };

    Ok(Some((year, source)))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordStore;
    use std::io::Cursor;

    fn snapshot() -> DatasetSnapshot {
        let store = RecordStore::new(
            vec![
                "year".into(),
                "source".into(),
                "temperature".into(),
                "anomaly".into(),
            ],
            vec![
                vec!["1900".into(), "GISS".into(), "13.5".into(), "-0.2".into()],
                vec!["1901".into(), "HadCRUT".into(), "14.0".into(), "0.1".into()],
            ],
        );
        DatasetSnapshot::from_store(store).unwrap()
    }

    fn run_with_input(input: &str) -> String {
        let snapshot = snapshot();
        let mut reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        run_menu(&snapshot, &mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_option() {
        let output = run_with_input("5\n");
        assert!(output.contains("[0] Temperature report - single year"));
        assert!(output.contains("Bye"));
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let output = run_with_input("9\n5\n");
        assert!(output.contains("9 is not a valid option"));
        assert!(output.contains("Bye"));
    }

    #[test]
    fn test_lookup_flow_with_reprompts() {
        // Bad year, unknown year, good year; unknown source, good source.
        let output = run_with_input("0\nabc\n1950\n1900\nNOAA\nGISS\n5\n");

        assert!(output.contains("Error: Invalid year."));
        assert!(output.contains("Year 1950 not found in the data"));
        assert!(output.contains("'NOAA' is not found in the data"));
        assert!(output.contains("Temperature for source 'GISS' in year 1900: 13.5"));
    }

    #[test]
    fn test_summary_option_prints_table() {
        let output = run_with_input("1\n5\n");
        assert!(output.contains("source"));
        assert!(output.contains("GISS"));
        assert!(output.contains("HadCRUT"));
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let output = run_with_input("");
        assert!(output.contains("Bye"));
    }
}
