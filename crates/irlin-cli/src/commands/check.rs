use std::io::{self, Write};
use std::path::PathBuf;

use irlin_core::Forest;
use irlin_emit::{Config, NameFilter, Selection, Summary, serialize};

use super::input::load_units;
use super::{CommandError, exit_with, logging};

pub struct CheckArgs {
    pub input: PathBuf,
    pub only: Vec<String>,
    pub max_depth: u32,
    pub verbose: u8,
    pub ignored: Vec<&'static str>,
}

pub fn run(args: CheckArgs) {
    logging::init(args.verbose);
    for flag in &args.ignored {
        tracing::warn!(flag, "ignored by check");
    }
    let result = load_units(&args.input).and_then(|units| {
        let filter = NameFilter::new(args.only.iter().cloned());
        let config = Config::new().max_depth(args.max_depth);
        check_units(&units, &filter, &config, io::stdout().lock())
    });
    if let Err(err) = result {
        exit_with(err);
    }
}

/// Serialize each selected unit into a null sink and print one status line
/// per unit. Stops at the first failing unit.
pub fn check_units(
    units: &[Forest],
    filter: &NameFilter,
    config: &Config,
    mut report: impl Write,
) -> Result<(), CommandError> {
    let report_err = |source: io::Error| CommandError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    };

    for forest in units {
        let unit = forest.unit();
        if !filter.selects(unit) {
            continue;
        }
        let summary = serialize(forest, io::sink(), config).map_err(|source| {
            CommandError::Unit {
                unit: unit.to_string(),
                source,
            }
        })?;
        writeln!(report, "ok {unit}: {}", status(&summary)).map_err(report_err)?;
    }
    Ok(())
}

fn status(summary: &Summary) -> String {
    let mut status = format!("{} nodes, {} lines", summary.nodes, summary.live);
    if summary.unsupported > 0 {
        status.push_str(&format!(", {} unsupported", summary.unsupported));
    }
    status
}
