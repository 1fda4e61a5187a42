use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use irlin_core::Forest;
use irlin_emit::{Config, NameFilter, UnitOutcome, serialize_all};
use tempfile::NamedTempFile;

use super::input::load_units;
use super::{CommandError, exit_with, logging};

pub struct DumpArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub debug: bool,
    pub only: Vec<String>,
    pub max_depth: u32,
    pub color: bool,
    pub verbose: u8,
}

pub fn run(args: DumpArgs) {
    logging::init(args.verbose);
    if let Err(err) = dump(&args) {
        exit_with(err);
    }
}

fn dump(args: &DumpArgs) -> Result<(), CommandError> {
    let units = load_units(&args.input)?;
    let filter = NameFilter::new(args.only.iter().cloned());
    let config = Config::new()
        .debug(args.debug)
        .max_depth(args.max_depth)
        .colored(args.color);

    let outcomes = match &args.output {
        Some(path) => write_file(path, &units, &filter, &config)?,
        None => write_stream(io::stdout().lock(), &units, &filter, &config)?,
    };

    if !units.is_empty() && outcomes.iter().all(|o| o.summary.is_none()) {
        tracing::warn!(filter = ?args.only, "no unit matched");
    }
    Ok(())
}

/// Serialize into memory and hand the bytes to `out` once every unit
/// succeeded. A failed run writes nothing.
pub fn write_stream(
    mut out: impl Write,
    units: &[Forest],
    filter: &NameFilter,
    config: &Config,
) -> Result<Vec<UnitOutcome>, CommandError> {
    let mut buf = Vec::new();
    let outcomes = serialize_all(units, filter, &mut buf, config)?;
    out.write_all(&buf)
        .and_then(|()| out.flush())
        .map_err(|source| CommandError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
    Ok(outcomes)
}

/// Serialize into a temporary file next to `path` and move it into place
/// once every unit succeeded.
pub fn write_file(
    path: &Path,
    units: &[Forest],
    filter: &NameFilter,
    config: &Config,
) -> Result<Vec<UnitOutcome>, CommandError> {
    let write_err = |source: io::Error| CommandError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut out = BufWriter::new(NamedTempFile::new_in(dir).map_err(write_err)?);
    let outcomes = serialize_all(units, filter, &mut out, config)?;
    out.flush().map_err(write_err)?;

    let tmp = out.into_inner().map_err(|e| write_err(e.into_error()))?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    tracing::info!(path = %path.display(), units = outcomes.len(), "output written");
    Ok(outcomes)
}
