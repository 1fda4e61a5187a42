//! Entry points: one forest, or a batch of units behind a selection.

use std::io::{self, Write};

use irlin_core::IrSource;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::policy::{LineWriter, OutputPolicy};
use crate::select::Selection;
use crate::walk::Walker;

/// Counters for one serialized unit.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Summary {
    /// Distinct nodes that received an identity.
    pub nodes: usize,
    pub live: usize,
    pub commented: usize,
    pub suppressed: usize,
    pub unsupported: usize,
}

/// Result for one unit of a batch. `summary` is `None` for units the
/// selection skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitOutcome {
    pub unit: String,
    pub summary: Option<Summary>,
}

/// Serialize one forest into `sink` with a fresh identity registry.
///
/// On error the sink may hold a partial run; callers that write files
/// should discard it.
pub fn serialize<S, W>(source: &S, sink: W, config: &Config) -> Result<Summary>
where
    S: IrSource + ?Sized,
    W: Write,
{
    let unit = source.unit();
    tracing::info!(
        unit = %unit,
        nodes = source.node_count(),
        trees = source.roots().len(),
        debug = config.debug,
        "serializing unit"
    );

    let writer = LineWriter::new(sink, OutputPolicy::new(config.debug), config.colors);
    let outcome = Walker::new(source, writer, config.max_depth).run()?;

    let summary = Summary {
        nodes: outcome.registry.len(),
        live: outcome.lines.live,
        commented: outcome.lines.commented,
        suppressed: outcome.lines.suppressed,
        unsupported: outcome.unsupported,
    };
    tracing::debug!(
        unit = %unit,
        nodes = summary.nodes,
        live = summary.live,
        commented = summary.commented,
        suppressed = summary.suppressed,
        unsupported = summary.unsupported,
        "unit serialized"
    );
    Ok(summary)
}

/// Serialize one forest into a string.
pub fn serialize_to_string<S>(source: &S, config: &Config) -> Result<String>
where
    S: IrSource + ?Sized,
{
    let mut buf = Vec::new();
    serialize(source, &mut buf, config)?;
    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Serialize every selected unit into one sink, in order.
///
/// Each unit gets its own registry. Stops at the first failing unit and
/// names it in [`Error::Unit`]; the sink may hold a partial run.
pub fn serialize_all<S, W>(
    units: &[S],
    selection: &dyn Selection,
    mut sink: W,
    config: &Config,
) -> Result<Vec<UnitOutcome>>
where
    S: IrSource,
    W: Write,
{
    let mut outcomes = Vec::with_capacity(units.len());
    for source in units {
        let unit = source.unit();
        let summary = if selection.selects(unit) {
            let summary = serialize(source, &mut sink, config).map_err(|e| Error::Unit {
                unit: unit.to_string(),
                source: Box::new(e),
            })?;
            Some(summary)
        } else {
            tracing::debug!(unit = %unit, "unit not selected");
            None
        };
        outcomes.push(UnitOutcome {
            unit: unit.qualified_name(),
            summary,
        });
    }
    sink.flush()?;
    Ok(outcomes)
}
