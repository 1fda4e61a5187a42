use std::fs;
use std::io::{self, Read};
use std::path::Path;

use irlin_core::{Forest, parse_units};

use super::CommandError;

/// Load every unit of a JSON input. `-` reads stdin.
pub fn load_units(path: &Path) -> Result<Vec<Forest>, CommandError> {
    let text = if path.as_os_str() == "-" {
        read_text(io::stdin().lock(), path)?
    } else {
        fs::read_to_string(path).map_err(|source| CommandError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    let units = parse_units(&text)?;
    tracing::debug!(input = %path.display(), units = units.len(), "input loaded");
    Ok(units)
}

pub fn read_text(mut reader: impl Read, path: &Path) -> Result<String, CommandError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|source| CommandError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(buf)
}
