//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` pulls the relevant fields; hidden ones given on the
//!   command line are only recorded so the command can warn about them
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use clap::parser::ValueSource;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;

pub struct DumpParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub debug: bool,
    pub only: Vec<String>,
    pub max_depth: u32,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            debug: m.get_flag("debug"),
            only: only(m),
            max_depth: max_depth(m),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        // Files never get escape codes.
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            input: p.input,
            output: p.output,
            debug: p.debug,
            only: p.only,
            max_depth: p.max_depth,
            color,
            verbose: p.verbose,
        }
    }
}

pub struct CheckParams {
    pub input: PathBuf,
    pub only: Vec<String>,
    pub max_depth: u32,
    pub verbose: u8,
    /// Dump-only flags the user passed anyway.
    pub ignored: Vec<&'static str>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input_path(m),
            only: only(m),
            max_depth: max_depth(m),
            verbose: m.get_count("verbose"),
            ignored: given_on_command_line(
                m,
                &[
                    ("output", "--output"),
                    ("debug", "--debug"),
                    ("color", "--color"),
                ],
            ),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            only: p.only,
            max_depth: p.max_depth,
            verbose: p.verbose,
            ignored: p.ignored,
        }
    }
}

fn given_on_command_line(
    m: &ArgMatches,
    args: &[(&str, &'static str)],
) -> Vec<&'static str> {
    args.iter()
        .filter(|(id, _)| m.value_source(id) == Some(ValueSource::CommandLine))
        .map(|&(_, flag)| flag)
        .collect()
}

fn input_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn only(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("only")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn max_depth(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("max_depth")
        .copied()
        .unwrap_or(irlin_emit::DEFAULT_MAX_DEPTH)
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
