//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! visible or hidden (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// JSON input file, `-` for stdin (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON forest file, or - for stdin")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file (replaced only if every unit succeeds)")
}

/// Keep revisits and redundant instructions as comments (--debug).
pub fn debug_arg() -> Arg {
    Arg::new("debug")
        .long("debug")
        .action(ArgAction::SetTrue)
        .help("Write revisited and redundant instructions as // comments")
}

/// Unit name filter (--only), repeatable.
pub fn only_arg() -> Arg {
    Arg::new("only")
        .long("only")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Only units whose Type.member contains NAME (repeatable)")
}

/// Traversal depth limit (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .default_value("1024")
        .value_parser(value_parser!(u32))
        .help("Deepest tree nesting accepted")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output (stdout only)")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
}
