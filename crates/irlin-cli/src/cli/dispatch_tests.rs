//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Hidden flags: check accepts dump's output flags and records them
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, opcodes_command};
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "forest.json"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.input, PathBuf::from("forest.json"));
    assert_eq!(params.output, None);
    assert!(!params.debug);
    assert!(params.only.is_empty());
    assert_eq!(params.max_depth, irlin_emit::DEFAULT_MAX_DEPTH);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.verbose, 0);
}

#[test]
fn dump_all_flags() {
    let m = dump_command()
        .try_get_matches_from([
            "dump",
            "-",
            "-o",
            "out.txt",
            "--debug",
            "--only",
            "String.",
            "--only",
            "Vector.add",
            "--max-depth",
            "64",
            "--color",
            "always",
            "-vv",
        ])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.input, PathBuf::from("-"));
    assert_eq!(params.output, Some(PathBuf::from("out.txt")));
    assert!(params.debug);
    assert_eq!(params.only, ["String.", "Vector.add"]);
    assert_eq!(params.max_depth, 64);
    assert_eq!(params.color, ColorChoice::Always);
    assert_eq!(params.verbose, 2);
}

#[test]
fn dump_to_file_is_never_colored() {
    let m = dump_command()
        .try_get_matches_from(["dump", "forest.json", "-o", "out.txt", "--color", "always"])
        .unwrap();

    let args: DumpArgs = DumpParams::from_matches(&m).into();

    assert!(!args.color);
}

#[test]
fn dump_to_stdout_honors_color() {
    let m = dump_command()
        .try_get_matches_from(["dump", "forest.json", "--color", "always"])
        .unwrap();

    let args: DumpArgs = DumpParams::from_matches(&m).into();

    assert!(args.color);
}

#[test]
fn dump_requires_input() {
    let result = dump_command().try_get_matches_from(["dump"]);

    assert!(result.is_err());
}

#[test]
fn dump_rejects_bad_depth() {
    let result = dump_command().try_get_matches_from(["dump", "f.json", "--max-depth", "-1"]);

    assert!(result.is_err());
}

#[test]
fn check_accepts_dump_flags() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from([
        "check",
        "forest.json",
        "-o",
        "out.txt",
        "--debug",
        "--color",
        "never",
        "--only",
        "hashCode",
    ]);
    assert!(
        result.is_ok(),
        "check should accept dump flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.input, PathBuf::from("forest.json"));
    assert_eq!(params.only, ["hashCode"]);
    assert_eq!(params.ignored, ["--output", "--debug", "--color"]);
}

#[test]
fn check_records_only_given_dump_flags() {
    let m = check_command()
        .try_get_matches_from(["check", "forest.json", "--debug"])
        .unwrap();

    let args: CheckArgs = CheckParams::from_matches(&m).into();

    assert_eq!(args.ignored, ["--debug"]);
}

#[test]
fn check_help_hides_dump_flags() {
    let help = check_command().render_help().to_string();

    assert!(help.contains("--only"));
    assert!(!help.contains("--output"));
    assert!(!help.contains("--debug"));
    assert!(!help.contains("--color"));
}

#[test]
fn dump_help_shows_output_flags() {
    let help = dump_command().render_help().to_string();

    assert!(help.contains("--output"));
    assert!(help.contains("--debug"));
    assert!(help.contains("--max-depth"));
}

#[test]
fn opcodes_takes_no_args() {
    assert!(opcodes_command().try_get_matches_from(["opcodes"]).is_ok());
    assert!(
        opcodes_command()
            .try_get_matches_from(["opcodes", "x"])
            .is_err()
    );
}

#[test]
fn subcommand_required() {
    let result = build_cli().try_get_matches_from(["irlin"]);

    assert!(result.is_err());
}

#[test]
fn max_depth_default_matches_library() {
    let m = check_command()
        .try_get_matches_from(["check", "f.json"])
        .unwrap();

    let params = CheckParams::from_matches(&m);

    assert_eq!(params.max_depth, irlin_emit::DEFAULT_MAX_DEPTH);
    assert!(params.ignored.is_empty());
}
