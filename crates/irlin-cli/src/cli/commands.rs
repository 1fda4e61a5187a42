//! Command builders for the CLI.
//!
//! `check` accepts the `dump` output flags so a `dump` command line can be
//! turned into a `check` by changing the verb; they are hidden and ignored.

use clap::Command;

use super::args::*;

/// Add hidden dump output args (for commands that don't write lines).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(output_file_arg().hide(true))
        .arg(debug_arg().hide(true))
        .arg(color_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("irlin")
        .about("Linearize IR forests into line-oriented instruction text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(check_command())
        .subcommand(opcodes_command())
}

/// Serialize every selected unit.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Serialize IR forests to instruction text")
        .override_usage(
            "\
  irlin dump <INPUT> [-o <FILE>]
  irlin dump - < forest.json",
        )
        .after_help(
            r#"EXAMPLES:
  irlin dump forest.json                  # all units to stdout
  irlin dump forest.json --debug          # keep revisits as // comments
  irlin dump forest.json -o out.txt       # write to file
  irlin dump forest.json --only String.   # units of one type"#,
        )
        .arg(input_path_arg())
        .arg(output_file_arg())
        .arg(debug_arg())
        .arg(only_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Validate units without writing lines.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate IR forests and report per-unit status")
        .after_help(
            r#"EXAMPLES:
  irlin check forest.json                 # every unit
  irlin check forest.json --only hashCode # one unit"#,
        )
        .arg(input_path_arg())
        .arg(only_arg())
        .arg(max_depth_arg())
        .arg(verbose_arg());

    with_hidden_output_args(cmd)
}

/// List opcodes and their encoding family.
pub fn opcodes_command() -> Command {
    Command::new("opcodes").about("List every opcode and how it is encoded")
}
