use std::fmt::Write;

use irlin_core::Opcode;
use irlin_emit::Family;

pub fn run() {
    print!("{}", render());
}

/// One `<opcode>  <family>` row per opcode, then the coverage count.
pub fn render() -> String {
    let width = Opcode::ALL
        .iter()
        .map(|op| op.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let mut encoded = 0;
    for &op in Opcode::ALL {
        let family = Family::of(op);
        if family.is_supported() {
            encoded += 1;
        }
        let _ = writeln!(out, "{:width$}  {}", op.name(), family.name());
    }
    let _ = writeln!(out, "\n{encoded}/{} opcodes encoded", Opcode::ALL.len());
    out
}
