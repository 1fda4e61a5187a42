use irlin_core::Opcode;

use super::logging::level;
use super::opcodes::render;

#[test]
fn one_row_per_opcode() {
    let out = render();

    assert_eq!(out.lines().count(), Opcode::ALL.len() + 2);
    assert!(out.lines().any(|l| l.starts_with("iconst ") && l.ends_with("  constant")));
    assert!(out.lines().any(|l| l.starts_with("NULLCHK ") && l.ends_with("  check")));
    assert!(out.lines().any(|l| l.starts_with("treetop ") && l.ends_with("  unsupported")));
    assert!(out.ends_with("\n34/48 opcodes encoded\n"));
}

#[test]
fn columns_are_aligned() {
    let out = render();

    // widest name is compressedRefs
    for line in out.lines().take(Opcode::ALL.len()) {
        assert_eq!(&line[14..16], "  ", "{line}");
        assert_ne!(line.as_bytes()[16], b' ', "{line}");
    }
}

#[test]
fn verbosity_levels() {
    assert_eq!(level(0), "warn");
    assert_eq!(level(1), "info");
    assert_eq!(level(2), "debug");
    assert_eq!(level(9), "trace");
}
