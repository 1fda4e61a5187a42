use indoc::indoc;

use crate::{DataType, ForestError, LoadError, NodeId, Opcode, parse_units};

#[test]
fn parses_shared_nodes() {
    let json = indoc! {r#"
        {
          "units": [{
            "method": { "declaring_type": "Foo", "name": "bar", "descriptor": "(I)V" },
            "nodes": [
              { "op": "iload", "type": "Int32", "symbol": "x" },
              { "op": "iand", "type": "Int32", "children": [0, 0] },
              { "op": "return" }
            ],
            "trees": [1, 2]
          }]
        }
    "#};

    let units = parse_units(json).unwrap();

    assert_eq!(units.len(), 1);
    let forest = &units[0];
    assert_eq!(forest.unit().descriptor, "(I)V");
    assert_eq!(forest.roots(), &[NodeId::from_raw(1), NodeId::from_raw(2)]);

    let and = forest.node(NodeId::from_raw(1));
    assert_eq!(and.opcode, Opcode::IAnd);
    assert_eq!(and.children, vec![NodeId::from_raw(0), NodeId::from_raw(0)]);

    let ret = forest.node(NodeId::from_raw(2));
    assert_eq!(ret.data_type, DataType::NoType);
    assert!(ret.children.is_empty());
}

#[test]
fn parses_call_and_branch_metadata() {
    let json = indoc! {r#"
        {
          "units": [{
            "method": { "declaring_type": "A", "name": "m", "descriptor": "()V" },
            "nodes": [
              { "op": "goto", "target": 1 },
              { "op": "BBStart", "block": 3 },
              { "op": "calli", "type": "Int32", "call": { "declaring_type": "B", "name": "f", "descriptor": "()I" } },
              { "op": "lconst", "type": "Int64", "value": -7 }
            ],
            "trees": [0, 1]
          }]
        }
    "#};

    let units = parse_units(json).unwrap();
    let forest = &units[0];

    assert_eq!(forest.node(NodeId::from_raw(0)).branch_target, Some(NodeId::from_raw(1)));
    assert_eq!(forest.node(NodeId::from_raw(1)).block, Some(3));
    let call = forest.node(NodeId::from_raw(2)).call_target.as_ref().unwrap();
    assert_eq!(call.name, "f");
    assert_eq!(forest.node(NodeId::from_raw(3)).literal, Some(-7));
}

#[test]
fn rejects_unknown_opcode() {
    let json = r#"{ "units": [{ "method": { "declaring_type": "A", "name": "m", "descriptor": "()V" },
        "nodes": [{ "op": "frobnicate" }] }] }"#;

    let err = parse_units(json).unwrap_err();

    assert!(matches!(err, LoadError::Json(_)));
    assert!(err.to_string().contains("unknown opcode `frobnicate`"));
}

#[test]
fn rejects_unknown_field() {
    let json = r#"{ "units": [{ "method": { "declaring_type": "A", "name": "m", "descriptor": "()V" },
        "nodes": [{ "op": "return", "colour": "red" }] }] }"#;

    assert!(matches!(parse_units(json), Err(LoadError::Json(_))));
}

#[test]
fn reports_forest_errors_with_unit() {
    let json = r#"{ "units": [
        { "method": { "declaring_type": "A", "name": "ok", "descriptor": "()V" } },
        { "method": { "declaring_type": "A", "name": "bad", "descriptor": "()V" },
          "nodes": [{ "op": "iand", "type": "Int32", "children": [0, 0] }] }
    ] }"#;

    let err = parse_units(json).unwrap_err();

    match &err {
        LoadError::Forest { index, unit, source } => {
            assert_eq!(*index, 1);
            assert_eq!(unit, "A.bad");
            assert!(matches!(source, ForestError::ForwardChild { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "unit 1 (A.bad): node n0: child n0 is not defined before its parent"
    );
}

#[test]
fn empty_unit_has_no_trees() {
    let json = r#"{ "units": [{ "method": { "declaring_type": "A", "name": "m", "descriptor": "()V" } }] }"#;

    let units = parse_units(json).unwrap();

    assert!(units[0].is_empty());
    assert!(units[0].roots().is_empty());
}
