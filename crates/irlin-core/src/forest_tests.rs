use crate::{DataType, Forest, ForestError, IrSource, MethodRef, Node, NodeId, Opcode};

fn unit() -> MethodRef {
    MethodRef::new("Foo", "bar", "()V")
}

#[test]
fn builder_assigns_arena_order() {
    let mut b = Forest::builder(unit());
    let a = b.push(Node::new(Opcode::IConst, DataType::Int32).with_literal(1));
    let c = b.push(Node::new(Opcode::IConst, DataType::Int32).with_literal(1));
    let add = b.tree(Node::new(Opcode::IAdd, DataType::Int32).with_children([a, c]));
    let forest = b.build();

    assert_eq!(a, NodeId::from_raw(0));
    assert_eq!(c, NodeId::from_raw(1));
    assert_ne!(a, c, "structurally equal nodes keep distinct handles");
    assert_eq!(forest.roots(), &[add]);
    assert_eq!(forest.len(), 3);
    assert_eq!(forest.node(add).children, vec![a, c]);
}

#[test]
fn builder_root_marks_existing_node() {
    let mut b = Forest::builder(unit());
    let ret = b.push(Node::new(Opcode::Return, DataType::NoType));
    b.root(ret).root(ret);
    let forest = b.build();

    assert_eq!(forest.roots(), &[ret, ret]);
}

#[test]
#[should_panic(expected = "ForestBuilder")]
fn builder_rejects_unknown_child() {
    let mut b = Forest::builder(unit());
    b.push(Node::new(Opcode::IAdd, DataType::Int32).with_children([NodeId::from_raw(3)]));
}

#[test]
#[should_panic(expected = "branch target")]
fn builder_rejects_forward_branch_target() {
    let mut b = Forest::builder(unit());
    b.push(Node::new(Opcode::Goto, DataType::NoType).with_branch_target(NodeId::from_raw(1)));
}

#[test]
fn from_parts_accepts_forward_branch_target() {
    let nodes = vec![
        Node::new(Opcode::Goto, DataType::NoType).with_branch_target(NodeId::from_raw(1)),
        Node::new(Opcode::BBStart, DataType::NoType).with_block(4),
    ];
    let roots = vec![NodeId::from_raw(0), NodeId::from_raw(1)];

    let forest = Forest::from_parts(unit(), nodes, roots).unwrap();

    assert_eq!(forest.node_count(), 2);
}

#[test]
fn from_parts_rejects_self_reference() {
    let nodes = vec![Node::new(Opcode::IAdd, DataType::Int32).with_children([NodeId::from_raw(0)])];

    let err = Forest::from_parts(unit(), nodes, vec![]).unwrap_err();

    assert_eq!(
        err,
        ForestError::ForwardChild {
            node: NodeId::from_raw(0),
            child: NodeId::from_raw(0),
        }
    );
    assert_eq!(err.to_string(), "node n0: child n0 is not defined before its parent");
}

#[test]
fn from_parts_rejects_dangling_child() {
    let nodes = vec![Node::new(Opcode::NullChk, DataType::Address).with_children([NodeId::from_raw(9)])];

    let err = Forest::from_parts(unit(), nodes, vec![]).unwrap_err();

    assert!(matches!(err, ForestError::DanglingChild { .. }));
}

#[test]
fn from_parts_rejects_dangling_target_and_root() {
    let goto = vec![Node::new(Opcode::Goto, DataType::NoType).with_branch_target(NodeId::from_raw(5))];
    let err = Forest::from_parts(unit(), goto, vec![]).unwrap_err();
    assert!(matches!(err, ForestError::DanglingBranchTarget { .. }));

    let ret = vec![Node::new(Opcode::Return, DataType::NoType)];
    let err = Forest::from_parts(unit(), ret, vec![NodeId::from_raw(1)]).unwrap_err();
    assert_eq!(err, ForestError::DanglingRoot(NodeId::from_raw(1)));
}

#[test]
fn ir_source_through_reference() {
    fn count<S: IrSource>(source: S) -> usize {
        source.roots().len()
    }

    let mut b = Forest::builder(unit());
    b.tree(Node::new(Opcode::Return, DataType::NoType));
    let forest = b.build();

    assert_eq!(count(&forest), 1);
    assert_eq!(IrSource::unit(&forest).qualified_name(), "Foo.bar");
}

#[test]
fn method_ref_display() {
    let m = MethodRef::new("java/lang/Object", "hashCode", "()I");
    assert_eq!(m.to_string(), "java/lang/Object.hashCode()I");
    assert_eq!(m.qualified_name(), "java/lang/Object.hashCode");
}
