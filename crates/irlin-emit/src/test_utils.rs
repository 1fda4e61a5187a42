//! Test helpers: forest fixtures and a reference walk.

use irlin_core::{Colors, DataType, Forest, ForestBuilder, MethodRef, Node, NodeId, Opcode};

use crate::{Config, IdentityRegistry, LineWriter, OutputPolicy, encode, serialize_to_string};

pub fn method() -> MethodRef {
    MethodRef::new("Foo", "bar", "()V")
}

pub fn builder() -> ForestBuilder {
    Forest::builder(method())
}

/// Serialize with default settings; panics on error.
pub fn render(forest: &Forest) -> String {
    serialize_to_string(forest, &Config::new()).expect("serialization failed")
}

/// Serialize in debug mode; panics on error.
pub fn render_debug(forest: &Forest) -> String {
    serialize_to_string(forest, &Config::new().debug(true)).expect("serialization failed")
}

pub fn iload(b: &mut ForestBuilder, symbol: &str) -> NodeId {
    b.push(Node::new(Opcode::ILoad, DataType::Int32).with_symbol(symbol))
}

pub fn aload(b: &mut ForestBuilder, symbol: &str) -> NodeId {
    b.push(Node::new(Opcode::ALoad, DataType::Address).with_symbol(symbol))
}

pub fn iconst(b: &mut ForestBuilder, value: i64) -> NodeId {
    b.push(Node::new(Opcode::IConst, DataType::Int32).with_literal(value))
}

pub fn binary(b: &mut ForestBuilder, opcode: Opcode, left: NodeId, right: NodeId) -> NodeId {
    b.push(Node::new(opcode, DataType::Int32).with_children([left, right]))
}

/// `levels` binary nodes, each using the previous one as both operands.
pub fn shared_chain(levels: usize) -> Forest {
    let mut b = builder();
    let mut prev = iload(&mut b, "x");
    for i in 0..levels {
        let op = if i % 2 == 0 { Opcode::IAdd } else { Opcode::IMul };
        prev = binary(&mut b, op, prev, prev);
    }
    b.root(prev);
    b.build()
}

/// Walk that re-descends on every edge and re-encodes on every visit.
pub fn naive_render(forest: &Forest, debug: bool) -> String {
    fn visit(
        forest: &Forest,
        node_id: NodeId,
        depth: u32,
        registry: &mut IdentityRegistry,
        writer: &mut LineWriter<&mut Vec<u8>>,
    ) {
        let node = forest.node(node_id);
        for &child in &node.children {
            visit(forest, child, depth + 1, registry, writer);
        }
        let (identity, seen) = match registry.lookup(node_id) {
            Some(identity) => (identity, true),
            None => (registry.assign(node_id).unwrap(), false),
        };
        let children: Vec<_> = node
            .children
            .iter()
            .map(|&c| registry.resolve(c).unwrap())
            .collect();
        let encoded = encode(forest, node, identity, &children, depth).unwrap();
        writer.emit(&encoded.instruction, encoded.skip, seen).unwrap();
    }

    let mut buf = Vec::new();
    {
        let mut writer = LineWriter::new(&mut buf, OutputPolicy::new(debug), Colors::OFF);
        let mut registry = IdentityRegistry::new();
        writer.header(forest.unit()).unwrap();
        for &root in forest.roots() {
            visit(forest, root, 0, &mut registry, &mut writer);
        }
        writer.finish().unwrap();
    }
    String::from_utf8(buf).unwrap()
}
