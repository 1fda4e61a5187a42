//! Arena-backed IR forest.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`].
//! Children must precede their parents in the arena, which makes every
//! forest a DAG by construction: sharing is allowed, cycles are not.

use crate::{MethodRef, Node, NodeId};

/// Read-only view of an IR forest.
///
/// This is the only thing the serializer needs from a host IR.
pub trait IrSource {
    /// The compilation unit being serialized.
    fn unit(&self) -> &MethodRef;

    /// Tree roots in program order.
    fn roots(&self) -> &[NodeId];

    /// Resolve a handle obtained from this source.
    fn node(&self, id: NodeId) -> &Node;

    /// Total number of distinct nodes.
    fn node_count(&self) -> usize;
}

impl<T: IrSource + ?Sized> IrSource for &T {
    fn unit(&self) -> &MethodRef {
        (*self).unit()
    }
    fn roots(&self) -> &[NodeId] {
        (*self).roots()
    }
    fn node(&self, id: NodeId) -> &Node {
        (*self).node(id)
    }
    fn node_count(&self) -> usize {
        (*self).node_count()
    }
}

/// Forest construction error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForestError {
    #[error("node {node}: child {child} does not exist")]
    DanglingChild { node: NodeId, child: NodeId },
    #[error("node {node}: child {child} is not defined before its parent")]
    ForwardChild { node: NodeId, child: NodeId },
    #[error("node {node}: branch target {target} does not exist")]
    DanglingBranchTarget { node: NodeId, target: NodeId },
    #[error("root {0} does not exist")]
    DanglingRoot(NodeId),
}

/// IR forest for one compilation unit.
#[derive(Debug, Clone)]
pub struct Forest {
    unit: MethodRef,
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn builder(unit: MethodRef) -> ForestBuilder {
        ForestBuilder {
            unit,
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Validate and assemble a forest from an arena and root list.
    ///
    /// Branch targets may point forward (jumps to later blocks); children
    /// may not.
    pub fn from_parts(
        unit: MethodRef,
        nodes: Vec<Node>,
        roots: Vec<NodeId>,
    ) -> Result<Self, ForestError> {
        for (index, node) in nodes.iter().enumerate() {
            check_children(index, node, nodes.len())?;
            if let Some(target) = node.branch_target
                && target.index() >= nodes.len()
            {
                return Err(ForestError::DanglingBranchTarget {
                    node: NodeId::from_raw(index as u32),
                    target,
                });
            }
        }
        if let Some(&root) = roots.iter().find(|r| r.index() >= nodes.len()) {
            return Err(ForestError::DanglingRoot(root));
        }
        Ok(Self { unit, nodes, roots })
    }

    pub fn unit(&self) -> &MethodRef {
        &self.unit
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Resolve a handle.
    ///
    /// # Panics
    /// Panics if the handle was not created by this forest.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl IrSource for Forest {
    fn unit(&self) -> &MethodRef {
        &self.unit
    }
    fn roots(&self) -> &[NodeId] {
        &self.roots
    }
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Incremental forest construction for hosts and tests.
#[derive(Debug)]
pub struct ForestBuilder {
    unit: MethodRef,
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl ForestBuilder {
    /// Append a node to the arena.
    ///
    /// # Panics
    /// Panics if a child or branch target was not pushed before.
    pub fn push(&mut self, node: Node) -> NodeId {
        let index = self.nodes.len();
        if let Err(e) = check_children(index, &node, index) {
            panic!("ForestBuilder: {e}");
        }
        if let Some(target) = node.branch_target {
            assert!(
                target.index() < index,
                "ForestBuilder: branch target {target} must be pushed before node n{index}"
            );
        }
        self.nodes.push(node);
        NodeId::from_raw(index as u32)
    }

    /// Mark an existing node as the next tree root.
    pub fn root(&mut self, id: NodeId) -> &mut Self {
        assert!(
            id.index() < self.nodes.len(),
            "ForestBuilder: root {id} does not exist"
        );
        self.roots.push(id);
        self
    }

    /// Push a node and make it the next tree root.
    pub fn tree(&mut self, node: Node) -> NodeId {
        let id = self.push(node);
        self.roots.push(id);
        id
    }

    pub fn build(self) -> Forest {
        Forest {
            unit: self.unit,
            nodes: self.nodes,
            roots: self.roots,
        }
    }
}

fn check_children(index: usize, node: &Node, len: usize) -> Result<(), ForestError> {
    let id = NodeId::from_raw(index as u32);
    for &child in &node.children {
        if child.index() >= len {
            return Err(ForestError::DanglingChild { node: id, child });
        }
        if child.index() >= index {
            return Err(ForestError::ForwardChild { node: id, child });
        }
    }
    Ok(())
}
