//! IR nodes and the handles that identify them.

use std::fmt;

use crate::{DataType, Opcode};

/// Handle to a node in a [`Forest`](crate::Forest) arena.
///
/// Two handles are equal iff they name the same node; structurally identical
/// nodes pushed twice get distinct handles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a handle from a raw arena index. Use only for deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Resolved method: the compilation unit itself, or the target of a call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct MethodRef {
    pub declaring_type: String,
    pub name: String,
    pub descriptor: String,
}

impl MethodRef {
    pub fn new(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    /// `Type.member`, the name selection filters match against.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.declaring_type, self.name)
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.declaring_type, self.name, self.descriptor)
    }
}

/// One IR operation.
///
/// Metadata fields are optional at the model level; which ones an opcode
/// requires is decided by the encoder.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub opcode: Opcode,
    pub data_type: DataType,
    pub children: Vec<NodeId>,
    /// Symbol reference (field, static, local) for loads and stores.
    pub symbol: Option<String>,
    /// Resolved call target for call nodes.
    pub call_target: Option<MethodRef>,
    /// Block-start node a branch jumps to.
    pub branch_target: Option<NodeId>,
    /// Enclosing block number (block markers).
    pub block: Option<u32>,
    /// Integer literal for constants.
    pub literal: Option<i64>,
}

impl Node {
    pub fn new(opcode: Opcode, data_type: DataType) -> Self {
        Self {
            opcode,
            data_type,
            children: Vec::new(),
            symbol: None,
            call_target: None,
            branch_target: None,
            block: None,
            literal: None,
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_call_target(mut self, target: MethodRef) -> Self {
        self.call_target = Some(target);
        self
    }

    pub fn with_branch_target(mut self, target: NodeId) -> Self {
        self.branch_target = Some(target);
        self
    }

    pub fn with_block(mut self, block: u32) -> Self {
        self.block = Some(block);
        self
    }

    pub fn with_literal(mut self, value: i64) -> Self {
        self.literal = Some(value);
        self
    }
}
