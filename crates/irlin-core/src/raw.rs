//! JSON input format.
//!
//! ```json
//! {
//!   "units": [{
//!     "method": { "declaring_type": "Foo", "name": "bar", "descriptor": "()V" },
//!     "nodes": [
//!       { "op": "iconst", "type": "Int32", "value": 5 },
//!       { "op": "return" }
//!     ],
//!     "trees": [1]
//!   }]
//! }
//! ```
//!
//! Node references (`children`, `target`, `trees`) are indices into `nodes`.
//! Repeating an index shares the node.

use crate::{DataType, Forest, ForestError, MethodRef, Node, NodeId, Opcode};

/// Top-level input document.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawInput {
    pub units: Vec<RawUnit>,
}

/// One compilation unit.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawUnit {
    pub method: MethodRef,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub trees: Vec<u32>,
}

/// Raw node definition.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNode {
    pub op: Opcode,
    #[serde(rename = "type", default)]
    pub data_type: DataType,
    #[serde(default)]
    pub children: Vec<u32>,
    pub symbol: Option<String>,
    pub call: Option<MethodRef>,
    pub target: Option<u32>,
    pub block: Option<u32>,
    pub value: Option<i64>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        Node {
            opcode: raw.op,
            data_type: raw.data_type,
            children: raw.children.into_iter().map(NodeId::from_raw).collect(),
            symbol: raw.symbol,
            call_target: raw.call,
            branch_target: raw.target.map(NodeId::from_raw),
            block: raw.block,
            literal: raw.value,
        }
    }
}

/// Input loading error.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unit {index} ({unit}): {source}")]
    Forest {
        index: usize,
        unit: String,
        #[source]
        source: ForestError,
    },
}

impl RawUnit {
    /// Validate into a [`Forest`].
    pub fn into_forest(self) -> Result<Forest, ForestError> {
        let nodes = self.nodes.into_iter().map(Node::from).collect();
        let roots = self.trees.into_iter().map(NodeId::from_raw).collect();
        Forest::from_parts(self.method, nodes, roots)
    }
}

/// Parse an input document into validated forests, in document order.
pub fn parse_units(json: &str) -> Result<Vec<Forest>, LoadError> {
    let input: RawInput = serde_json::from_str(json)?;
    input
        .units
        .into_iter()
        .enumerate()
        .map(|(index, unit)| {
            let name = unit.method.qualified_name();
            unit.into_forest().map_err(|source| LoadError::Forest {
                index,
                unit: name,
                source,
            })
        })
        .collect()
}
