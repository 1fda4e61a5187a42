//! Errors that abort a serialization run.

use std::io;

use irlin_core::{DataType, NodeId, Opcode};

use crate::registry::{Identity, RegistryError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node does not have the shape its opcode requires.
    #[error("shape violation: {0}")]
    Shape(#[from] ShapeError),

    /// Internal identity bookkeeping went wrong.
    #[error("identity registry: {0}")]
    Registry(#[from] RegistryError),

    /// Input nested too deeply.
    #[error("recursion limit exceeded (max depth {limit})")]
    RecursionLimitExceeded { limit: u32 },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// A batch stopped at this unit.
    #[error("{unit}: {source}")]
    Unit { unit: String, source: Box<Error> },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Opcode-local shape check failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{opcode} (id {identity}): {violation}")]
pub struct ShapeError {
    pub opcode: Opcode,
    pub identity: Identity,
    pub violation: Violation,
}

/// The expectation a node failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("expected {expected} children, found {found}")]
    ChildCount { expected: usize, found: usize },
    /// The caller passed a different number of child identities than the
    /// node has children.
    #[error("expected {expected} child identities, found {found}")]
    ChildIdentities { expected: usize, found: usize },
    #[error("expected type {expected}, found {found}")]
    DataType { expected: DataType, found: DataType },
    #[error("child {child} has type {found}, expected {expected}")]
    ChildDataType {
        child: Identity,
        expected: DataType,
        found: DataType,
    },
    #[error("missing symbol reference")]
    MissingSymbol,
    #[error("missing literal value")]
    MissingLiteral,
    #[error("missing resolved call target")]
    MissingCallTarget,
    #[error("missing branch target")]
    MissingBranchTarget,
    #[error("branch target {target} has no block number")]
    UnresolvedBranchTarget { target: NodeId },
    #[error("missing block number")]
    MissingBlock,
}
