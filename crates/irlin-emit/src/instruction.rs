//! Structured instruction records and their textual form.
//!
//! Lines are colon-separated: `<id>:<tag>[:<type>][:<field>...]`.
//! Field order per record is fixed; the downstream consumer parses it.

use std::fmt;

use irlin_core::{DataType, MethodRef, Opcode};

use crate::registry::Identity;

/// Output tag for an opcode.
///
/// Mostly the opcode name; checks and block markers use short lowercase tags.
pub fn tag(opcode: Opcode) -> &'static str {
    match opcode {
        Opcode::NullChk => "nullchk",
        Opcode::ResolveChk => "resolvechk",
        Opcode::BBStart => Marker::Start.tag(),
        Opcode::BBEnd => Marker::End.tag(),
        other => other.name(),
    }
}

/// Block boundary kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Marker {
    Start,
    End,
}

impl Marker {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Start => "bbs",
            Self::End => "bbe",
        }
    }
}

/// One encoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    Const {
        id: Identity,
        opcode: Opcode,
        ty: DataType,
        value: i64,
    },
    Load {
        id: Identity,
        opcode: Opcode,
        ty: DataType,
        symbol: String,
    },
    LoadIndirect {
        id: Identity,
        opcode: Opcode,
        ty: DataType,
        base: Identity,
        symbol: String,
    },
    StoreIndirect {
        id: Identity,
        opcode: Opcode,
        ty: DataType,
        base: Identity,
        value: Identity,
        symbol: String,
    },
    Goto {
        id: Identity,
        block: u32,
    },
    Return {
        id: Identity,
    },
    AsyncCheck {
        id: Identity,
    },
    Binary {
        id: Identity,
        opcode: Opcode,
        ty: DataType,
        left: Identity,
        right: Identity,
    },
    CompareBranch {
        id: Identity,
        opcode: Opcode,
        left: Identity,
        right: Identity,
    },
    CompressedRefs {
        id: Identity,
        ty: DataType,
        reference: Identity,
        base: Identity,
    },
    /// Block markers are keyed by block number, not node identity.
    BlockMarker {
        block: u32,
        marker: Marker,
    },
    CallIndirect {
        id: Identity,
        ty: DataType,
        address: Identity,
        args: Identity,
        target: MethodRef,
    },
    Check {
        id: Identity,
        opcode: Opcode,
        ty: DataType,
        child: Identity,
    },
    /// Opcode the encoder has no rule for. Kept visible in output.
    Unsupported {
        id: Identity,
        opcode: Opcode,
        depth: u32,
    },
}

impl Instruction {
    /// Node identity carried in the line, if any.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::Const { id, .. }
            | Self::Load { id, .. }
            | Self::LoadIndirect { id, .. }
            | Self::StoreIndirect { id, .. }
            | Self::Goto { id, .. }
            | Self::Return { id }
            | Self::AsyncCheck { id }
            | Self::Binary { id, .. }
            | Self::CompareBranch { id, .. }
            | Self::CompressedRefs { id, .. }
            | Self::CallIndirect { id, .. }
            | Self::Check { id, .. }
            | Self::Unsupported { id, .. } => Some(*id),
            Self::BlockMarker { .. } => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const {
                id,
                opcode,
                ty,
                value,
            } => write!(f, "{id}:{}:{ty}:{value}", tag(*opcode)),
            Self::Load {
                id,
                opcode,
                ty,
                symbol,
            } => write!(f, "{id}:{}:{ty}:{symbol}", tag(*opcode)),
            Self::LoadIndirect {
                id,
                opcode,
                ty,
                base,
                symbol,
            } => write!(f, "{id}:{}:{ty}:{base}:{symbol}", tag(*opcode)),
            Self::StoreIndirect {
                id,
                opcode,
                ty,
                base,
                value,
                symbol,
            } => write!(f, "{id}:{}:{ty}:{base}:{value}:{symbol}", tag(*opcode)),
            Self::Goto { id, block } => write!(f, "{id}:goto:{block}"),
            Self::Return { id } => write!(f, "{id}:return"),
            Self::AsyncCheck { id } => write!(f, "{id}:asynccheck"),
            Self::Binary {
                id,
                opcode,
                ty,
                left,
                right,
            } => write!(f, "{id}:{}:{ty}:{left}:{right}", tag(*opcode)),
            Self::CompareBranch {
                id,
                opcode,
                left,
                right,
            } => write!(f, "{id}:{}:{left}:{right}", tag(*opcode)),
            Self::CompressedRefs {
                id,
                ty,
                reference,
                base,
            } => write!(f, "{id}:compressedRefs:{ty}:{reference}:{base}"),
            Self::BlockMarker { block, marker } => write!(f, "{block}:{}", marker.tag()),
            Self::CallIndirect {
                id,
                ty,
                address,
                args,
                target,
            } => write!(
                f,
                "{id}:calli:{ty}:{address}:{args}:{}:{}:{}",
                target.declaring_type, target.name, target.descriptor
            ),
            Self::Check {
                id,
                opcode,
                ty,
                child,
            } => write!(f, "{id}:{}:{ty}:{child}", tag(*opcode)),
            Self::Unsupported { id, opcode, depth } => {
                write!(f, "{id}:unsupported:{}:{depth}", opcode.name())
            }
        }
    }
}

/// Encoder output for one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    pub instruction: Instruction,
    /// Redundant for the downstream consumer; only written in debug mode.
    pub skip: bool,
}

impl Encoded {
    pub(crate) fn live(instruction: Instruction) -> Self {
        Self {
            instruction,
            skip: false,
        }
    }

    pub(crate) fn skipped(instruction: Instruction) -> Self {
        Self {
            instruction,
            skip: true,
        }
    }
}
