//! Instruction encoder.
//!
//! Opcodes are classified into a closed set of [`Family`] values; every
//! family has one encoding rule. Shape is validated before encoding and a
//! mismatch is a [`ShapeError`], never a malformed line.

use irlin_core::{DataType, IrSource, Node, Opcode};

use crate::error::{ShapeError, Violation};
use crate::instruction::{Encoded, Instruction, Marker};
use crate::registry::Identity;

/// Encoding family of an opcode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Family {
    Const,
    Load,
    LoadIndirect,
    StoreIndirect,
    Goto,
    Return,
    AsyncCheck,
    Binary,
    CompareBranch,
    CompressedRefs,
    BlockMarker,
    CallIndirect,
    Check,
    Unsupported,
}

impl Family {
    /// Classify an opcode. Every new opcode must be placed here.
    pub fn of(opcode: Opcode) -> Self {
        use Opcode::*;
        match opcode {
            IConst | LConst => Self::Const,
            ILoad | LLoad | ALoad => Self::Load,
            ILoadI | LLoadI | ALoadI => Self::LoadIndirect,
            IStoreI | LStoreI | AStoreI => Self::StoreIndirect,
            Goto => Self::Goto,
            Return => Self::Return,
            AsyncCheck => Self::AsyncCheck,
            IAdd | ISub | IMul | IAnd | IOr | IXor | LAdd | LSub | LMul | LAnd | LOr | LXor => {
                Self::Binary
            }
            IfICmpEq | IfICmpNe => Self::CompareBranch,
            CompressedRefs => Self::CompressedRefs,
            BBStart | BBEnd => Self::BlockMarker,
            CallI => Self::CallIndirect,
            NullChk | ResolveChk => Self::Check,
            TreeTop | IReturn | LReturn | AReturn | ICall | ACall | New | ArrayLength | AThrow
            | I2L | L2I | LCmp | Lookup | Table => Self::Unsupported,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Const => "constant",
            Self::Load => "scalar load",
            Self::LoadIndirect => "indirect load",
            Self::StoreIndirect => "indirect store",
            Self::Goto => "unconditional branch",
            Self::Return => "return",
            Self::AsyncCheck => "async checkpoint",
            Self::Binary => "binary op",
            Self::CompareBranch => "compare and branch",
            Self::CompressedRefs => "compressed-reference adapter",
            Self::BlockMarker => "block marker",
            Self::CallIndirect => "indirect call",
            Self::Check => "check",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }
}

/// Encode one node.
///
/// `children` holds the identities already assigned to `node.children`,
/// in the same order; a length mismatch is a [`Violation::ChildIdentities`].
/// `depth` is the traversal depth, recorded only in unsupported records.
pub fn encode<S: IrSource + ?Sized>(
    source: &S,
    node: &Node,
    id: Identity,
    children: &[Identity],
    depth: u32,
) -> Result<Encoded, ShapeError> {
    let shape = Shape { node, id };
    if children.len() != node.children.len() {
        return Err(shape.fail(Violation::ChildIdentities {
            expected: node.children.len(),
            found: children.len(),
        }));
    }
    let op = node.opcode;
    let ty = node.data_type;

    let encoded = match Family::of(op) {
        Family::Const => {
            shape.arity(0)?;
            Encoded::live(Instruction::Const {
                id,
                opcode: op,
                ty,
                value: shape.literal()?,
            })
        }
        Family::Load => {
            shape.arity(0)?;
            Encoded::live(Instruction::Load {
                id,
                opcode: op,
                ty,
                symbol: shape.symbol()?,
            })
        }
        Family::LoadIndirect => {
            shape.arity(1)?;
            Encoded::live(Instruction::LoadIndirect {
                id,
                opcode: op,
                ty,
                base: children[0],
                symbol: shape.symbol()?,
            })
        }
        Family::StoreIndirect => {
            shape.arity(2)?;
            let value_type = source.node(node.children[1]).data_type;
            if value_type != ty {
                return Err(shape.fail(Violation::ChildDataType {
                    child: children[1],
                    expected: ty,
                    found: value_type,
                }));
            }
            Encoded::live(Instruction::StoreIndirect {
                id,
                opcode: op,
                ty,
                base: children[0],
                value: children[1],
                symbol: shape.symbol()?,
            })
        }
        Family::Goto => {
            shape.arity(0)?;
            let target = node
                .branch_target
                .ok_or_else(|| shape.fail(Violation::MissingBranchTarget))?;
            let block = source
                .node(target)
                .block
                .ok_or_else(|| shape.fail(Violation::UnresolvedBranchTarget { target }))?;
            Encoded::live(Instruction::Goto { id, block })
        }
        Family::Return => {
            shape.arity(0)?;
            shape.data_type(DataType::NoType)?;
            Encoded::live(Instruction::Return { id })
        }
        Family::AsyncCheck => {
            shape.arity(0)?;
            Encoded::skipped(Instruction::AsyncCheck { id })
        }
        Family::Binary => {
            shape.arity(2)?;
            Encoded::live(Instruction::Binary {
                id,
                opcode: op,
                ty,
                left: children[0],
                right: children[1],
            })
        }
        Family::CompareBranch => {
            shape.arity(2)?;
            shape.data_type(DataType::NoType)?;
            Encoded::live(Instruction::CompareBranch {
                id,
                opcode: op,
                left: children[0],
                right: children[1],
            })
        }
        Family::CompressedRefs => {
            shape.arity(2)?;
            shape.data_type(DataType::Address)?;
            Encoded::skipped(Instruction::CompressedRefs {
                id,
                ty,
                reference: children[0],
                base: children[1],
            })
        }
        Family::BlockMarker => {
            shape.arity(0)?;
            let block = node.block.ok_or_else(|| shape.fail(Violation::MissingBlock))?;
            let marker = if op == Opcode::BBStart {
                Marker::Start
            } else {
                Marker::End
            };
            Encoded::live(Instruction::BlockMarker { block, marker })
        }
        Family::CallIndirect => {
            shape.arity(2)?;
            let target = node
                .call_target
                .clone()
                .ok_or_else(|| shape.fail(Violation::MissingCallTarget))?;
            Encoded::live(Instruction::CallIndirect {
                id,
                ty,
                address: children[0],
                args: children[1],
                target,
            })
        }
        Family::Check => {
            shape.arity(1)?;
            shape.data_type(DataType::Address)?;
            Encoded::live(Instruction::Check {
                id,
                opcode: op,
                ty,
                child: children[0],
            })
        }
        Family::Unsupported => Encoded::live(Instruction::Unsupported {
            id,
            opcode: op,
            depth,
        }),
    };

    Ok(encoded)
}

/// Shape checks for the node being encoded.
struct Shape<'a> {
    node: &'a Node,
    id: Identity,
}

impl Shape<'_> {
    fn fail(&self, violation: Violation) -> ShapeError {
        ShapeError {
            opcode: self.node.opcode,
            identity: self.id,
            violation,
        }
    }

    fn arity(&self, expected: usize) -> Result<(), ShapeError> {
        let found = self.node.children.len();
        if found != expected {
            return Err(self.fail(Violation::ChildCount { expected, found }));
        }
        Ok(())
    }

    fn data_type(&self, expected: DataType) -> Result<(), ShapeError> {
        let found = self.node.data_type;
        if found != expected {
            return Err(self.fail(Violation::DataType { expected, found }));
        }
        Ok(())
    }

    fn symbol(&self) -> Result<String, ShapeError> {
        self.node
            .symbol
            .clone()
            .ok_or_else(|| self.fail(Violation::MissingSymbol))
    }

    fn literal(&self) -> Result<i64, ShapeError> {
        self.node
            .literal
            .ok_or_else(|| self.fail(Violation::MissingLiteral))
    }
}
