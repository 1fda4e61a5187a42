//! IR opcode vocabulary.
//!
//! The set is closed: hosts map their own operations onto these variants.
//! It is wider than what the encoder supports; coverage gaps show up as
//! "unsupported" lines instead of load failures.

use std::fmt;

macro_rules! opcodes {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// IR operation code.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, serde::Deserialize)]
        #[serde(try_from = "String")]
        pub enum Opcode {
            $($variant,)*
        }

        impl Opcode {
            /// Every opcode, in declaration order.
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant,)*];

            /// Display name, also the spelling accepted by the JSON loader.
            pub fn name(self) -> &'static str {
                match self {
                    $(Opcode::$variant => $name,)*
                }
            }
        }
    };
}

opcodes! {
    IConst => "iconst",
    LConst => "lconst",

    ILoad => "iload",
    LLoad => "lload",
    ALoad => "aload",

    ILoadI => "iloadi",
    LLoadI => "lloadi",
    ALoadI => "aloadi",

    IStoreI => "istorei",
    LStoreI => "lstorei",
    AStoreI => "astorei",

    Goto => "goto",
    Return => "return",
    AsyncCheck => "asynccheck",
    IfICmpEq => "ificmpeq",
    IfICmpNe => "ificmpne",

    IAdd => "iadd",
    ISub => "isub",
    IMul => "imul",
    IAnd => "iand",
    IOr => "ior",
    IXor => "ixor",
    LAdd => "ladd",
    LSub => "lsub",
    LMul => "lmul",
    LAnd => "land",
    LOr => "lor",
    LXor => "lxor",

    CompressedRefs => "compressedRefs",

    BBStart => "BBStart",
    BBEnd => "BBEnd",

    CallI => "calli",

    NullChk => "NULLCHK",
    ResolveChk => "ResolveCHK",

    TreeTop => "treetop",
    IReturn => "ireturn",
    LReturn => "lreturn",
    AReturn => "areturn",
    ICall => "icall",
    ACall => "acall",
    New => "new",
    ArrayLength => "arraylength",
    AThrow => "athrow",
    I2L => "i2l",
    L2I => "l2i",
    LCmp => "lcmp",
    Lookup => "lookup",
    Table => "table",
}

impl Opcode {
    /// Look up an opcode by its display name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opcode name that is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown opcode `{0}`")]
pub struct UnknownOpcode(pub String);

impl TryFrom<String> for Opcode {
    type Error = UnknownOpcode;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name).ok_or(UnknownOpcode(name))
    }
}
