//! Data type tags carried by IR nodes.

use std::fmt;

/// Value type produced by a node.
///
/// Spellings are part of the output format; do not rename variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize)]
pub enum DataType {
    /// The node produces no value (statements, branches, void returns).
    #[default]
    NoType,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    /// Object reference or raw address.
    Address,
}

impl DataType {
    pub fn name(self) -> &'static str {
        match self {
            Self::NoType => "NoType",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Address => "Address",
        }
    }

    /// Whether the type is the "no value" type.
    pub fn is_void(self) -> bool {
        self == Self::NoType
    }

    pub fn is_address(self) -> bool {
        self == Self::Address
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
