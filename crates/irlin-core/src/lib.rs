#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for irlin.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the JSON input format (`raw`)
//! - **Model layer**: arena-backed [`Forest`] of [`Node`]s addressed by [`NodeId`]
//!
//! The serializer only ever sees the model through the [`IrSource`] trait,
//! so hosts with their own IR can plug in without building a `Forest`.

mod colors;
mod data_type;
mod forest;
mod node;
mod opcode;
mod raw;

#[cfg(test)]
mod forest_tests;
#[cfg(test)]
mod raw_tests;

pub use colors::Colors;
pub use data_type::DataType;
pub use forest::{Forest, ForestBuilder, ForestError, IrSource};
pub use node::{MethodRef, Node, NodeId};
pub use opcode::{Opcode, UnknownOpcode};
pub use raw::{LoadError, RawInput, RawNode, RawUnit, parse_units};
