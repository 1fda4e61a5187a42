//! irlin serializer: linearizes an IR forest into line-oriented text.
//!
//! Pipeline for one compilation unit:
//! - `walk` - post-order traversal over the forest, sharing-aware
//! - `registry` - stable sequential identity per distinct node
//! - `encode` - opcode-specific instruction records with shape checks
//! - `policy` - live / commented / suppressed decision and line writing
//!
//! Each run owns its registry and writer; nothing is global.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod encode;
mod error;
mod instruction;
mod policy;
mod registry;
mod select;
mod serialize;
mod walk;

#[cfg(test)]
mod test_utils;


pub use config::{Config, DEFAULT_MAX_DEPTH};
pub use encode::{Family, encode};
pub use error::{Error, Result, ShapeError, Violation};
pub use instruction::{Encoded, Instruction, Marker, tag};
pub use policy::{COMMENT_PREFIX, Emission, LineStats, LineWriter, OutputPolicy};
pub use registry::{Identity, IdentityRegistry, RegistryError};
pub use select::{NameFilter, SelectAll, Selection};
pub use serialize::{Summary, UnitOutcome, serialize, serialize_all, serialize_to_string};
pub use walk::{WalkOutcome, Walker};
