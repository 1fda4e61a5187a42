//! Forest traversal.
//!
//! Post-order over every tree, children left to right. A node reached again
//! through another parent is a revisit: it is not re-encoded, and its subtree
//! is only walked again when the policy can print revisits. Output is the
//! same as a walk that re-descends on every edge.

use std::io::Write;

use irlin_core::{IrSource, NodeId};

use crate::encode::encode;
use crate::error::{Error, Result};
use crate::instruction::{Encoded, Instruction};
use crate::policy::{LineStats, LineWriter};
use crate::registry::{Identity, IdentityRegistry};

/// Traversal state for one run.
pub struct Walker<'s, S: IrSource + ?Sized, W: Write> {
    source: &'s S,
    registry: IdentityRegistry,
    /// Encoded record per identity, for revisits.
    encoded: Vec<Encoded>,
    writer: LineWriter<W>,
    max_depth: u32,
    unsupported: usize,
}

impl<'s, S: IrSource + ?Sized, W: Write> Walker<'s, S, W> {
    pub fn new(source: &'s S, writer: LineWriter<W>, max_depth: u32) -> Self {
        let capacity = source.node_count();
        Self {
            source,
            registry: IdentityRegistry::with_capacity(capacity),
            encoded: Vec::with_capacity(capacity),
            writer,
            max_depth,
            unsupported: 0,
        }
    }

    /// Write the header and every tree in source order.
    pub fn run(mut self) -> Result<WalkOutcome<W>> {
        let source = self.source;
        self.writer.header(source.unit())?;
        for &root in source.roots() {
            self.visit(root, 0)?;
        }
        let (sink, lines) = self.writer.finish()?;
        Ok(WalkOutcome {
            sink,
            registry: self.registry,
            lines,
            unsupported: self.unsupported,
        })
    }

    fn visit(&mut self, node_id: NodeId, depth: u32) -> Result<()> {
        self.check_depth(depth)?;
        if let Some(identity) = self.registry.lookup(node_id) {
            return self.revisit(node_id, identity, depth);
        }

        let source = self.source;
        let node = source.node(node_id);
        for &child in &node.children {
            self.visit(child, depth + 1)?;
        }

        let identity = self.registry.assign(node_id)?;
        let children = node
            .children
            .iter()
            .map(|&child| self.registry.resolve(child))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let encoded = encode(source, node, identity, &children, depth)?;

        if let Instruction::Unsupported { opcode, .. } = &encoded.instruction {
            self.unsupported += 1;
            tracing::warn!(%opcode, id = %identity, depth, "unsupported opcode");
        }

        self.writer.emit(&encoded.instruction, encoded.skip, false)?;
        debug_assert_eq!(self.encoded.len(), identity.index());
        self.encoded.push(encoded);
        Ok(())
    }

    /// Replay a shared subtree as revisits.
    ///
    /// Every node below an identified node is identified too, so the replay
    /// never encodes anything.
    fn revisit(&mut self, node_id: NodeId, identity: Identity, depth: u32) -> Result<()> {
        self.check_depth(depth)?;
        if self.writer.policy().keeps_revisits() {
            let source = self.source;
            for &child in &source.node(node_id).children {
                let child_identity = self.registry.resolve(child)?;
                self.revisit(child, child_identity, depth + 1)?;
            }
        }

        let encoded = &self.encoded[identity.index()];
        self.writer.emit(&encoded.instruction, encoded.skip, true)?;
        Ok(())
    }

    fn check_depth(&self, depth: u32) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::RecursionLimitExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

/// Everything a finished walk produced.
pub struct WalkOutcome<W> {
    pub sink: W,
    pub registry: IdentityRegistry,
    pub lines: LineStats,
    pub unsupported: usize,
}
