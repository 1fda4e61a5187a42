//! Output policy and line writer.
//!
//! Every visit produces an `(instruction, skip, seen)` triple. The policy
//! decides whether it becomes a live line, a `//` comment, or nothing.

use std::io::{self, Write};

use irlin_core::{Colors, MethodRef};

use crate::instruction::Instruction;

/// Prefix marking informational lines.
pub const COMMENT_PREFIX: &str = "//";

/// What happens to one instruction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Emission {
    Live,
    Comment,
    Suppress,
}

/// Emission rules for one run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct OutputPolicy {
    debug: bool,
}

impl OutputPolicy {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn is_debug(self) -> bool {
        self.debug
    }

    pub fn decide(self, skip: bool, seen: bool) -> Emission {
        match (self.debug, skip || seen) {
            (_, false) => Emission::Live,
            (true, true) => Emission::Comment,
            (false, true) => Emission::Suppress,
        }
    }

    /// Whether revisits of shared nodes can produce output at all.
    pub fn keeps_revisits(self) -> bool {
        self.debug
    }
}

/// Line counters for one run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LineStats {
    pub live: usize,
    pub commented: usize,
    pub suppressed: usize,
}

/// Writes the header and accepted instructions to a sink.
pub struct LineWriter<W: Write> {
    out: W,
    policy: OutputPolicy,
    colors: Colors,
    stats: LineStats,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W, policy: OutputPolicy, colors: Colors) -> Self {
        Self {
            out,
            policy,
            colors,
            stats: LineStats::default(),
        }
    }

    pub fn policy(&self) -> OutputPolicy {
        self.policy
    }

    pub fn stats(&self) -> LineStats {
        self.stats
    }

    /// Write `<declaringType>:<memberName>:<descriptor>`.
    pub fn header(&mut self, unit: &MethodRef) -> io::Result<()> {
        let c = &self.colors;
        writeln!(
            self.out,
            "{}{}:{}:{}{}",
            c.header, unit.declaring_type, unit.name, unit.descriptor, c.reset
        )
    }

    /// Apply the policy to one visit and write the resulting line, if any.
    pub fn emit(
        &mut self,
        instruction: &Instruction,
        skip: bool,
        seen: bool,
    ) -> io::Result<Emission> {
        let c = &self.colors;
        let emission = self.policy.decide(skip, seen);
        match emission {
            Emission::Live if instruction.is_unsupported() => {
                writeln!(self.out, "{}{instruction}{}", c.unsupported, c.reset)?;
                self.stats.live += 1;
            }
            Emission::Live => {
                writeln!(self.out, "{instruction}")?;
                self.stats.live += 1;
            }
            Emission::Comment => {
                writeln!(self.out, "{}{COMMENT_PREFIX}{instruction}{}", c.comment, c.reset)?;
                self.stats.commented += 1;
            }
            Emission::Suppress => self.stats.suppressed += 1,
        }
        tracing::trace!(line = %instruction, skip, seen, ?emission, "instruction");
        Ok(emission)
    }

    /// Flush the sink and hand it back with the final counters.
    pub fn finish(mut self) -> io::Result<(W, LineStats)> {
        self.out.flush()?;
        Ok((self.out, self.stats))
    }
}
