//! ANSI color codes for terminal output.
//!
//! Three semantic colors:
//! - Blue: unit header
//! - Dim: commented (revisited or skipped) instructions
//! - Yellow: unsupported-opcode records

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes. Never applied to files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub header: &'static str,
    pub comment: &'static str,
    pub unsupported: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        header: "\x1b[34m",
        comment: "\x1b[2m",
        unsupported: "\x1b[33m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        header: "",
        comment: "",
        unsupported: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
