//! Unit selection: which compilation units get serialized.

use irlin_core::MethodRef;

pub trait Selection {
    fn selects(&self, unit: &MethodRef) -> bool;
}

/// Serialize every unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectAll;

impl Selection for SelectAll {
    fn selects(&self, _unit: &MethodRef) -> bool {
        true
    }
}

/// Serialize units whose `Type.member` name contains any of the patterns.
///
/// An empty filter selects everything.
#[derive(Clone, Debug, Default)]
pub struct NameFilter {
    patterns: Vec<String>,
}

impl NameFilter {
    pub fn new(patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Selection for NameFilter {
    fn selects(&self, unit: &MethodRef) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        let name = unit.qualified_name();
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }
}
