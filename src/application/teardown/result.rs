//! Teardown result types

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::ports::ResourceKind;

/// How a teardown ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeardownOutcome {
    /// The operator did not confirm; nothing was touched
    Cancelled,
    Completed(TeardownReport),
}

/// One step that did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeardownFailure {
    pub target: String,
    pub message: String,
}

/// What a completed teardown did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeardownReport {
    pub removed: BTreeMap<ResourceKind, Vec<String>>,
    pub files_removed: Vec<PathBuf>,
    /// Files with a generated name that statstack did not write
    pub files_kept: Vec<PathBuf>,
    pub failures: Vec<TeardownFailure>,
    /// Resources still present after verification
    pub remaining: BTreeMap<ResourceKind, Vec<String>>,
}

impl TeardownReport {
    pub fn removed_count(&self) -> usize {
        self.removed.values().map(Vec::len).sum()
    }

    pub fn removed_of(&self, kind: ResourceKind) -> &[String] {
        self.removed.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.values().map(Vec::len).sum()
    }

    /// Nothing belonging to the stack is left
    pub fn is_clean(&self) -> bool {
        self.remaining_count() == 0
    }

    pub(super) fn record_removed(&mut self, kind: ResourceKind, name: &str) {
        self.removed.entry(kind).or_default().push(name.to_string());
    }

    pub(super) fn record_failure(&mut self, target: impl Into<String>, message: impl Into<String>) {
        self.failures.push(TeardownFailure {
            target: target.into(),
            message: message.into(),
        });
    }
}
