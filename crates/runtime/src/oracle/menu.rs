//! In-memory menu the guard can trim.
use obelisk_core::{CandidateAction, MenuEntries};

/// Ordered list of menu entries, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuList {
    entries: Vec<CandidateAction>,
}

impl MenuList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CandidateAction) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[CandidateAction] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl MenuEntries for MenuList {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn remove_last(&mut self) {
        self.entries.pop();
    }
}
