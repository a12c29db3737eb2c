use super::stats::{HistoryEntry, Stats};
use std::collections::VecDeque;

/// Snapshots kept per session.
pub const UNDO_LIMIT: usize = 10;

/// Owned copy of everything undo restores.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub names: Vec<String>,
    pub team_names: Vec<String>,
    pub teams: Vec<Vec<String>>,
    pub rotation: f64,
    pub stats: Stats,
    pub history: Vec<HistoryEntry>,
}

/// Bounded LIFO of snapshots. When full, the oldest snapshot is evicted.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    snapshots: VecDeque<Snapshot>,
}

impl UndoStack {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > UNDO_LIMIT {
            self.snapshots.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
