use std::collections::VecDeque;

use crate::Snapshot;

/// Bounded most-recently-used list of scratch buffer snapshots with a
/// cyclic navigation cursor.
///
/// Index 0 holds the most recently saved snapshot, the last index the
/// oldest. Insertion happens at the front, eviction at the back.
#[derive(Debug, Default)]
pub struct SnapshotHistory {
    pub(crate) snapshots: VecDeque<Snapshot>,
    /// Currently displayed snapshot. Unset until navigation starts and
    /// after every insert.
    position: Option<usize>,
}

impl SnapshotHistory {
    pub fn new(snapshots: Vec<Snapshot>) -> SnapshotHistory {
        SnapshotHistory {
            snapshots: snapshots.into(),
            position: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn get(&self, pos: usize) -> Option<&Snapshot> {
        self.snapshots.get(pos)
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Insert `snapshot` at the front, evicting from the back until at most
    /// `max` entries remain.
    ///
    /// Returns false without touching the history when `snapshot` matches
    /// the current front entry. Older duplicates further back are allowed.
    /// Any insertion clears the navigation position.
    pub fn push(&mut self, snapshot: Snapshot, max: usize) -> bool {
        if self.snapshots.front() == Some(&snapshot) {
            return false;
        }

        self.snapshots.push_front(snapshot);
        while self.snapshots.len() > max {
            self.snapshots.pop_back();
        }
        self.position = None;
        true
    }

    /// Step towards older entries, starting from the newest and wrapping
    /// back to it past the oldest.
    pub fn prev(&mut self) -> Option<&Snapshot> {
        let len = self.snapshots.len();
        if len == 0 {
            return None;
        }

        let pos = match self.position {
            None => 0,
            Some(n) if n + 1 >= len => 0,
            Some(n) => n + 1,
        };
        self.position = Some(pos);
        self.snapshots.get(pos)
    }

    /// Step towards newer entries, starting from the oldest and wrapping
    /// back to it past the newest.
    pub fn next(&mut self) -> Option<&Snapshot> {
        let len = self.snapshots.len();
        if len == 0 {
            return None;
        }

        let pos = match self.position {
            None | Some(0) => len - 1,
            Some(n) => n - 1,
        };
        self.position = Some(pos);
        self.snapshots.get(pos)
    }
}
