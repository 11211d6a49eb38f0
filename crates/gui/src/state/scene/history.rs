//! Snapshot-based undo/redo history.
//!
//! Every entry is a complete, independently valid copy of the scene, so
//! restoring any snapshot is unambiguous regardless of what happened in
//! between. The log is linear: committing after an undo discards the
//! abandoned redo branch.

use std::time::{Duration, Instant};

use shared::{ObjectId, SceneObject};

use super::epoch_millis;

/// Maximum retained snapshots; the oldest entry is evicted beyond this
pub const MAX_HISTORY: usize = 50;

/// Quiet period after the last continuous edit before a commit fires
pub const COMMIT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Point-in-time deep copy of the scene plus selection
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub objects: Vec<SceneObject>,
    pub selected: Option<ObjectId>,
    pub timestamp_ms: u64,
}

/// Linear undo/redo log with a cursor into committed snapshots
#[derive(Default)]
pub struct HistoryLog {
    entries: Vec<SceneSnapshot>,
    /// Index of the entry matching the live scene; None only while empty
    cursor: Option<usize>,
}

impl HistoryLog {
    /// Deep-copy the given state onto the log and move the cursor to it.
    ///
    /// Entries beyond the cursor (undone states) are discarded first. When
    /// the log would exceed [`MAX_HISTORY`] the oldest entry is evicted,
    /// silently forfeiting undo past the cap.
    pub fn commit(&mut self, objects: &[SceneObject], selected: Option<&ObjectId>) {
        match self.cursor {
            Some(c) => self.entries.truncate(c + 1),
            None => self.entries.clear(),
        }
        self.entries.push(SceneSnapshot {
            objects: objects.to_vec(),
            selected: selected.cloned(),
            timestamp_ms: epoch_millis(),
        });
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry; None at the earliest entry
    pub fn undo(&mut self) -> Option<&SceneSnapshot> {
        let c = self.cursor?;
        if c == 0 {
            return None;
        }
        self.cursor = Some(c - 1);
        self.entries.get(c - 1)
    }

    /// Step forward one entry; None at the latest entry
    pub fn redo(&mut self) -> Option<&SceneSnapshot> {
        let c = self.cursor?;
        if c + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(c + 1);
        self.entries.get(c + 1)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cancellable deferred history commit.
///
/// Each new edit within the window re-arms the deadline, coalescing a burst
/// of mutations (a gizmo drag, a slider sweep) into one history entry. The
/// owner drives it explicitly via [`fire_if_due`](Self::fire_if_due) once
/// per frame; no UI-framework timer is involved.
#[derive(Default)]
pub struct CommitDebounce {
    deadline: Option<Instant>,
}

impl CommitDebounce {
    /// (Re)arm the deadline relative to `now`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + COMMIT_DEBOUNCE);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clear and report the deadline once it has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
