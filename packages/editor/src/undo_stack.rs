//! # Undo/Redo Stack
//!
//! Linear, bounded snapshot history.
//!
//! ## Design
//!
//! - Every tracked transition records a full [`AppState`] snapshot taken
//!   *after* it was applied
//! - `current` points at the snapshot matching the live state
//! - Undo/redo move `current` and hand back the snapshot to restore
//! - Recording while `current` is behind the newest snapshot discards
//!   everything after `current` (new edits destroy the redo branch)
//! - At capacity the oldest snapshot is evicted
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! stack.record(state_a.clone());
//! stack.record(state_b.clone());
//!
//! assert_eq!(stack.undo(), Some(&state_a));
//! assert_eq!(stack.redo(), Some(&state_b));
//! ```

use crate::options::DEFAULT_HISTORY_LIMIT;
use crate::state::AppState;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct UndoStack {
    /// Oldest first
    snapshots: Vec<AppState>,

    /// Index of the live snapshot; `None` only while empty
    current: Option<usize>,

    /// Maximum number of snapshots (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a stack with the default bound (40)
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            current: None,
            max_levels,
        }
    }

    /// Append the snapshot of a freshly applied transition
    pub fn record(&mut self, snapshot: AppState) {
        if let Some(current) = self.current {
            if current + 1 < self.snapshots.len() {
                debug!(
                    discarded = self.snapshots.len() - current - 1,
                    "Dropping redo branch"
                );
                self.snapshots.truncate(current + 1);
            }
        }

        if self.max_levels > 0 && self.snapshots.len() >= self.max_levels {
            self.snapshots.remove(0);
            debug!("Evicted oldest snapshot");
        }

        self.snapshots.push(snapshot);
        self.current = Some(self.snapshots.len() - 1);
    }

    /// Step back one snapshot; `None` when already at the oldest
    pub fn undo(&mut self) -> Option<&AppState> {
        match self.current {
            Some(current) if current > 0 => {
                self.current = Some(current - 1);
                debug!("{} / {}", current - 1, self.last_index());
                self.snapshots.get(current - 1)
            }
            _ => {
                debug!(current = ?self.current, "Nothing to undo");
                None
            }
        }
    }

    /// Step forward one snapshot; `None` when already at the newest
    pub fn redo(&mut self) -> Option<&AppState> {
        match self.current {
            Some(current) if current + 1 < self.snapshots.len() => {
                self.current = Some(current + 1);
                debug!("{} / {}", current + 1, self.last_index());
                self.snapshots.get(current + 1)
            }
            _ => {
                debug!(current = ?self.current, "Nothing to redo");
                None
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.undo_levels() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.redo_levels() > 0
    }

    /// Number of undo steps available
    pub fn undo_levels(&self) -> usize {
        self.current.unwrap_or(0)
    }

    /// Number of redo steps available
    pub fn redo_levels(&self) -> usize {
        match self.current {
            Some(current) => self.snapshots.len() - current - 1,
            None => 0,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn snapshots(&self) -> &[AppState] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current = None;
    }

    fn last_index(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
