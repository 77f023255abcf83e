//! Linear undo/redo history of board snapshots.
//!
//! Snapshots are whole [`Board`] values, so storing or restoring one is a
//! copy and the live board can never alias into the history. The cursor is
//! 1-based: `cursor == 1` is the initial position, and the history always
//! holds at least that one snapshot.

use crate::board::Board;

/// Board snapshots with a cursor on the current one.
#[derive(Clone, Debug)]
pub struct History {
    /// Never empty; the first entry is the initial position
    snapshots: Vec<Board>,
    cursor: usize,
}

impl History {
    /// Start a history at `initial`.
    pub fn new(initial: Board) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 1,
        }
    }

    /// 1-based index of the current snapshot, which is also the turn number.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True unless the cursor is on the initial snapshot.
    pub fn can_undo(&self) -> bool {
        self.cursor > 1
    }

    /// True if undone snapshots lie beyond the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.snapshots.len()
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Board {
        self.snapshots[self.cursor - 1]
    }

    /// Record `board` after the cursor. Anything beyond the cursor is dropped
    /// first, so a new move after an undo discards the redo branch.
    pub fn save(&mut self, board: &Board) {
        self.snapshots.truncate(self.cursor);
        self.snapshots.push(*board);
        self.cursor = self.snapshots.len();
    }

    /// Step back one snapshot. `None` at the first snapshot.
    pub fn undo(&mut self) -> Option<Board> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward one snapshot. `None` at the last snapshot.
    pub fn redo(&mut self) -> Option<Board> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}
