//! Keyboard drag cursor.
//!
//! Tracks the selected hand slot and the anchor cell the selected piece is
//! hovering over. The anchor is clamped to the grid; a piece that overhangs
//! the edge from there is simply an invalid drop for the engine to reject.

use crate::types::{PlayerCommand, GRID_SIZE, HAND_SIZE};

/// What the front end should do after feeding a command to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// Anchor or slot changed; refresh the preview
    Moved,
    /// Try dropping the piece in `slot` at (row, col)
    Drop { slot: usize, row: i32, col: i32 },
    Restart,
    /// Nothing to do (empty slot, already at the edge, ...)
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragCursor {
    row: i32,
    col: i32,
    slot: usize,
}

impl DragCursor {
    pub fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            slot: 0,
        }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Move the anchor, staying on the grid. Returns false when clamped in
    /// place.
    pub fn move_by(&mut self, d_row: i32, d_col: i32) -> bool {
        let max = GRID_SIZE as i32 - 1;
        let row = (self.row + d_row).clamp(0, max);
        let col = (self.col + d_col).clamp(0, max);
        let moved = (row, col) != (self.row, self.col);
        self.row = row;
        self.col = col;
        moved
    }

    /// Select `slot` if it holds a piece.
    pub fn select_slot(&mut self, slot: usize, filled: &[bool; HAND_SIZE]) -> bool {
        if slot < HAND_SIZE && filled[slot] {
            self.slot = slot;
            true
        } else {
            false
        }
    }

    /// Select the next filled slot after the current one, wrapping.
    pub fn next_slot(&mut self, filled: &[bool; HAND_SIZE]) -> bool {
        for step in 1..=HAND_SIZE {
            let candidate = (self.slot + step) % HAND_SIZE;
            if filled[candidate] {
                let changed = candidate != self.slot;
                self.slot = candidate;
                return changed;
            }
        }
        false
    }

    /// Keep the selection on a filled slot after the hand changed.
    pub fn settle(&mut self, filled: &[bool; HAND_SIZE]) {
        if !filled.get(self.slot).copied().unwrap_or(false) {
            if let Some(first) = filled.iter().position(|&f| f) {
                self.slot = first;
            }
        }
    }

    /// Back to the top-left corner and the first slot.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feed one player command. `filled` marks which hand slots hold a piece.
    pub fn apply(&mut self, command: PlayerCommand, filled: &[bool; HAND_SIZE]) -> CursorAction {
        let changed = match command {
            PlayerCommand::CursorUp => self.move_by(-1, 0),
            PlayerCommand::CursorDown => self.move_by(1, 0),
            PlayerCommand::CursorLeft => self.move_by(0, -1),
            PlayerCommand::CursorRight => self.move_by(0, 1),
            PlayerCommand::SelectSlot(slot) => self.select_slot(slot as usize, filled),
            PlayerCommand::NextSlot => self.next_slot(filled),
            PlayerCommand::Drop => {
                if !filled.get(self.slot).copied().unwrap_or(false) {
                    return CursorAction::Ignored;
                }
                return CursorAction::Drop {
                    slot: self.slot,
                    row: self.row,
                    col: self.col,
                };
            }
            PlayerCommand::Restart => return CursorAction::Restart,
        };

        if changed {
            CursorAction::Moved
        } else {
            CursorAction::Ignored
        }
    }
}

impl Default for DragCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: [bool; HAND_SIZE] = [true; HAND_SIZE];

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut cursor = DragCursor::new();
        assert!(!cursor.move_by(-1, 0));
        assert!(!cursor.move_by(0, -1));
        for _ in 0..20 {
            cursor.move_by(1, 1);
        }
        assert_eq!((cursor.row(), cursor.col()), (7, 7));
    }

    #[test]
    fn test_next_slot_skips_empty() {
        let mut cursor = DragCursor::new();
        let filled = [true, false, true];
        assert!(cursor.next_slot(&filled));
        assert_eq!(cursor.slot(), 2);
        assert!(cursor.next_slot(&filled));
        assert_eq!(cursor.slot(), 0);
    }

    #[test]
    fn test_select_empty_slot_ignored() {
        let mut cursor = DragCursor::new();
        assert_eq!(
            cursor.apply(PlayerCommand::SelectSlot(1), &[true, false, true]),
            CursorAction::Ignored
        );
        assert_eq!(cursor.slot(), 0);
        assert_eq!(
            cursor.apply(PlayerCommand::SelectSlot(5), &FULL),
            CursorAction::Ignored
        );
    }

    #[test]
    fn test_drop_reports_anchor() {
        let mut cursor = DragCursor::new();
        cursor.apply(PlayerCommand::CursorDown, &FULL);
        cursor.apply(PlayerCommand::CursorRight, &FULL);
        cursor.apply(PlayerCommand::SelectSlot(2), &FULL);
        assert_eq!(
            cursor.apply(PlayerCommand::Drop, &FULL),
            CursorAction::Drop { slot: 2, row: 1, col: 1 }
        );
    }

    #[test]
    fn test_settle_moves_off_empty_slot() {
        let mut cursor = DragCursor::new();
        cursor.settle(&[false, false, true]);
        assert_eq!(cursor.slot(), 2);
        assert_eq!(
            cursor.apply(PlayerCommand::Drop, &[false, false, false]),
            CursorAction::Ignored
        );
    }
}
