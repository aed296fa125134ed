use crate::grid::Grid;
use crate::piece::Direction;

/// A single reversible orientation change at one cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Move {
    /// Row of the affected cell.
    pub(crate) i: usize,
    /// Column of the affected cell.
    pub(crate) j: usize,
    /// Orientation before the move.
    pub(crate) old: Direction,
    /// Orientation after the move.
    pub(crate) new: Direction,
}

/// Undo and redo stacks of player moves. A move lives in exactly one of the
/// two stacks at a time.
#[derive(Default)]
pub(crate) struct History {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl Grid {
    /// Rotate the piece at `(i, j)` by `steps` clockwise quarter turns
    /// (negative steps rotate counterclockwise), recording the change on the
    /// undo stack. Any pending redo history is discarded.
    pub fn play_move(&mut self, i: usize, j: usize, steps: i32) {
        let old = self.orientation_at(i, j);
        let new = old.rotated(steps);
        self.history.undo.push(Move { i, j, old, new });
        self.history.redo.clear();
        self.set_orientation(i, j, new);
    }

    /// Revert the most recent move, making it available to [`redo`](Self::redo).
    /// Does nothing when there is nothing to undo.
    pub fn undo(&mut self) {
        if let Some(m) = self.history.undo.pop() {
            self.set_orientation(m.i, m.j, m.old);
            self.history.redo.push(m);
        }
    }

    /// Re-apply the most recently undone move. Does nothing when there is
    /// nothing to redo.
    pub fn redo(&mut self) {
        if let Some(m) = self.history.redo.pop() {
            self.set_orientation(m.i, m.j, m.new);
            self.history.undo.push(m);
        }
    }
}
