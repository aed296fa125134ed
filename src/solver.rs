use ndarray::Array2;

use crate::grid::Grid;
use crate::piece::{Direction, Piece, Shape, NB_DIRS};
use crate::rules::EdgeStatus;

/// Recursive backtracking search over the linearized cells of a working grid.
///
/// At each cell it tries every distinct orientation of the piece there,
/// prunes on local mismatches against already-committed neighbors, and
/// restores the original orientation on every exit path, so the working grid
/// comes back untouched even when the search stops at the first solution.
struct Search<'g, C>
where
    C: FnMut() -> bool,
{
    grid: &'g mut Grid,
    find_first: bool,
    cancel: C,
    solutions: usize,
    cancelled: bool,
    /// Snapshot of the first solved placement, taken before backtracking
    /// unwinds it.
    solution: Option<Array2<Piece>>,
}

impl<C> Search<'_, C>
where
    C: FnMut() -> bool,
{
    fn done(&self) -> bool {
        self.cancelled || (self.find_first && self.solutions > 0)
    }

    /// Mismatches can only involve neighbors whose orientation is already
    /// committed: north and west of the cell, plus the wrap-around south and
    /// east neighbors when the cell sits on the last row or column of a
    /// wrapping grid.
    fn fits(&self, i: usize, j: usize) -> bool {
        let grid = &*self.grid;
        if grid.is_wrapping() {
            if (i > 0 && grid.check_edge(i, j, Direction::North) == EdgeStatus::Mismatch)
                || (j > 0 && grid.check_edge(i, j, Direction::West) == EdgeStatus::Mismatch)
            {
                return false;
            }
            if (i == grid.rows() - 1
                && grid.check_edge(i, j, Direction::South) == EdgeStatus::Mismatch)
                || (j == grid.cols() - 1
                    && grid.check_edge(i, j, Direction::East) == EdgeStatus::Mismatch)
            {
                return false;
            }
            true
        } else {
            grid.check_edge(i, j, Direction::North) != EdgeStatus::Mismatch
                && grid.check_edge(i, j, Direction::West) != EdgeStatus::Mismatch
        }
    }

    fn descend(&mut self, pos: usize, size: usize) {
        if (self.cancel)() {
            self.cancelled = true;
            return;
        }
        if pos == size {
            if self.grid.is_won() {
                self.solutions += 1;
                if self.find_first && self.solution.is_none() {
                    self.solution = Some(self.grid.pieces.clone());
                }
            }
            return;
        }

        let i = pos / self.grid.cols();
        let j = pos % self.grid.cols();
        let initial = self.grid.orientation_at(i, j);
        // rotation-symmetric shapes need fewer trials
        let candidates = match self.grid.shape_at(i, j) {
            Shape::Segment => 2,
            Shape::Cross | Shape::Empty => 1,
            _ => NB_DIRS,
        };

        for k in 0..candidates {
            self.grid.set_orientation(i, j, initial.rotated(k as i32));
            if self.fits(i, j) {
                self.descend(pos + 1, size);
            }
            if self.done() {
                break;
            }
        }
        self.grid.set_orientation(i, j, initial);
    }
}

impl Grid {
    /// Find one solution by backtracking search.
    ///
    /// On success the grid's orientations are overwritten with the solution
    /// and true is returned; on failure the grid is left untouched. The
    /// search runs on a private copy, so the grid is never observed in a
    /// trial state.
    pub fn solve_one(&mut self) -> bool {
        self.solve_one_with(|| false).unwrap()
    }

    /// [`solve_one`](Self::solve_one) with a cancellation check, polled once
    /// per visited search node. Returns [`None`] when the check reports
    /// cancellation, in which case the grid is left untouched.
    ///
    /// The search space is exponential in the number of cells; callers that
    /// need a deadline should count nodes or check a clock here.
    pub fn solve_one_with<C>(&mut self, cancel: C) -> Option<bool>
    where
        C: FnMut() -> bool,
    {
        let size = self.rows() * self.cols();
        let mut work = self.copy();
        let mut search = Search {
            grid: &mut work,
            find_first: true,
            cancel,
            solutions: 0,
            cancelled: false,
            solution: None,
        };
        search.descend(0, size);
        if search.cancelled {
            return None;
        }
        match search.solution.take() {
            Some(pieces) => {
                self.pieces = pieces;
                Some(true)
            }
            None => Some(false),
        }
    }

    /// Count every distinct solved placement of the grid's pieces. The grid
    /// itself is never mutated; the search runs on a private copy.
    pub fn count_solutions(&self) -> usize {
        self.count_solutions_with(|| false).unwrap()
    }

    /// [`count_solutions`](Self::count_solutions) with a cancellation check,
    /// polled once per visited search node. Returns [`None`] when the check
    /// reports cancellation.
    pub fn count_solutions_with<C>(&self, cancel: C) -> Option<usize>
    where
        C: FnMut() -> bool,
    {
        let size = self.rows() * self.cols();
        let mut work = self.copy();
        let mut search = Search {
            grid: &mut work,
            find_first: false,
            cancel,
            solutions: 0,
            cancelled: false,
            solution: None,
        };
        search.descend(0, size);
        (!search.cancelled).then_some(search.solutions)
    }
}
