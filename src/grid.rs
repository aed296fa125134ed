use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::history::History;
use crate::piece::{Direction, Piece, Shape, NB_DIRS, NB_SHAPES};

/// Display glyphs for each (shape, orientation) pair, row-major over the code
/// table.
const GLYPHS: [[&str; NB_DIRS]; NB_SHAPES] = [
    [" ", " ", " ", " "], // empty
    ["^", ">", "v", "<"], // endpoint
    ["|", "-", "|", "-"], // segment
    ["└", "┌", "┐", "┘"], // corner
    ["┴", "├", "┬", "┤"], // tee
    ["+", "+", "+", "+"], // cross
];

/// A rectangular grid of rotatable pipe pieces, optionally with toroidal
/// (wrapping) adjacency, together with its move history.
///
/// Rows and columns are indexed from the top-left corner. All index arguments
/// are bounds-checked; indexing out of range is a contract violation and
/// panics.
pub struct Grid {
    pub(crate) pieces: Array2<Piece>,
    wrapping: bool,
    pub(crate) history: History,
}

impl Grid {
    /// Construct a `rows` × `cols` grid of empty pieces facing north.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new_empty(rows: usize, cols: usize, wrapping: bool) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            pieces: Array2::from_elem((rows, cols), Piece::default()),
            wrapping,
            history: History::default(),
        }
    }

    /// Construct a grid from explicit row-major shape and orientation arrays.
    ///
    /// # Panics
    /// If either dimension is zero or either slice is not exactly
    /// `rows * cols` long.
    pub fn new_with_pieces(
        rows: usize,
        cols: usize,
        shapes: &[Shape],
        orientations: &[Direction],
        wrapping: bool,
    ) -> Self {
        assert!(shapes.len() == rows * cols);
        assert!(orientations.len() == rows * cols);
        let mut grid = Self::new_empty(rows, cols, wrapping);
        for i in 0..rows {
            for j in 0..cols {
                grid.pieces[[i, j]] = Piece {
                    shape: shapes[i * cols + j],
                    orientation: orientations[i * cols + j],
                };
            }
        }
        grid
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.pieces.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.pieces.ncols()
    }

    /// Whether the grid topology is a torus.
    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    /// The shape of the piece at `(i, j)`.
    pub fn shape_at(&self, i: usize, j: usize) -> Shape {
        self.pieces[[i, j]].shape
    }

    /// The orientation of the piece at `(i, j)`.
    pub fn orientation_at(&self, i: usize, j: usize) -> Direction {
        self.pieces[[i, j]].orientation
    }

    /// Overwrite the shape of the piece at `(i, j)`, leaving its orientation
    /// alone.
    pub fn set_shape(&mut self, i: usize, j: usize, shape: Shape) {
        self.pieces[[i, j]].shape = shape;
    }

    /// Overwrite the orientation of the piece at `(i, j)`, leaving its shape
    /// alone.
    pub fn set_orientation(&mut self, i: usize, j: usize, orientation: Direction) {
        self.pieces[[i, j]].orientation = orientation;
    }

    /// Whether the piece at `(i, j)` has a pipe stub pointing in `dir`.
    pub fn has_half_edge(&self, i: usize, j: usize, dir: Direction) -> bool {
        self.pieces[[i, j]].has_half_edge(dir)
    }

    /// The coordinates of the cell adjacent to `(i, j)` in direction `dir`.
    ///
    /// Returns [`None`] when `dir` points off a non-wrapping grid. On a
    /// wrapping grid there is always a neighbor, computed modulo the
    /// dimensions; on degenerate wrapping grids (a single row or column) a
    /// cell can be its own neighbor.
    pub fn adjacent(&self, i: usize, j: usize, dir: Direction) -> Option<(usize, usize)> {
        let (rows, cols) = (self.rows(), self.cols());
        assert!(i < rows && j < cols);
        if self.wrapping {
            Some(match dir {
                Direction::North => ((i + rows - 1) % rows, j),
                Direction::East => (i, (j + 1) % cols),
                Direction::South => ((i + 1) % rows, j),
                Direction::West => (i, (j + cols - 1) % cols),
            })
        } else {
            match dir {
                Direction::North => (i > 0).then(|| (i - 1, j)),
                Direction::East => (j + 1 < cols).then(|| (i, j + 1)),
                Direction::South => (i + 1 < rows).then(|| (i + 1, j)),
                Direction::West => (j > 0).then(|| (i, j - 1)),
            }
        }
    }

    /// Structural copy of this grid: same pieces, dimensions and wrapping
    /// flag, but a fresh, empty move history.
    pub fn copy(&self) -> Self {
        Self {
            pieces: self.pieces.clone(),
            wrapping: self.wrapping,
            history: History::default(),
        }
    }

    /// Compare two grids cell by cell.
    ///
    /// Dimensions, the wrapping flag and shapes always participate; with
    /// `ignore_orientation` the per-cell orientations are left out, so two
    /// differently rotated states of the same puzzle compare equal.
    pub fn equal(&self, other: &Self, ignore_orientation: bool) -> bool {
        if self.rows() != other.rows()
            || self.cols() != other.cols()
            || self.wrapping != other.wrapping
        {
            return false;
        }
        self.pieces
            .iter()
            .zip(other.pieces.iter())
            .all(|(a, b)| a.shape == b.shape && (ignore_orientation || a.orientation == b.orientation))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.pieces.rows() {
            for piece in row {
                f.write_str(GLYPHS[piece.shape as usize][piece.orientation as usize])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
