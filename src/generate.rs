use itertools::Itertools;
use rand::Rng;
use strum::VariantArray;

use crate::grid::Grid;
use crate::piece::{Direction, Shape};

impl Grid {
    /// Grow the piece at `(i, j)` by one half-edge in direction `dir`.
    fn add_half_edge(&mut self, i: usize, j: usize, dir: Direction) {
        self.pieces[[i, j]] = self.pieces[[i, j]].with_half_edge(dir);
    }

    /// Add an edge between `(i, j)` and its neighbor in direction `dir`, by
    /// giving each of the two cells the corresponding half-edge.
    ///
    /// Returns false without mutating anything when there is no neighbor in
    /// that direction or either half-edge is already present.
    fn add_edge(&mut self, i: usize, j: usize, dir: Direction) -> bool {
        let Some((ni, nj)) = self.adjacent(i, j, dir) else {
            return false;
        };
        if self.has_half_edge(i, j, dir) || self.has_half_edge(ni, nj, dir.opposite()) {
            return false;
        }
        self.add_half_edge(i, j, dir);
        self.add_half_edge(ni, nj, dir.opposite());
        true
    }

    /// All triples `(i, j, dir)` where `(i, j)` is non-empty and its neighbor
    /// in `dir` is empty: the frontier along which the network can grow.
    fn frontier(&self) -> Vec<(usize, usize, Direction)> {
        (0..self.rows())
            .cartesian_product(0..self.cols())
            .filter(|&(i, j)| self.shape_at(i, j) != Shape::Empty)
            .flat_map(|(i, j)| {
                Direction::VARIANTS.iter().filter_map(move |&dir| {
                    let (ni, nj) = self.adjacent(i, j, dir)?;
                    (self.shape_at(ni, nj) == Shape::Empty).then_some((i, j, dir))
                })
            })
            .collect_vec()
    }

    /// The first pair of adjacent non-empty cells, in row-major order, with no
    /// half-edge between them in either direction. Connecting such a pair
    /// necessarily closes a cycle once the network is connected.
    fn first_closable_pair(&self) -> Option<(usize, usize, Direction)> {
        (0..self.rows())
            .cartesian_product(0..self.cols())
            .filter(|&(i, j)| self.shape_at(i, j) != Shape::Empty)
            .flat_map(|(i, j)| {
                Direction::VARIANTS.iter().filter_map(move |&dir| {
                    let (ni, nj) = self.adjacent(i, j, dir)?;
                    (self.shape_at(ni, nj) != Shape::Empty
                        && !self.has_half_edge(i, j, dir)
                        && !self.has_half_edge(ni, nj, dir.opposite()))
                    .then_some((i, j, dir))
                })
            })
            .next()
    }

    /// Build a random solved grid by incremental edge addition.
    ///
    /// Starting from a random two-endpoint seed edge, the network grows one
    /// edge at a time along a uniformly chosen frontier cell until only
    /// `nb_empty` cells remain empty; `nb_extra` further edges are then added
    /// between already-connected cells, each closing a cycle. The result is
    /// connected and well paired by construction, so it is a solved puzzle;
    /// shuffle it before handing it to a player.
    ///
    /// Returns [`None`] when the preconditions do not hold
    /// (`rows * cols >= 2`, `nb_empty <= rows * cols - 2`,
    /// `nb_extra <= rows * cols - nb_empty`) or when generation gets stuck:
    /// no frontier candidate is left, the grid loses connectivity (possible
    /// on wrapping grids where a cell can neighbor itself), or no
    /// cycle-closing pair exists. There is no partial-state rollback; retry
    /// with fresh randomness instead.
    pub fn random(
        rows: usize,
        cols: usize,
        wrapping: bool,
        nb_empty: usize,
        nb_extra: usize,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        if rows == 0
            || cols == 0
            || rows * cols < 2
            || nb_empty > rows * cols - 2
            || nb_extra > rows * cols - nb_empty
        {
            return None;
        }

        let mut grid = Self::new_empty(rows, cols, wrapping);

        // seed a two-cell solved fragment somewhere on the grid
        let i = rng.gen_range(0..rows);
        let j = rng.gen_range(0..cols);
        let dirs = Direction::VARIANTS
            .iter()
            .copied()
            .filter(|&dir| grid.adjacent(i, j, dir).is_some())
            .collect_vec();
        let dir = dirs[rng.gen_range(0..dirs.len())];
        if !grid.add_edge(i, j, dir) {
            return None;
        }
        let mut remaining = rows * cols - 2;

        while remaining > nb_empty {
            let frontier = grid.frontier();
            if frontier.is_empty() {
                return None;
            }
            let (i, j, dir) = frontier[rng.gen_range(0..frontier.len())];
            if !grid.add_edge(i, j, dir) || !grid.is_connected() {
                return None;
            }
            remaining -= 1;
        }

        for _ in 0..nb_extra {
            let (i, j, dir) = grid.first_closable_pair()?;
            if !grid.add_edge(i, j, dir) {
                return None;
            }
        }

        Some(grid)
    }

    /// Give every piece a uniformly random orientation, turning a solved grid
    /// into a puzzle. The move history is unaffected.
    pub fn shuffle_orientation(&mut self, rng: &mut impl Rng) {
        for piece in self.pieces.iter_mut() {
            piece.orientation = Direction::VARIANTS[rng.gen_range(0..Direction::VARIANTS.len())];
        }
    }
}
