use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;
use strum::VariantArray;

use crate::grid::Grid;
use crate::piece::{Direction, Shape};

/// The relationship between a cell's half-edge (or its absence) and the
/// reciprocal half-edge of its neighbor.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EdgeStatus {
    /// The cell has no half-edge in that direction, or the direction points
    /// off a non-wrapping grid.
    NoEdge,
    /// The neighbor answers with a reciprocal half-edge.
    Match,
    /// The neighbor has no reciprocal half-edge.
    Mismatch,
}

impl Grid {
    /// Classify the half-edge of cell `(i, j)` in direction `dir` against its
    /// neighbor.
    pub fn check_edge(&self, i: usize, j: usize, dir: Direction) -> EdgeStatus {
        if !self.has_half_edge(i, j, dir) {
            return EdgeStatus::NoEdge;
        }
        match self.adjacent(i, j, dir) {
            None => EdgeStatus::NoEdge,
            Some((ni, nj)) => {
                if self.has_half_edge(ni, nj, dir.opposite()) {
                    EdgeStatus::Match
                } else {
                    EdgeStatus::Mismatch
                }
            }
        }
    }

    /// Whether no half-edge anywhere in the grid is a [`Mismatch`](EdgeStatus::Mismatch).
    /// A grid of empty pieces is trivially well paired.
    pub fn is_well_paired(&self) -> bool {
        (0..self.rows()).all(|i| {
            (0..self.cols()).all(|j| {
                Direction::VARIANTS
                    .iter()
                    .all(|dir| self.check_edge(i, j, *dir) != EdgeStatus::Mismatch)
            })
        })
    }

    /// Whether every non-empty cell can reach every other by following
    /// matched edges only. A grid with no non-empty cells is vacuously
    /// connected; two disjoint well-formed sub-networks are not.
    pub fn is_connected(&self) -> bool {
        let mut graph: UnGraphMap<(usize, usize), ()> = UnGraphMap::new();
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                if self.shape_at(i, j) == Shape::Empty {
                    continue;
                }
                graph.add_node((i, j));
                for dir in Direction::VARIANTS {
                    if self.check_edge(i, j, *dir) == EdgeStatus::Match {
                        // a wrapping single row or column can pair a cell with
                        // itself; that edge says nothing about connectivity
                        let neighbor = self.adjacent(i, j, *dir).unwrap();
                        if neighbor != (i, j) {
                            graph.add_edge((i, j), neighbor, ());
                        }
                    }
                }
            }
        }

        let Some(start) = graph.nodes().next() else {
            return true;
        };
        let mut dfs = Dfs::new(&graph, start);
        let mut reached = 0;
        while dfs.next(&graph).is_some() {
            reached += 1;
        }
        reached == graph.node_count()
    }

    /// The win condition: every half-edge is matched and the network is one
    /// connected component.
    pub fn is_won(&self) -> bool {
        self.is_well_paired() && self.is_connected()
    }
}
