#![warn(missing_docs)]

//! # `pipenet`
//!
//! The rules engine for a "Net"-style pipe-connection puzzle: a rectangular
//! grid of rotatable pieces (endpoints, segments, corners, tees, crosses)
//! that the player rotates until every pipe stub pairs with a neighbor's and
//! the whole network forms a single connected component.
//! Build a [`Grid`] with [`Grid::new_empty`] or [`Grid::new_with_pieces`],
//! generate a random solvable one with [`Grid::random`], rotate pieces with
//! [`Grid::play_move`] (undoable via [`Grid::undo`] / [`Grid::redo`]), and
//! test for victory with [`Grid::is_won`].
//!
//! `pipenet` can also search puzzles mechanically: [`Grid::solve_one`] finds
//! a solved placement by backtracking and [`Grid::count_solutions`]
//! enumerates all of them.
//!
//! # Internals
//! Each `(shape, orientation)` pair maps bijectively to a 4-bit mask giving
//! the presence of a half-edge in the four cardinal directions, so edge
//! queries are a table lookup and a bit test. The win condition splits into
//! two predicates: [`Grid::is_well_paired`] (no half-edge faces a blank, a
//! cheap local check the solver prunes on) and [`Grid::is_connected`] (a
//! graph traversal over matched edges). The generator grows a random
//! spanning tree of the used cells by repeatedly connecting a random
//! non-empty frontier cell to an empty neighbor, which keeps the network
//! connected and well paired by construction; optional extra edges then
//! close cycles. Grids may be toroidal ("wrapping"), in which case adjacency
//! is computed modulo the dimensions.
//!
//! Randomness is always supplied by the caller as a [`rand::Rng`], so
//! generation is reproducible from a seed. Grids round-trip through a flat
//! text snapshot format via [`Grid::to_text`] / [`Grid::from_text`].

pub use format::FormatError;
pub use grid::Grid;
pub use piece::{decode, encode, Direction, Piece, Shape};
pub use rules::EdgeStatus;

mod format;
mod generate;
mod grid;
mod history;
mod piece;
mod rules;
mod solver;
