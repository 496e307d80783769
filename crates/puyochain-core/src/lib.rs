//! Core data structures for Puyo Puyo chain simulation.
//!
//! This crate provides the board model shared by the solver and its callers.
//!
//! # Overview
//!
//! 1. **Cells** - [`CellKind`] is the category of one board cell (empty, one of
//!    five colours, the garbage family, stone or block). [`Cell`] pairs a
//!    category with its [`Position`].
//!
//! 2. **Grids** - [`Grid`] is a fixed column-major 2D container. [`Board`] is a
//!    grid of cell categories; the solver also uses `Grid<usize>` for drop
//!    distances and `Grid<bool>` for visited flags.
//!
//! 3. **Rules** - [`Ruleset`] carries board dimensions, the minimum group size and
//!    the scoring tables. The solver only reads it.
//!
//! 4. **Text** - [`text`] converts boards to and from one-character-per-cell
//!    text. This is the boundary format for fixtures and command-line input.
//!
//! # Examples
//!
//! ```
//! use puyochain_core::{Board, CellKind, Position, Ruleset, parse_board};
//!
//! let ruleset = Ruleset::default();
//! let mut board = Board::for_ruleset(&ruleset);
//! board[Position::new(0, 12)] = CellKind::Red;
//!
//! let text = board.to_string();
//! let parsed = parse_board(&text, &ruleset)?;
//! assert_eq!(parsed, board);
//! # Ok::<(), puyochain_core::ParseBoardError>(())
//! ```

pub mod cell;
pub mod grid;
pub mod position;
pub mod ruleset;
pub mod text;

pub use self::{
    cell::{Cell, CellKind},
    grid::{Board, Grid},
    position::{Direction, Position},
    ruleset::Ruleset,
    text::{ParseBoardError, parse_board},
};
