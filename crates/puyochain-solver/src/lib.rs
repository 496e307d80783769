//! Chain resolution for Puyo Puyo boards.
//!
//! [`ChainSolver`] applies gravity and group clearing to a [`Board`] until it
//! stabilises, scoring each link and converting score into garbage according
//! to a [`Ruleset`].
//!
//! # Overview
//!
//! The solver is a small state machine driven by [`Action`]:
//!
//! 1. **Drop** - every falling cell moves down to the floor or onto the
//!    nearest block below it.
//! 2. **Pop** - same-coloured groups of at least `puyo_to_pop` cells are
//!    cleared together with adjacent garbage; hard garbage only loses one
//!    layer.
//! 3. **Score** - each link is scored from the chain power, colour and group
//!    bonus tables. Score is converted into garbage with a carried remainder.
//!
//! Every drop and pop produces a [`ResolutionState`]. In
//! [`SolverMode::History`] the solver keeps them all for replay.
//!
//! # Examples
//!
//! ```
//! use puyochain_core::{Board, Ruleset};
//! use puyochain_solver::ChainSolver;
//!
//! let board = Board::from_columns(&[
//!     "000000000000R",
//!     "000000000000R",
//!     "00000000000GR",
//!     "00000000000GR",
//!     "0000000000000",
//!     "00000000000GG",
//! ])?;
//! let mut solver = ChainSolver::new(board, Ruleset::default());
//! solver.simulate_chain();
//! let summary = solver.summary();
//! assert_eq!(summary.chain_length, 1);
//! assert_eq!(summary.total_score, 40);
//! # Ok::<(), puyochain_core::ParseBoardError>(())
//! ```
//!
//! [`Board`]: puyochain_core::Board
//! [`Ruleset`]: puyochain_core::Ruleset

pub use self::{chain_solver::*, error::*, state::*};

mod chain_solver;
mod error;
mod gravity;
mod groups;
mod scoring;
mod state;

#[cfg(test)]
mod testing;
