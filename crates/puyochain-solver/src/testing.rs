//! Test utilities for chain resolution.
//!
//! [`ChainTester`] wraps a [`ChainSolver`] with fluent stepping and assertion
//! methods, so a test reads as a sequence of board snapshots:
//!
//! ```ignore
//! ChainTester::from_str(
//!     "
//!     000
//!     R00
//!     R00
//!     RRG
//!     ",
//! )
//! .run()
//! .assert_chain_length(1)
//! .assert_total_score(40);
//! ```

use puyochain_core::{Board, CellKind, Position, Ruleset};

use crate::{Action, ChainSolver, ResolutionState, SolverMode};

/// A test harness for driving a [`ChainSolver`].
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct ChainTester {
    solver: ChainSolver,
}

impl ChainTester {
    /// Creates a tester for a board with a ruleset sized to fit it.
    #[track_caller]
    pub fn new(board: Board) -> Self {
        let ruleset = Ruleset {
            cols: board.cols(),
            rows: board.rows(),
            ..Ruleset::default()
        };
        Self {
            solver: ChainSolver::new(board, ruleset),
        }
    }

    /// Creates a tester from row-major board text.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Creates a tester from column-major board text.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid board.
    #[track_caller]
    pub fn from_columns(columns: &[&str]) -> Self {
        Self::new(Board::from_columns(columns).unwrap())
    }

    /// Replaces the ruleset and resets the solver.
    #[must_use]
    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.solver.reset(None, Some(ruleset));
        self
    }

    /// Switches the recording mode and resets the solver.
    #[must_use]
    pub fn with_mode(self, mode: SolverMode) -> Self {
        let board = self.solver.initial_board().clone();
        let ruleset = self.solver.ruleset().clone();
        Self {
            solver: ChainSolver::with_mode(board, ruleset, mode),
        }
    }

    /// Returns the wrapped solver.
    pub fn solver(&self) -> &ChainSolver {
        &self.solver
    }

    fn latest(&self) -> &ResolutionState {
        self.solver.latest_state()
    }

    /// Advances the solver by one step.
    ///
    /// # Panics
    ///
    /// Panics if the chain had already finished.
    #[track_caller]
    pub fn step(mut self) -> Self {
        assert!(
            self.solver.step(),
            "Expected the solver to advance, but it had already finished"
        );
        self
    }

    /// Advances the solver by `times` steps.
    #[track_caller]
    pub fn steps(mut self, times: usize) -> Self {
        for _ in 0..times {
            self = self.step();
        }
        self
    }

    /// Steps until the latest state's action is `action`.
    ///
    /// # Panics
    ///
    /// Panics if the chain finishes first.
    #[track_caller]
    pub fn step_until(mut self, action: Action) -> Self {
        while self.latest().action() != action {
            self = self.step();
        }
        self
    }

    /// Resolves the whole chain.
    #[track_caller]
    pub fn run(mut self) -> Self {
        self.solver.simulate_chain();
        self
    }

    /// Asserts the latest state's action.
    #[track_caller]
    pub fn assert_action(self, expected: Action) -> Self {
        let actual = self.latest().action();
        assert_eq!(
            actual, expected,
            "Expected action {expected}, but the solver is at {actual}"
        );
        self
    }

    /// Asserts the latest board against row-major text.
    #[track_caller]
    pub fn assert_board(self, expected: &str) -> Self {
        let expected: Board = expected.parse().unwrap();
        let actual = self.latest().board();
        assert_eq!(
            actual, &expected,
            "Expected board:\n{expected}\nbut found:\n{actual}"
        );
        self
    }

    /// Asserts the latest board against column-major text.
    #[track_caller]
    pub fn assert_board_columns(self, expected: &[&str]) -> Self {
        let expected = Board::from_columns(expected).unwrap();
        let actual = self.latest().board();
        assert_eq!(
            actual, &expected,
            "Expected board:\n{expected}\nbut found:\n{actual}"
        );
        self
    }

    /// Asserts the kind of one cell on the latest board.
    #[track_caller]
    pub fn assert_cell(self, pos: Position, expected: CellKind) -> Self {
        let actual = self.latest().board()[pos];
        assert_eq!(
            actual, expected,
            "Expected {expected} at {pos}, but found {actual}"
        );
        self
    }

    /// Asserts the number of links popped so far.
    #[track_caller]
    pub fn assert_chain_length(self, expected: usize) -> Self {
        let actual = self.latest().chain_length();
        assert_eq!(
            actual, expected,
            "Expected chain length {expected}, but got {actual}"
        );
        self
    }

    /// Asserts the running total score.
    #[track_caller]
    pub fn assert_total_score(self, expected: u64) -> Self {
        let actual = self.latest().total_score();
        assert_eq!(
            actual, expected,
            "Expected total score {expected}, but got {actual}"
        );
        self
    }

    /// Asserts the running total garbage.
    #[track_caller]
    pub fn assert_total_garbage(self, expected: u64) -> Self {
        let actual = self.latest().total_garbage();
        assert_eq!(
            actual, expected,
            "Expected total garbage {expected}, but got {actual}"
        );
        self
    }

    /// Asserts the score of the link scored in the latest state.
    #[track_caller]
    pub fn assert_link_score(self, expected: u64) -> Self {
        let actual = self.latest().link_score();
        assert_eq!(
            actual, expected,
            "Expected link score {expected}, but got {actual}"
        );
        self
    }

    /// Asserts the number of recorded states.
    #[track_caller]
    pub fn assert_state_count(self, expected: usize) -> Self {
        let actual = self.solver.len();
        assert_eq!(
            actual, expected,
            "Expected {expected} recorded states, but found {actual}"
        );
        self
    }
}
