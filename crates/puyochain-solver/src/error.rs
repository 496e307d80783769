use puyochain_core::ParseBoardError;

/// Errors returned by [`ChainSolver`](crate::ChainSolver) constructors.
///
/// Simulation itself cannot fail; only building a solver from text input can.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// The board text could not be parsed or does not fit the ruleset.
    #[display("invalid board: {_0}")]
    InvalidBoard(ParseBoardError),
}
