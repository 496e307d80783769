//! Character-coded board text.
//!
//! A board is written one row per line, top row first, with one character
//! code per cell:
//!
//! | Code | Cell                      |
//! |------|---------------------------|
//! | `0`  | [`CellKind::Empty`]       |
//! | `R`  | [`CellKind::Red`]         |
//! | `G`  | [`CellKind::Green`]       |
//! | `B`  | [`CellKind::Blue`]        |
//! | `Y`  | [`CellKind::Yellow`]      |
//! | `P`  | [`CellKind::Purple`]      |
//! | `J`  | [`CellKind::Garbage`]     |
//! | `H`  | [`CellKind::Hard`]        |
//! | `N`  | [`CellKind::Point`]       |
//! | `X`  | [`CellKind::Sun`]         |
//! | `S`  | [`CellKind::Stone`]       |
//! | `L`  | [`CellKind::Block`]       |
//!
//! Blank lines and whitespace are ignored, so boards can be indented inside
//! test sources.
//!
//! # Examples
//!
//! ```
//! use puyochain_core::{Board, CellKind, Position};
//!
//! let board: Board = "
//!     000
//!     R0G
//!     RLG
//! "
//! .parse()?;
//! assert_eq!(board.cols(), 3);
//! assert_eq!(board.rows(), 3);
//! assert_eq!(board[Position::new(1, 2)], CellKind::Block);
//! assert_eq!(board.to_string(), "000\nR0G\nRLG");
//! # Ok::<(), puyochain_core::ParseBoardError>(())
//! ```

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Board, CellKind, Position, Ruleset};

/// An error returned when board text cannot be converted into a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character is not a defined cell code.
    #[display("invalid cell code {code:?} at ({x}, {y})")]
    InvalidCellCode {
        /// The offending character.
        code: char,
        /// Column of the offending character.
        x: usize,
        /// Row of the offending character.
        y: usize,
    },
    /// A row or column does not have the same length as the first one.
    #[display("line {line} has {found} cells, expected {expected}")]
    RaggedLine {
        /// Index of the offending row (or column, for column-major input).
        line: usize,
        /// Length of the first line.
        expected: usize,
        /// Length of the offending line.
        found: usize,
    },
    /// The input contains no cells.
    #[display("board text is empty")]
    EmptyBoard,
    /// The board does not have the dimensions required by the ruleset.
    #[display("board is {cols}x{rows}, ruleset requires {expected_cols}x{expected_rows}")]
    DimensionMismatch {
        /// Columns required by the ruleset.
        expected_cols: usize,
        /// Rows required by the ruleset.
        expected_rows: usize,
        /// Columns found.
        cols: usize,
        /// Rows found.
        rows: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = code_lines(s.lines());
        let (rows, cols) = checked_dimensions(&lines)?;
        let mut board = Board::new(cols, rows, CellKind::Empty);
        for (y, line) in lines.iter().enumerate() {
            for (x, &code) in line.iter().enumerate() {
                board[Position::new(x, y)] = decode(code, x, y)?;
            }
        }
        Ok(board)
    }
}

impl Board {
    /// Builds a board from column-major text: one string per column, each
    /// listing that column's cells from top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] if a code is invalid, the columns differ in
    /// length, or there are no cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use puyochain_core::{Board, CellKind, Position};
    ///
    /// let board = Board::from_columns(&["0RR", "00G"])?;
    /// assert_eq!(board[Position::new(0, 2)], CellKind::Red);
    /// assert_eq!(board.to_string(), "00\nR0\nRG");
    /// # Ok::<(), puyochain_core::ParseBoardError>(())
    /// ```
    pub fn from_columns<S>(columns: &[S]) -> Result<Self, ParseBoardError>
    where
        S: AsRef<str>,
    {
        let lines = code_lines(columns.iter().map(AsRef::as_ref));
        let (cols, rows) = checked_dimensions(&lines)?;
        let mut board = Board::new(cols, rows, CellKind::Empty);
        for (x, line) in lines.iter().enumerate() {
            for (y, &code) in line.iter().enumerate() {
                board[Position::new(x, y)] = decode(code, x, y)?;
            }
        }
        Ok(board)
    }
}

/// Parses board text and checks it against the ruleset's dimensions.
///
/// # Errors
///
/// Returns [`ParseBoardError::DimensionMismatch`] if the board size differs from
/// the ruleset, or any error [`Board::from_str`] can return.
pub fn parse_board(s: &str, ruleset: &Ruleset) -> Result<Board, ParseBoardError> {
    let board = Board::from_str(s)?;
    if !board.matches_ruleset(ruleset) {
        return Err(ParseBoardError::DimensionMismatch {
            expected_cols: ruleset.cols,
            expected_rows: ruleset.rows,
            cols: board.cols(),
            rows: board.rows(),
        });
    }
    Ok(board)
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.cols() {
                f.write_char(self[Position::new(x, y)].code())?;
            }
        }
        Ok(())
    }
}

fn code_lines<'a, I>(lines: I) -> Vec<Vec<char>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Returns `(line count, line length)`.
fn checked_dimensions(lines: &[Vec<char>]) -> Result<(usize, usize), ParseBoardError> {
    let Some(first) = lines.first() else {
        return Err(ParseBoardError::EmptyBoard);
    };
    let expected = first.len();
    if let Some((line, found)) = lines
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(ParseBoardError::RaggedLine {
            line,
            expected,
            found,
        });
    }
    Ok((lines.len(), expected))
}

fn decode(code: char, x: usize, y: usize) -> Result<CellKind, ParseBoardError> {
    CellKind::from_code(code).ok_or(ParseBoardError::InvalidCellCode { code, x, y })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_all_codes() {
        let board: Board = "0RGBYP\nJHNXSL".parse().unwrap();
        let kinds: Vec<_> = board.iter().map(|(_, &kind)| kind).collect();
        assert_eq!(kinds, CellKind::ALL);
    }

    #[test]
    fn test_parse_ignores_indentation_and_blank_lines() {
        let board: Board = "

            R 0
            0 G

        "
        .parse()
        .unwrap();
        assert_eq!(board.cols(), 2);
        assert_eq!(board.rows(), 2);
        assert_eq!(board[Position::new(1, 1)], CellKind::Green);
    }

    #[test]
    fn test_invalid_code_reports_position() {
        let err = "000\n0Q0".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            ParseBoardError::InvalidCellCode {
                code: 'Q',
                x: 1,
                y: 1
            }
        );
        assert_eq!(err.to_string(), "invalid cell code 'Q' at (1, 1)");
    }

    #[test]
    fn test_ragged_and_empty() {
        assert_eq!(
            "000\n00".parse::<Board>(),
            Err(ParseBoardError::RaggedLine {
                line: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(" \n\n".parse::<Board>(), Err(ParseBoardError::EmptyBoard));
    }

    #[test]
    fn test_parse_board_checks_dimensions() {
        let ruleset = Ruleset::default();
        let err = parse_board("000\n000", &ruleset).unwrap_err();
        assert_eq!(
            err,
            ParseBoardError::DimensionMismatch {
                expected_cols: 6,
                expected_rows: 13,
                cols: 3,
                rows: 2
            }
        );

        let text = Board::for_ruleset(&ruleset).to_string();
        assert!(parse_board(&text, &ruleset).is_ok());
    }

    #[test]
    fn test_from_columns_matches_row_text() {
        let by_columns = Board::from_columns(&["0JH", "RGB"]).unwrap();
        let by_rows: Board = "0R\nJG\nHB".parse().unwrap();
        assert_eq!(by_columns, by_rows);
    }

    #[test]
    fn test_from_columns_invalid_code() {
        assert_eq!(
            Board::from_columns(&["00", "0?"]),
            Err(ParseBoardError::InvalidCellCode {
                code: '?',
                x: 1,
                y: 1
            })
        );
    }

    fn board_strategy() -> impl Strategy<Value = Board> {
        (1usize..=8, 1usize..=14).prop_flat_map(|(cols, rows)| {
            prop::collection::vec(prop::sample::select(CellKind::ALL.to_vec()), cols * rows)
                .prop_map(move |kinds| Board::from_fn(cols, rows, |pos| kinds[pos.y() * cols + pos.x()]))
        })
    }

    proptest! {
        #[test]
        fn prop_text_round_trip(board in board_strategy()) {
            let text = board.to_string();
            let parsed: Board = text.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), text);
            prop_assert_eq!(parsed, board);
        }
    }
}
