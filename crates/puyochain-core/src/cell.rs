//! Cell categories and the cell value type.

use std::fmt::{self, Display};

use crate::Position;

/// The category of a single board cell.
///
/// The declaration order is load-bearing: the five colours form one contiguous
/// range (`Red..=Purple`), so [`CellKind::is_colored`] is a single range test.
///
/// # Examples
///
/// ```
/// use puyochain_core::CellKind;
///
/// assert!(CellKind::Red.is_colored());
/// assert!(!CellKind::Garbage.is_colored());
/// assert_eq!(CellKind::from_code('H'), Some(CellKind::Hard));
/// assert_eq!(CellKind::Hard.code(), 'H');
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant,
)]
#[repr(u8)]
pub enum CellKind {
    /// An empty cell.
    #[default]
    Empty = 0,
    /// A red puyo.
    Red,
    /// A green puyo.
    Green,
    /// A blue puyo.
    Blue,
    /// A yellow puyo.
    Yellow,
    /// A purple puyo.
    Purple,
    /// Plain nuisance garbage. Cleared by one adjacent pop.
    Garbage,
    /// Hard garbage. An adjacent pop downgrades it to [`CellKind::Garbage`].
    Hard,
    /// Point garbage. Adds the ruleset's point bonus to the link score when cleared.
    Point,
    /// Sun garbage. Adds bonus garbage when cleared.
    Sun,
    /// Stone. Falls like any other piece but is never cleared.
    Stone,
    /// Immovable block. Never falls and stops everything above it from falling past.
    Block,
}

impl CellKind {
    /// Every category, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Empty,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
        Self::Garbage,
        Self::Hard,
        Self::Point,
        Self::Sun,
        Self::Stone,
        Self::Block,
    ];

    /// The matchable colours.
    pub const COLORS: [Self; 5] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
    ];

    const CODES: [char; 12] = ['0', 'R', 'G', 'B', 'Y', 'P', 'J', 'H', 'N', 'X', 'S', 'L'];

    const NAMES: [&'static str; 12] = [
        "none", "red", "green", "blue", "yellow", "purple", "garbage", "hard", "point", "sun",
        "stone", "block",
    ];

    /// Returns `true` for the five matchable colours.
    #[must_use]
    #[inline]
    pub const fn is_colored(self) -> bool {
        let v = self as u8;
        v >= Self::Red as u8 && v <= Self::Purple as u8
    }

    /// Returns `true` for cells cleared as a side effect of adjacent colour pops
    /// (garbage, hard, point and sun).
    #[must_use]
    #[inline]
    pub const fn is_nuisance(self) -> bool {
        matches!(self, Self::Garbage | Self::Hard | Self::Point | Self::Sun)
    }

    /// Returns `true` if gravity applies to this cell (anything but empty and block).
    #[must_use]
    #[inline]
    pub const fn is_falling(self) -> bool {
        !matches!(self, Self::Empty | Self::Block)
    }

    /// Returns what this cell becomes when it is popped.
    ///
    /// Hard garbage has two layers and only loses one per pop. Everything else
    /// is cleared.
    #[must_use]
    #[inline]
    pub const fn popped(self) -> Self {
        match self {
            Self::Hard => Self::Garbage,
            _ => Self::Empty,
        }
    }

    /// Returns the single-character code used by the text board format.
    #[must_use]
    #[inline]
    pub const fn code(self) -> char {
        Self::CODES[self as usize]
    }

    /// Looks up a category by its character code.
    ///
    /// Returns `None` for characters that are not a defined code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::CODES
            .iter()
            .position(|&c| c == code)
            .map(|i| Self::ALL[i])
    }

    /// Returns the lowercase English name of this category.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board cell: its category together with where it sits.
///
/// Cells are values read out of a [`Board`](crate::Board); `pos` always refers to
/// the position the cell was read from. Pop sets store `Cell`s so they keep the
/// category the cell had before it was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The category of the cell.
    pub kind: CellKind,
    /// The position of the cell within its board.
    pub pos: Position,
}

impl Cell {
    /// Creates a new cell.
    #[must_use]
    #[inline]
    pub const fn new(kind: CellKind, pos: Position) -> Self {
        Self { kind, pos }
    }
}
