//! Fixed-size column-major grids.
//!
//! [`Grid`] is the storage used for the board itself and for the solver's
//! auxiliary scalar grids (drop distances and visited flags). [`Board`] is the
//! board specialisation with cell-level helpers.

use std::ops::{Index, IndexMut};

use crate::{Cell, CellKind, Direction, Position, Ruleset};

/// A fixed `cols × rows` grid stored column by column.
///
/// Dimensions are fixed at construction. Every in-range position holds exactly
/// one value. Cloning produces an independent deep copy.
///
/// # Examples
///
/// ```
/// use puyochain_core::{Grid, Position};
///
/// let mut distances = Grid::new(6, 13, 0_usize);
/// distances[Position::new(2, 12)] = 3;
/// assert_eq!(distances.column(2)[12], 3);
///
/// distances.fill(0);
/// assert!(distances.column(2).iter().all(|&d| d == 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn new(cols: usize, rows: usize, value: T) -> Self {
        Self {
            cols,
            rows,
            cells: vec![value; cols * rows],
        }
    }

    /// Resets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f` for every position.
    #[must_use]
    pub fn from_fn<F>(cols: usize, rows: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        let mut cells = Vec::with_capacity(cols * rows);
        for x in 0..cols {
            for y in 0..rows {
                cells.push(f(Position::new(x, y)));
            }
        }
        Self { cols, rows, cells }
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.cols && pos.y() < self.rows
    }

    /// Returns the neighbour of `pos` in `dir`, if it lies inside the grid.
    #[must_use]
    #[inline]
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        pos.step(dir).filter(|&p| self.contains(p))
    }

    /// Returns a reference to the value at `pos`, or `None` if out of range.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[self.offset(pos)])
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if out of range.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if self.contains(pos) {
            let i = self.offset(pos);
            Some(&mut self.cells[i])
        } else {
            None
        }
    }

    /// Returns column `x` from top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    #[must_use]
    #[inline]
    pub fn column(&self, x: usize) -> &[T] {
        assert!(x < self.cols, "column {x} out of range (cols = {})", self.cols);
        &self.cells[x * self.rows..(x + 1) * self.rows]
    }

    /// Returns column `x` from top to bottom, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    #[must_use]
    #[inline]
    pub fn column_mut(&mut self, x: usize) -> &mut [T] {
        assert!(x < self.cols, "column {x} out of range (cols = {})", self.cols);
        &mut self.cells[x * self.rows..(x + 1) * self.rows]
    }

    /// Returns every position in row-major scan order: top to bottom, and left to
    /// right within a row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let (cols, rows) = (self.cols, self.rows);
        (0..rows).flat_map(move |y| (0..cols).map(move |x| Position::new(x, y)))
    }

    /// Returns every `(position, value)` pair in row-major scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().map(|pos| (pos, &self[pos]))
    }

    #[inline]
    fn offset(&self, pos: Position) -> usize {
        pos.x() * self.rows + pos.y()
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: Position) -> &T {
        assert!(self.contains(pos), "position {pos} out of range");
        &self.cells[self.offset(pos)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        assert!(self.contains(pos), "position {pos} out of range");
        let i = self.offset(pos);
        &mut self.cells[i]
    }
}

/// A puzzle board: a grid of cell categories.
pub type Board = Grid<CellKind>;

impl Grid<CellKind> {
    /// Creates an empty board with the ruleset's dimensions.
    #[must_use]
    pub fn for_ruleset(ruleset: &Ruleset) -> Self {
        Self::new(ruleset.cols, ruleset.rows, CellKind::Empty)
    }

    /// Returns `true` if the board has the ruleset's dimensions.
    #[must_use]
    pub fn matches_ruleset(&self, ruleset: &Ruleset) -> bool {
        self.cols == ruleset.cols && self.rows == ruleset.rows
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        Cell::new(self[pos], pos)
    }

    /// Returns every cell in row-major scan order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        self.iter().map(|(pos, &kind)| Cell::new(kind, pos))
    }

    /// Counts the cells of the given category.
    #[must_use]
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Counts the matchable coloured cells.
    #[must_use]
    pub fn count_colored(&self) -> usize {
        self.cells.iter().filter(|k| k.is_colored()).count()
    }

    /// Returns `true` if no falling cell has an empty cell beneath it.
    ///
    /// A cell resting on a [`CellKind::Block`] counts as settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (0..self.cols).all(|x| {
            self.column(x)
                .windows(2)
                .all(|w| !(w[0].is_falling() && w[1].is_empty()))
        })
    }
}
