//! Resolution states recorded by the chain solver.

use std::collections::BTreeSet;

use puyochain_core::{Board, Cell, CellKind, Grid, Position};

/// The solver's state-machine cursor.
///
/// A chain resolves as
/// `CheckForDrops → (NeedsToDrop →) CheckForPops → NeedsToPop → CheckForDrops → …`
/// until a `CheckForPops` finds nothing and the state becomes `Finished`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Action {
    /// Drop distances have not been computed for the current board.
    #[display("check for drops")]
    CheckForDrops,
    /// Drop distances are computed and at least one cell has to fall.
    #[display("needs to drop")]
    NeedsToDrop,
    /// The board is settled and has not been searched for groups yet.
    #[display("check for pops")]
    CheckForPops,
    /// Groups have been found and scored, and are waiting to be cleared.
    #[display("needs to pop")]
    NeedsToPop,
    /// The board is settled and nothing can pop. Terminal.
    #[display("finished")]
    Finished,
}

/// A connected group of same-coloured cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuyoGroup {
    kind: CellKind,
    cells: Vec<Position>,
}

impl PuyoGroup {
    pub(crate) fn new(kind: CellKind, cells: Vec<Position>) -> Self {
        debug_assert!(kind.is_colored());
        Self { kind, cells }
    }

    /// Returns the colour of the group.
    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns the positions of the group's cells, in discovery order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the number of cells in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the group has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if the group contains `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Score and garbage breakdown of a single link.
///
/// Two score figures are kept because the rules use two formulas:
/// `link_score = 10 × PC × bonus + PB` feeds garbage conversion, while the
/// running total grows by `(10 × PC + PB) × bonus`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkScore {
    /// Chain length this link was scored at (1-indexed).
    pub chain: usize,
    /// Number of coloured cells popped (PC).
    pub puyo_count: usize,
    /// Number of distinct colours popped.
    pub colors: usize,
    /// Chain power table value.
    pub chain_power: u64,
    /// Colour bonus table value.
    pub color_bonus: u64,
    /// Sum of group bonus table values over every popped group.
    pub group_bonus: u64,
    /// `clamp(chain_power + color_bonus + group_bonus, 1, 999)`.
    pub total_bonus: u64,
    /// Point garbage bonus (PB).
    pub point_bonus: u64,
    /// `10 × PC × total_bonus + PB`.
    pub link_score: u64,
    /// `(10 × PC + PB) × total_bonus`, added to the running total score.
    pub score_gain: u64,
    /// Whole garbage units produced by this link.
    pub link_garbage: u64,
    /// Extra garbage from popped sun garbage.
    pub sun_bonus: u64,
    /// Score points left over after conversion, carried to the next link.
    pub leftover_points: u64,
}

/// One snapshot of the chain resolution.
///
/// A state holds the board, the running totals up to this point, and the
/// pending work for its [`Action`]: drop distances while `NeedsToDrop`, pop sets
/// while `NeedsToPop`. Historical states keep their pop sets, so a replay can
/// show what was cleared at each link.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionState {
    pub(crate) board: Board,
    pub(crate) link: LinkScore,
    pub(crate) total_score: u64,
    pub(crate) total_garbage: u64,
    pub(crate) old_leftover: u64,
    pub(crate) new_leftover: u64,
    pub(crate) chain_length: usize,
    pub(crate) to_drop: Grid<usize>,
    pub(crate) colors_to_pop: Vec<PuyoGroup>,
    pub(crate) garbage_to_pop: Vec<Cell>,
    pub(crate) points_to_pop: BTreeSet<Position>,
    pub(crate) suns_to_pop: BTreeSet<Position>,
    pub(crate) action: Action,
}

impl ResolutionState {
    pub(crate) fn initial(board: Board) -> Self {
        let to_drop = Grid::new(board.cols(), board.rows(), 0);
        Self {
            board,
            link: LinkScore::default(),
            total_score: 0,
            total_garbage: 0,
            old_leftover: 0,
            new_leftover: 0,
            chain_length: 0,
            to_drop,
            colors_to_pop: Vec::new(),
            garbage_to_pop: Vec::new(),
            points_to_pop: BTreeSet::new(),
            suns_to_pop: BTreeSet::new(),
            action: Action::CheckForDrops,
        }
    }

    /// Drops the pending work once it has been applied and readies the state
    /// for the next link.
    pub(crate) fn clear_pending(&mut self) {
        self.to_drop.fill(0);
        self.colors_to_pop.clear();
        self.garbage_to_pop.clear();
        self.points_to_pop.clear();
        self.suns_to_pop.clear();
        self.link = LinkScore::default();
        self.old_leftover = self.new_leftover;
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the next action.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// Returns the number of links popped so far.
    #[must_use]
    pub fn chain_length(&self) -> usize {
        self.chain_length
    }

    /// Returns the breakdown of the link scored in this state.
    ///
    /// All fields are zero unless this state found groups to pop.
    #[must_use]
    pub fn link(&self) -> &LinkScore {
        &self.link
    }

    /// Returns the score of the link scored in this state.
    #[must_use]
    pub fn link_score(&self) -> u64 {
        self.link.link_score
    }

    /// Returns the garbage produced by the link scored in this state.
    #[must_use]
    pub fn link_garbage(&self) -> u64 {
        self.link.link_garbage
    }

    /// Returns the running total score.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Returns the running total garbage, including sun bonuses.
    #[must_use]
    pub fn total_garbage(&self) -> u64 {
        self.total_garbage
    }

    /// Returns the leftover score points carried into this state's link.
    #[must_use]
    pub fn old_leftover_points(&self) -> u64 {
        self.old_leftover
    }

    /// Returns the leftover score points carried out to the next link.
    #[must_use]
    pub fn new_leftover_points(&self) -> u64 {
        self.new_leftover
    }

    /// Returns each cell's pending fall distance.
    ///
    /// Only meaningful while the action is [`Action::NeedsToDrop`].
    #[must_use]
    pub fn to_drop(&self) -> &Grid<usize> {
        &self.to_drop
    }

    /// Returns the coloured groups found in this state.
    #[must_use]
    pub fn colors_to_pop(&self) -> &[PuyoGroup] {
        &self.colors_to_pop
    }

    /// Returns the garbage cells adjacent to the popped groups.
    ///
    /// A garbage cell touching several popped cells appears once per contact.
    #[must_use]
    pub fn garbage_to_pop(&self) -> &[Cell] {
        &self.garbage_to_pop
    }

    /// Returns the distinct point garbage positions cleared by this state's link.
    #[must_use]
    pub fn points_to_pop(&self) -> &BTreeSet<Position> {
        &self.points_to_pop
    }

    /// Returns the distinct sun garbage positions cleared by this state's link.
    #[must_use]
    pub fn suns_to_pop(&self) -> &BTreeSet<Position> {
        &self.suns_to_pop
    }

    /// Returns `true` if a drop is pending.
    #[must_use]
    pub fn requires_drop(&self) -> bool {
        self.action.is_needs_to_drop()
    }

    /// Returns `true` if a pop is pending.
    #[must_use]
    pub fn requires_pop(&self) -> bool {
        self.action.is_needs_to_pop()
    }
}
