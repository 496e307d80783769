use std::iter;

use puyochain_core::{Board, CellKind, Grid, Ruleset, parse_board};

use crate::{
    Action, LinkScore, PuyoGroup, ResolutionState, SolverError,
    gravity::{apply_drops, compute_drops},
    groups::{collect_nuisance, find_groups},
    scoring::score_link,
};

/// How a [`ChainSolver`] records its progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SolverMode {
    /// Keep a snapshot of every state, so the whole resolution can be replayed.
    #[default]
    History,
    /// Keep only the latest state.
    InPlace,
}

/// Final totals of a resolved chain.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChainSummary {
    /// Number of links popped.
    pub chain_length: usize,
    /// Total score.
    pub total_score: u64,
    /// Total garbage, including sun bonuses.
    pub total_garbage: u64,
    /// Per-link breakdowns in chain order.
    pub links: Vec<LinkScore>,
}

/// A drop/pop state machine that resolves a chain on a board.
///
/// Each call to [`step`](Self::step) advances the machine by one
/// [`Action`]. Dropping and popping produce a new state, which in
/// [`SolverMode::History`] is appended after a snapshot of the previous one;
/// [`SolverMode::InPlace`] overwrites the single state it keeps. Both modes
/// resolve to the same totals.
///
/// # Examples
///
/// ```
/// use puyochain_core::Ruleset;
/// use puyochain_solver::ChainSolver;
///
/// let board = "
///     0000
///     R000
///     RR00
///     RGGG
/// ";
/// let ruleset = Ruleset {
///     cols: 4,
///     rows: 4,
///     ..Ruleset::default()
/// };
/// let mut solver = ChainSolver::from_text(board, ruleset)?;
/// let state = solver.simulate_chain();
/// assert_eq!(state.chain_length(), 1);
/// assert_eq!(state.total_score(), 40);
/// # Ok::<(), puyochain_solver::SolverError>(())
/// ```
///
/// # Step-by-step resolution
///
/// ```
/// use puyochain_core::Ruleset;
/// use puyochain_solver::{Action, ChainSolver};
///
/// let ruleset = Ruleset {
///     cols: 1,
///     rows: 6,
///     ..Ruleset::default()
/// };
/// let mut solver = ChainSolver::from_text("0\nB\n0\nB\nB\nB", ruleset)?;
///
/// assert!(solver.step());
/// assert_eq!(solver.latest_state().action(), Action::NeedsToDrop);
///
/// while solver.step() {
///     println!("{}", solver.latest_state().action());
/// }
/// assert_eq!(solver.latest_state().chain_length(), 1);
/// # Ok::<(), puyochain_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChainSolver {
    ruleset: Ruleset,
    mode: SolverMode,
    initial: Board,
    history: Vec<ResolutionState>,
    current: ResolutionState,
    visited: Grid<bool>,
    links: Vec<LinkScore>,
}

impl ChainSolver {
    /// Creates a solver in [`SolverMode::History`].
    ///
    /// The board's own dimensions are used for the simulation. Only the
    /// hidden-row count, group size and scoring tables are read from the
    /// ruleset.
    #[must_use]
    pub fn new(board: Board, ruleset: Ruleset) -> Self {
        Self::with_mode(board, ruleset, SolverMode::History)
    }

    /// Creates a solver in [`SolverMode::InPlace`].
    #[must_use]
    pub fn new_in_place(board: Board, ruleset: Ruleset) -> Self {
        Self::with_mode(board, ruleset, SolverMode::InPlace)
    }

    /// Creates a solver with an explicit mode.
    #[must_use]
    pub fn with_mode(board: Board, ruleset: Ruleset, mode: SolverMode) -> Self {
        let visited = Grid::new(board.cols(), board.rows(), false);
        Self {
            ruleset,
            mode,
            current: ResolutionState::initial(board.clone()),
            initial: board,
            history: Vec::new(),
            visited,
            links: Vec::new(),
        }
    }

    /// Parses a character-coded board and creates a solver in
    /// [`SolverMode::History`].
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidBoard`] if the text is not a valid board
    /// of the ruleset's dimensions.
    pub fn from_text(text: &str, ruleset: Ruleset) -> Result<Self, SolverError> {
        let board = parse_board(text, &ruleset)?;
        Ok(Self::new(board, ruleset))
    }

    /// Returns the ruleset.
    #[must_use]
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Returns the recording mode.
    #[must_use]
    pub fn mode(&self) -> SolverMode {
        self.mode
    }

    /// Returns the board the solver started from.
    #[must_use]
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// Returns the number of states available through [`state`](Self::state).
    ///
    /// Always `1` in [`SolverMode::InPlace`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len() + 1
    }

    /// Always returns `false`: a solver holds at least its initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the state at `index`, where `0` is the input and
    /// `len() - 1` is the latest state.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<&ResolutionState> {
        match index.cmp(&self.history.len()) {
            std::cmp::Ordering::Less => self.history.get(index),
            std::cmp::Ordering::Equal => Some(&self.current),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// Returns the latest state.
    #[must_use]
    pub fn latest_state(&self) -> &ResolutionState {
        &self.current
    }

    /// Returns every recorded state, oldest first.
    pub fn states(&self) -> impl Iterator<Item = &ResolutionState> {
        self.history.iter().chain(iter::once(&self.current))
    }

    /// Returns the breakdown of every link popped so far.
    #[must_use]
    pub fn links(&self) -> &[LinkScore] {
        &self.links
    }

    /// Returns `true` if the chain has fully resolved.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current.action.is_finished()
    }

    /// Returns the totals accumulated so far.
    #[must_use]
    pub fn summary(&self) -> ChainSummary {
        ChainSummary {
            chain_length: self.current.chain_length,
            total_score: self.current.total_score,
            total_garbage: self.current.total_garbage,
            links: self.links.clone(),
        }
    }

    /// Advances the state machine by one action.
    ///
    /// A `CheckForDrops` step that finds nothing to drop goes straight on to
    /// the pop check, so every step except the last changes the latest state.
    ///
    /// # Returns
    ///
    /// * `true` - The machine advanced
    /// * `false` - The chain had already finished; nothing changed
    pub fn step(&mut self) -> bool {
        let action = self.current.action;
        log::trace!(
            "step {action} at chain {} ({} states)",
            self.current.chain_length,
            self.len()
        );
        match action {
            Action::CheckForDrops => {
                if compute_drops(&self.current.board, &mut self.current.to_drop) {
                    self.current.action = Action::NeedsToDrop;
                } else {
                    self.check_for_pops();
                }
            }
            Action::NeedsToDrop => {
                self.record_current();
                let state = &mut self.current;
                apply_drops(&mut state.board, &state.to_drop);
                state.clear_pending();
                state.action = Action::CheckForPops;
            }
            Action::CheckForPops => self.check_for_pops(),
            Action::NeedsToPop => {
                self.record_current();
                let state = &mut self.current;
                for &pos in state.colors_to_pop.iter().flat_map(PuyoGroup::cells) {
                    state.board[pos] = CellKind::Empty;
                }
                for cell in &state.garbage_to_pop {
                    // The recorded kind keeps repeated contacts from downgrading twice.
                    state.board[cell.pos] = cell.kind.popped();
                }
                state.clear_pending();
                state.action = Action::CheckForDrops;
            }
            Action::Finished => return false,
        }
        true
    }

    /// Steps until the chain finishes and returns the final state.
    ///
    /// Calling this on a finished solver returns the final state again without
    /// changing anything.
    pub fn simulate_chain(&mut self) -> &ResolutionState {
        while self.step() {}
        log::debug!(
            "chain finished: {} links, score {}, garbage {}",
            self.current.chain_length,
            self.current.total_score,
            self.current.total_garbage
        );
        &self.current
    }

    /// Discards all progress and starts again from the initial board.
    ///
    /// `board` and `ruleset` replace the stored ones when given. The mode is
    /// kept.
    pub fn reset(&mut self, board: Option<Board>, ruleset: Option<Ruleset>) {
        if let Some(board) = board {
            self.initial = board;
        }
        if let Some(ruleset) = ruleset {
            self.ruleset = ruleset;
        }
        self.history.clear();
        self.links.clear();
        self.current = ResolutionState::initial(self.initial.clone());
        self.visited = Grid::new(self.initial.cols(), self.initial.rows(), false);
        log::debug!(
            "solver reset to a {}x{} board",
            self.initial.cols(),
            self.initial.rows()
        );
    }

    fn record_current(&mut self) {
        if self.mode.is_history() {
            self.history.push(self.current.clone());
        }
    }

    fn check_for_pops(&mut self) {
        let groups = find_groups(&self.current.board, &self.ruleset, &mut self.visited);
        if groups.is_empty() {
            self.current.action = Action::Finished;
            return;
        }

        let nuisance = collect_nuisance(&self.current.board, &self.ruleset, &groups);
        let state = &mut self.current;
        state.chain_length += 1;
        let link = score_link(
            &self.ruleset,
            state.chain_length,
            &groups,
            nuisance.points.len(),
            nuisance.suns.len(),
            state.old_leftover,
        );
        state.total_score += link.score_gain;
        state.total_garbage += link.link_garbage + link.sun_bonus;
        state.new_leftover = link.leftover_points;
        state.link = link;
        state.colors_to_pop = groups;
        state.garbage_to_pop = nuisance.cells;
        state.points_to_pop = nuisance.points;
        state.suns_to_pop = nuisance.suns;
        state.action = Action::NeedsToPop;

        log::debug!(
            "link {}: {} puyo in {} groups, score {}, garbage {}",
            link.chain,
            link.puyo_count,
            state.colors_to_pop.len(),
            link.link_score,
            link.link_garbage + link.sun_bonus
        );
        self.links.push(link);
        debug_assert!(self.links.len() <= self.initial.count_colored());
    }
}
