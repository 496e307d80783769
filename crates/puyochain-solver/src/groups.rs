//! Connected-group detection and nuisance adjacency.
//!
//! Both passes share one hidden-row convention: rows `0..hrows` are hidden, and
//! a step upward from row `y` is only taken when `y > hrows`, i.e. when the
//! cell above is visible. A coloured cell in a hidden row still seeds a group
//! and grows through its other neighbours.

use std::collections::{BTreeSet, VecDeque};

use puyochain_core::{Board, Cell, CellKind, Direction, Grid, Position, Ruleset};

use crate::PuyoGroup;

/// Garbage cells collected around the popped groups.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Nuisance {
    /// Every contact between a popped cell and a nuisance cell, duplicates included.
    pub(crate) cells: Vec<Cell>,
    /// Distinct point garbage positions.
    pub(crate) points: BTreeSet<Position>,
    /// Distinct sun garbage positions.
    pub(crate) suns: BTreeSet<Position>,
}

fn can_step_up(ruleset: &Ruleset, pos: Position) -> bool {
    pos.y() > ruleset.hrows
}

/// Finds every group of at least `ruleset.puyo_to_pop` same-coloured,
/// orthogonally connected cells.
///
/// Seeds are scanned in row-major order and each group is grown breadth-first.
/// `visited` is scratch space owned by the caller; it is reset here before use.
pub(crate) fn find_groups(
    board: &Board,
    ruleset: &Ruleset,
    visited: &mut Grid<bool>,
) -> Vec<PuyoGroup> {
    debug_assert_eq!((board.cols(), board.rows()), (visited.cols(), visited.rows()));
    visited.fill(false);

    let mut groups = Vec::new();
    let mut queue = VecDeque::new();
    for seed in board.positions() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let kind = board[seed];
        if !kind.is_colored() {
            continue;
        }

        let mut cells = vec![seed];
        queue.push_back(seed);
        while let Some(pos) = queue.pop_front() {
            for dir in Direction::ALL {
                if dir.is_up() && !can_step_up(ruleset, pos) {
                    continue;
                }
                let Some(next) = board.neighbor(pos, dir) else {
                    continue;
                };
                if visited[next] || board[next] != kind {
                    continue;
                }
                visited[next] = true;
                cells.push(next);
                queue.push_back(next);
            }
        }

        if cells.len() >= ruleset.puyo_to_pop {
            groups.push(PuyoGroup::new(kind, cells));
        }
    }
    groups
}

/// Collects the nuisance cells orthogonally adjacent to any popped cell.
///
/// Upward contacts into the hidden rows only count when
/// `ruleset.clear_garbage_in_hrows` is set.
pub(crate) fn collect_nuisance(
    board: &Board,
    ruleset: &Ruleset,
    groups: &[PuyoGroup],
) -> Nuisance {
    let mut nuisance = Nuisance::default();
    for &pos in groups.iter().flat_map(PuyoGroup::cells) {
        for dir in Direction::ALL {
            if dir.is_up() && !(ruleset.clear_garbage_in_hrows || can_step_up(ruleset, pos)) {
                continue;
            }
            let Some(next) = board.neighbor(pos, dir) else {
                continue;
            };
            let cell = board.cell(next);
            if !cell.kind.is_nuisance() {
                continue;
            }
            match cell.kind {
                CellKind::Point => {
                    nuisance.points.insert(next);
                }
                CellKind::Sun => {
                    nuisance.suns.insert(next);
                }
                _ => {}
            }
            nuisance.cells.push(cell);
        }
    }
    nuisance
}
