//! Gravity: per-column fall distances and their application.

use puyochain_core::{Board, CellKind, Grid};

/// Computes every cell's fall distance into `to_drop`.
///
/// A falling cell drops by the number of empty cells beneath it, counted down
/// to the floor or to the nearest [`CellKind::Block`] below it, whichever comes
/// first. Empty and block cells get distance `0`.
///
/// Returns `true` if any cell has to fall.
pub(crate) fn compute_drops(board: &Board, to_drop: &mut Grid<usize>) -> bool {
    debug_assert_eq!((board.cols(), board.rows()), (to_drop.cols(), to_drop.rows()));

    let mut any = false;
    for x in 0..board.cols() {
        let column = board.column(x);
        let distances = to_drop.column_mut(x);
        let mut gap = 0;
        for (kind, distance) in column.iter().zip(distances).rev() {
            *distance = match kind {
                CellKind::Empty => {
                    gap += 1;
                    0
                }
                CellKind::Block => {
                    gap = 0;
                    0
                }
                _ => gap,
            };
            any |= *distance > 0;
        }
    }
    any
}

/// Moves every cell down by its distance in `to_drop`, leaving its origin empty.
pub(crate) fn apply_drops(board: &mut Board, to_drop: &Grid<usize>) {
    for x in 0..board.cols() {
        let distances = to_drop.column(x);
        let column = board.column_mut(x);
        // Bottom-up, so every target has already been vacated.
        for y in (0..column.len()).rev() {
            let distance = distances[y];
            if distance > 0 {
                column[y + distance] = column[y];
                column[y] = CellKind::Empty;
            }
        }
    }
}
