//! Ruleset configuration consumed by the chain solver.

/// Board dimensions, matching rules and scoring tables.
///
/// The solver only reads a ruleset. Tables must be non-empty; lookups past the
/// end clamp to the last entry.
///
/// The [`Default`] ruleset is the classic Tsu/Champions rule: a 6×13 board with
/// one hidden row, groups of four, and a target point of 70.
///
/// # Examples
///
/// ```
/// use puyochain_core::Ruleset;
///
/// let ruleset = Ruleset {
///     puyo_to_pop: 3,
///     ..Ruleset::default()
/// };
/// assert_eq!(ruleset.chain_power_for(1), 0);
/// assert_eq!(ruleset.chain_power_for(2), 8);
/// assert_eq!(ruleset.chain_power_for(99), 672);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    /// Number of rows, including hidden rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Number of hidden rows at the top of the board.
    pub hrows: usize,
    /// Minimum size of a poppable group.
    pub puyo_to_pop: usize,
    /// Score points per unit of garbage sent.
    pub target_point: u32,
    /// Bonus by number of distinct colours popped, indexed by `colors - 1`.
    pub color_bonus: Vec<u32>,
    /// Bonus by group size, indexed by `size - puyo_to_pop`.
    pub group_bonus: Vec<u32>,
    /// Chain power by chain length, indexed by `chain - 1`.
    pub chain_power: Vec<u32>,
    /// Score added per point garbage cleared.
    pub point_puyo_bonus: u32,
    /// Whether colour pops can clear garbage sitting in the hidden rows.
    pub clear_garbage_in_hrows: bool,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            rows: 13,
            cols: 6,
            hrows: 1,
            puyo_to_pop: 4,
            target_point: 70,
            color_bonus: vec![0, 3, 6, 12, 24],
            group_bonus: vec![0, 2, 3, 4, 5, 6, 7, 10],
            chain_power: vec![
                0, 8, 16, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 480,
                512, 544, 576, 608, 640, 672,
            ],
            point_puyo_bonus: 50,
            clear_garbage_in_hrows: false,
        }
    }
}

impl Ruleset {
    /// Returns the chain power for a 1-indexed chain length.
    #[must_use]
    pub fn chain_power_for(&self, chain: usize) -> u32 {
        lookup_clamped(&self.chain_power, chain.saturating_sub(1))
    }

    /// Returns the colour bonus for the number of distinct colours popped in a link.
    #[must_use]
    pub fn color_bonus_for(&self, colors: usize) -> u32 {
        lookup_clamped(&self.color_bonus, colors.saturating_sub(1))
    }

    /// Returns the group bonus for a single popped group of `size` cells.
    #[must_use]
    pub fn group_bonus_for(&self, size: usize) -> u32 {
        lookup_clamped(&self.group_bonus, size.saturating_sub(self.puyo_to_pop))
    }

    /// Returns `true` if row `y` is one of the hidden rows.
    #[must_use]
    #[inline]
    pub fn is_hidden_row(&self, y: usize) -> bool {
        y < self.hrows
    }
}

fn lookup_clamped(table: &[u32], index: usize) -> u32 {
    table
        .get(index)
        .or_else(|| table.last())
        .copied()
        .unwrap_or_default()
}
