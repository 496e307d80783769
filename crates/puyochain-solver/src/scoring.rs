//! Link score and garbage conversion.

use std::collections::BTreeSet;

use puyochain_core::{CellKind, Ruleset};

use crate::{LinkScore, PuyoGroup};

const MIN_BONUS: u64 = 1;
const MAX_BONUS: u64 = 999;

/// Scores one link.
///
/// `old_leftover` is the score carried from the previous link, in points. The
/// returned [`LinkScore::leftover_points`] is what this link carries forward.
pub(crate) fn score_link(
    ruleset: &Ruleset,
    chain: usize,
    groups: &[PuyoGroup],
    points: usize,
    suns: usize,
    old_leftover: u64,
) -> LinkScore {
    let puyo_count = groups.iter().map(PuyoGroup::len).sum::<usize>();
    let colors = groups
        .iter()
        .map(PuyoGroup::kind)
        .collect::<BTreeSet<CellKind>>()
        .len();

    let chain_power = u64::from(ruleset.chain_power_for(chain));
    let color_bonus = u64::from(ruleset.color_bonus_for(colors));
    let group_bonus = groups
        .iter()
        .map(|group| u64::from(ruleset.group_bonus_for(group.len())))
        .sum::<u64>();
    let total_bonus = (chain_power + color_bonus + group_bonus).clamp(MIN_BONUS, MAX_BONUS);

    let pc = puyo_count as u64;
    let point_bonus = points as u64 * u64::from(ruleset.point_puyo_bonus);
    let link_score = 10 * pc * total_bonus + point_bonus;
    let score_gain = (10 * pc + point_bonus) * total_bonus;

    let target = u64::from(ruleset.target_point.max(1));
    let nuisance_points = link_score + old_leftover;
    let link_garbage = nuisance_points / target;
    let leftover_points = nuisance_points % target;

    let suns = suns as u64;
    let sun_bonus = if chain <= 1 {
        3 * suns
    } else {
        6 * (chain as u64 - 1) * suns
    };

    LinkScore {
        chain,
        puyo_count,
        colors,
        chain_power,
        color_bonus,
        group_bonus,
        total_bonus,
        point_bonus,
        link_score,
        score_gain,
        link_garbage,
        sun_bonus,
        leftover_points,
    }
}

#[cfg(test)]
mod tests {
    use puyochain_core::Position;

    use super::*;

    fn group(kind: CellKind, len: usize) -> PuyoGroup {
        PuyoGroup::new(kind, (0..len).map(|y| Position::new(0, y)).collect())
    }

    #[test]
    fn test_single_group_first_link() {
        let ruleset = Ruleset::default();
        let link = score_link(&ruleset, 1, &[group(CellKind::Red, 4)], 0, 0, 0);
        assert_eq!(link.puyo_count, 4);
        assert_eq!(link.colors, 1);
        assert_eq!(link.total_bonus, 1);
        assert_eq!(link.link_score, 40);
        assert_eq!(link.score_gain, 40);
        assert_eq!(link.link_garbage, 0);
        assert_eq!(link.leftover_points, 40);
    }

    #[test]
    fn test_leftover_carries_into_conversion() {
        let ruleset = Ruleset::default();
        let link = score_link(&ruleset, 1, &[group(CellKind::Red, 4)], 0, 0, 40);
        assert_eq!(link.link_garbage, 1);
        assert_eq!(link.leftover_points, 10);
    }

    #[test]
    fn test_bonus_tables_combine() {
        let ruleset = Ruleset::default();
        let groups = [group(CellKind::Red, 5), group(CellKind::Blue, 4)];
        let link = score_link(&ruleset, 3, &groups, 0, 0, 0);
        // chain power 16, two colours 3, group bonus 2 + 0
        assert_eq!(link.chain_power, 16);
        assert_eq!(link.color_bonus, 3);
        assert_eq!(link.group_bonus, 2);
        assert_eq!(link.total_bonus, 21);
        assert_eq!(link.link_score, 10 * 9 * 21);
        assert_eq!(link.link_garbage, 1890 / 70);
        assert_eq!(link.leftover_points, 1890 % 70);
    }

    #[test]
    fn test_same_color_groups_count_as_one_color() {
        let ruleset = Ruleset::default();
        let groups = [group(CellKind::Red, 4), group(CellKind::Red, 4)];
        let link = score_link(&ruleset, 2, &groups, 0, 0, 0);
        assert_eq!(link.puyo_count, 8);
        assert_eq!(link.colors, 1);
        assert_eq!(link.color_bonus, u64::from(ruleset.color_bonus_for(1)));
        assert_eq!(link.total_bonus, 8);
        assert_eq!(link.link_score, 10 * 8 * 8);
    }

    #[test]
    fn test_oversized_group_uses_last_entry() {
        let ruleset = Ruleset::default();
        let link = score_link(&ruleset, 1, &[group(CellKind::Green, 30)], 0, 0, 0);
        assert_eq!(link.group_bonus, 10);
        assert_eq!(link.total_bonus, 10);
    }

    #[test]
    fn test_total_bonus_clamped_to_max() {
        let ruleset = Ruleset {
            chain_power: vec![5000],
            ..Ruleset::default()
        };
        let link = score_link(&ruleset, 1, &[group(CellKind::Red, 4)], 0, 0, 0);
        assert_eq!(link.total_bonus, 999);
    }

    #[test]
    fn test_point_bonus_uses_both_formulas() {
        let ruleset = Ruleset::default();
        let link = score_link(&ruleset, 2, &[group(CellKind::Yellow, 4)], 2, 0, 0);
        assert_eq!(link.total_bonus, 8);
        assert_eq!(link.point_bonus, 100);
        assert_eq!(link.link_score, 10 * 4 * 8 + 100);
        assert_eq!(link.score_gain, (10 * 4 + 100) * 8);
    }

    #[test]
    fn test_sun_bonus() {
        let ruleset = Ruleset::default();
        let first = score_link(&ruleset, 1, &[group(CellKind::Red, 4)], 0, 2, 0);
        assert_eq!(first.sun_bonus, 6);
        let third = score_link(&ruleset, 3, &[group(CellKind::Red, 4)], 0, 2, 0);
        assert_eq!(third.sun_bonus, 24);
    }

    #[test]
    fn test_zero_target_point_does_not_divide_by_zero() {
        let ruleset = Ruleset {
            target_point: 0,
            ..Ruleset::default()
        };
        let link = score_link(&ruleset, 1, &[group(CellKind::Red, 4)], 0, 0, 0);
        assert_eq!(link.link_garbage, 40);
        assert_eq!(link.leftover_points, 0);
    }
}
