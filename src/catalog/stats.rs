//! Aggregate counts derived from the unfiltered catalog.

use crate::api::{Character, CharacterStatus};
use serde::Serialize;

/// Per-status breakdown of the full list. A pure function of the list,
/// recomputed whenever it changes; independent of any filter criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub total: usize,
    pub alive: usize,
    pub dead: usize,
    pub unknown: usize,
}

/// Count entries per status. `total` is the list length; a status outside
/// the three documented values counts toward `total` only, so
/// `alive + dead + unknown <= total` always holds.
pub fn compute_stats(list: &[Character]) -> Stats {
    let mut stats = Stats {
        total: list.len(),
        ..Stats::default()
    };

    for character in list {
        match character.status {
            CharacterStatus::Alive => stats.alive += 1,
            CharacterStatus::Dead => stats.dead += 1,
            CharacterStatus::Unknown => stats.unknown += 1,
            CharacterStatus::Other(_) => {}
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testutil::character;

    #[test]
    fn empty_list_is_all_zeros() {
        assert_eq!(compute_stats(&[]), Stats::default());
    }

    #[test]
    fn total_is_list_length_and_buckets_sum_below_it() {
        let list = vec![
            character(1, "Rick Sanchez", CharacterStatus::Alive),
            character(2, "Birdperson", CharacterStatus::Dead),
            character(3, "Mr. Meeseeks", CharacterStatus::Unknown),
            character(4, "Abradolf Lincler", CharacterStatus::Other("Presumed dead".to_string())),
        ];

        let stats = compute_stats(&list);
        assert_eq!(stats.total, list.len());
        assert_eq!(stats.alive, 1);
        assert_eq!(stats.dead, 1);
        assert_eq!(stats.unknown, 1);
        assert!(stats.alive + stats.dead + stats.unknown <= stats.total);
    }

    #[test]
    fn out_of_set_status_still_counts_toward_total() {
        let list = vec![character(
            1,
            "Abradolf Lincler",
            CharacterStatus::Other("Presumed dead".to_string()),
        )];

        let stats = compute_stats(&list);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.alive + stats.dead + stats.unknown, 0);
    }
}
