//! Cumulative area-code offset reached by the start of a day.

use crate::tables::{
    EXTRA_INCREMENT_DAYS, LOW_STAGE_EXTRA_INCREMENT_DAYS, LOW_STAGE_MAX, NUM_TIME_SLOTS,
};

/// Computes the area-code position accumulated by the start of `day`,
/// before the current slot's own increment is added.
///
/// `day` must already be folded into its day group (1..=16). The base
/// accumulation is twelve positions per elapsed day; on the days listed in
/// [`EXTRA_INCREMENT_DAYS`] the published table skips one extra area, and
/// for stages 1..=4 it skips one more on day 13. Both perturbations are
/// quirks of the published table, preserved exactly.
pub fn day_start_offset(stage: u8, day: u8) -> u16 {
    if day <= 1 {
        return 0;
    }

    let mut acc = (day as u16 - 1) * NUM_TIME_SLOTS as u16;

    for extra_day in EXTRA_INCREMENT_DAYS {
        if day >= extra_day {
            acc += 1;
        }
    }

    if stage <= LOW_STAGE_MAX {
        for extra_day in LOW_STAGE_EXTRA_INCREMENT_DAYS {
            if day >= extra_day {
                acc += 1;
            }
        }
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_one_is_zero() {
        for stage in 1..=8 {
            assert_eq!(day_start_offset(stage, 1), 0);
        }
    }

    #[test]
    fn day_two_plain() {
        assert_eq!(day_start_offset(1, 2), 12);
        assert_eq!(day_start_offset(8, 2), 12);
    }

    #[test]
    fn day_four_before_first_extra() {
        assert_eq!(day_start_offset(1, 4), 36);
    }

    #[test]
    fn day_five_first_extra_increment() {
        // 4 * 12 + 1 for the day-5 skip
        assert_eq!(day_start_offset(1, 5), 49);
        assert_eq!(day_start_offset(8, 5), 49);
    }

    #[test]
    fn day_nine_second_extra_increment() {
        // 8 * 12 + 2 for the day-5 and day-9 skips
        assert_eq!(day_start_offset(1, 9), 98);
        assert_eq!(day_start_offset(8, 9), 98);
    }

    #[test]
    fn day_thirteen_splits_by_stage() {
        // 12 * 12 + 2, plus one more for stages 1..=4 only
        assert_eq!(day_start_offset(4, 13), 147);
        assert_eq!(day_start_offset(1, 13), 147);
        assert_eq!(day_start_offset(5, 13), 146);
        assert_eq!(day_start_offset(8, 13), 146);
    }

    #[test]
    fn day_sixteen_full_accumulation() {
        // 15 * 12 + 2 (+1 for low stages)
        assert_eq!(day_start_offset(1, 16), 183);
        assert_eq!(day_start_offset(5, 16), 182);
    }

    #[test]
    fn monotone_in_day() {
        for stage in [1u8, 8] {
            let mut prev = day_start_offset(stage, 1);
            for day in 2..=16 {
                let acc = day_start_offset(stage, day);
                assert!(acc > prev, "offset not increasing at day {day}");
                prev = acc;
            }
        }
    }
}
