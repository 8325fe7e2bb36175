//! Constants of the published rotating schedule and bounds validation.
//!
//! The published table is a repeating pattern: 16 day-group columns by 12
//! timeslot rows, cycling through 16 area codes. Each stage reuses the same
//! cycle from a different starting area.

use crate::error::ScheduleError;

/// Number of day-group columns in the published table. Calendar days past
/// this fold back onto the first columns.
pub const NUM_DAY_GROUPS: u8 = 16;

/// Number of timeslot rows per day.
pub const NUM_TIME_SLOTS: u8 = 12;

/// Number of area codes the cycle accumulates through before restarting.
pub const NUM_AREA_CODES: u8 = 16;

/// Highest published stage.
pub const HIGHEST_STAGE: u8 = 8;

/// Highest possible day of month, where the multi-day scan wraps back to 1.
pub const MAX_MONTH_DAY: u8 = 31;

/// Days on which the published table skips one extra area, for all stages.
pub const EXTRA_INCREMENT_DAYS: [u8; 2] = [5, 9];

/// Days on which the published table skips one extra area, but only for
/// stages 1..=4.
pub const LOW_STAGE_EXTRA_INCREMENT_DAYS: [u8; 1] = [13];

/// Highest stage affected by [`LOW_STAGE_EXTRA_INCREMENT_DAYS`].
pub const LOW_STAGE_MAX: u8 = 4;

/// Area code each stage's table starts its cycle from (index 0 unused,
/// index 1 = stage 1, ..., index 8 = stage 8).
pub(crate) const STAGE_START_AREAS: [u8; 9] = [0, 1, 9, 13, 5, 2, 10, 14, 6];

/// Returns the area code that starts the cycle for `stage`.
///
/// # Panics
///
/// Panics if `stage` is not in 1..=8.
pub fn stage_start_area(stage: u8) -> u8 {
    assert!(
        (1..=HIGHEST_STAGE).contains(&stage),
        "stage {stage} has no published table"
    );
    STAGE_START_AREAS[stage as usize]
}

/// Folds a day of month into its day group (1..=16).
///
/// Days past the 16 columns of the published table map back onto the first
/// columns: day 17 reads column 1, day 31 reads column 15.
pub fn fold_day(day: u8) -> u8 {
    if day > NUM_DAY_GROUPS {
        day - NUM_DAY_GROUPS
    } else {
        day
    }
}

/// Checks that `stage` is a published stage.
///
/// # Errors
///
/// Returns [`ScheduleError::StageOutOfRange`] if `stage` is not in 1..=8.
pub fn validate_stage(stage: u8) -> Result<(), ScheduleError> {
    if !(1..=HIGHEST_STAGE).contains(&stage) {
        return Err(ScheduleError::StageOutOfRange { stage });
    }
    Ok(())
}

/// Checks that `area` is a published area code.
///
/// # Errors
///
/// Returns [`ScheduleError::AreaOutOfRange`] if `area` is not in 1..=16.
pub fn validate_area(area: u8) -> Result<(), ScheduleError> {
    if !(1..=NUM_AREA_CODES).contains(&area) {
        return Err(ScheduleError::AreaOutOfRange { area });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_start_area_values() {
        assert_eq!(stage_start_area(1), 1);
        assert_eq!(stage_start_area(2), 9);
        assert_eq!(stage_start_area(3), 13);
        assert_eq!(stage_start_area(4), 5);
        assert_eq!(stage_start_area(5), 2);
        assert_eq!(stage_start_area(6), 10);
        assert_eq!(stage_start_area(7), 14);
        assert_eq!(stage_start_area(8), 6);
    }

    #[test]
    #[should_panic(expected = "stage 0 has no published table")]
    fn stage_start_area_zero_panics() {
        stage_start_area(0);
    }

    #[test]
    #[should_panic(expected = "stage 9 has no published table")]
    fn stage_start_area_nine_panics() {
        stage_start_area(9);
    }

    #[test]
    fn table_integrity_start_areas_distinct() {
        for s in 1..=HIGHEST_STAGE {
            let area = stage_start_area(s);
            assert!((1..=NUM_AREA_CODES).contains(&area));
            for t in (s + 1)..=HIGHEST_STAGE {
                assert_ne!(area, stage_start_area(t), "stages {s} and {t} collide");
            }
        }
    }

    #[test]
    fn fold_day_identity_within_group() {
        assert_eq!(fold_day(1), 1);
        assert_eq!(fold_day(15), 15);
        assert_eq!(fold_day(16), 16);
    }

    #[test]
    fn fold_day_past_group() {
        assert_eq!(fold_day(17), 1);
        assert_eq!(fold_day(24), 8);
        assert_eq!(fold_day(31), 15);
    }

    #[test]
    fn validate_stage_bounds() {
        assert!(validate_stage(1).is_ok());
        assert!(validate_stage(8).is_ok());
        assert_eq!(
            validate_stage(0).unwrap_err(),
            ScheduleError::StageOutOfRange { stage: 0 }
        );
        assert_eq!(
            validate_stage(9).unwrap_err(),
            ScheduleError::StageOutOfRange { stage: 9 }
        );
    }

    #[test]
    fn validate_area_bounds() {
        assert!(validate_area(1).is_ok());
        assert!(validate_area(16).is_ok());
        assert_eq!(
            validate_area(0).unwrap_err(),
            ScheduleError::AreaOutOfRange { area: 0 }
        );
        assert_eq!(
            validate_area(17).unwrap_err(),
            ScheduleError::AreaOutOfRange { area: 17 }
        );
    }
}
