//! Slot search: which timeslots of a day affect a given area.

use crate::areas::areas_for_slot;
use crate::slot::slot_start_hour;
use crate::tables::NUM_TIME_SLOTS;

/// Returns, in ascending order, every timeslot of `day` whose shed areas at
/// `stage` include `area`.
///
/// # Panics
///
/// Panics if `stage` is not in 1..=8.
pub fn slots_for_area(stage: u8, day: u8, area: u8) -> Vec<u8> {
    (1..=NUM_TIME_SLOTS)
        .filter(|&slot| areas_for_slot(stage, day, slot).contains(&area))
        .collect()
}

/// Returns the first timeslot of `day` affecting `area` whose start hour is
/// strictly after `from_hour`, or `None` if no slot qualifies.
///
/// A `from_hour` of `None` searches from the start of the day. Note the
/// strict comparison: a slot starting exactly at `from_hour` is excluded,
/// which is what lets the multi-day scan resume after the current hour.
///
/// # Panics
///
/// Panics if `stage` is not in 1..=8.
pub fn next_slot_in_day(stage: u8, day: u8, area: u8, from_hour: Option<u8>) -> Option<u8> {
    slots_for_area(stage, day, area)
        .into_iter()
        .find(|&slot| match from_hour {
            None => true,
            Some(hour) => slot_start_hour(slot) > hour,
        })
}
