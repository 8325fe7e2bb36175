//! Hour/timeslot conversion helpers.

/// Duration of one timeslot in hours.
pub const SLOT_HOURS: u8 = 2;

/// Extra minutes a slot's outage may run past its official boundary.
///
/// During the first 30 minutes of an even hour the previous slot's shedding
/// may still be wrapping up; the overlap-aware resolver and the end-time
/// computation both use this margin.
pub const OVERLAP_MARGIN_MINUTES: u8 = 30;

/// Returns the timeslot (1..=12) covering the given hour of day.
///
/// Odd hours round down onto the slot that started one hour earlier, so
/// hours 0 and 1 map to slot 1, hours 22 and 23 to slot 12.
pub fn slot_from_hour(hour: u8) -> u8 {
    let even_hour = hour - hour % SLOT_HOURS;
    even_hour / SLOT_HOURS + 1
}

/// Returns the starting hour (0, 2, ..., 22) of a timeslot.
pub fn slot_start_hour(slot: u8) -> u8 {
    (slot - 1) * SLOT_HOURS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_from_hour_even() {
        assert_eq!(slot_from_hour(0), 1);
        assert_eq!(slot_from_hour(2), 2);
        assert_eq!(slot_from_hour(12), 7);
        assert_eq!(slot_from_hour(22), 12);
    }

    #[test]
    fn slot_from_hour_odd_rounds_down() {
        assert_eq!(slot_from_hour(1), 1);
        assert_eq!(slot_from_hour(3), 2);
        assert_eq!(slot_from_hour(23), 12);
    }

    #[test]
    fn slot_start_hour_values() {
        assert_eq!(slot_start_hour(1), 0);
        assert_eq!(slot_start_hour(2), 2);
        assert_eq!(slot_start_hour(7), 12);
        assert_eq!(slot_start_hour(12), 22);
    }

    #[test]
    fn roundtrip_all_hours() {
        for h in 0..24u8 {
            let even_floor = h - h % 2;
            assert_eq!(
                slot_start_hour(slot_from_hour(h)),
                even_floor,
                "roundtrip failed for hour {h}"
            );
        }
    }
}
