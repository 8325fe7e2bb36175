//! Multi-day forward scan for the next outage affecting an area.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use loadshed_rota::{
    next_slot_in_day, slot_start_hour, validate_area, validate_stage, ScheduleError, MAX_MONTH_DAY,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The next scheduled outage for an area: the table slot and day that
/// produced it, and the absolute moment the slot starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextOccurrence {
    /// Timeslot (1..=12) of the occurrence.
    pub slot: u8,
    /// Day of month (1..=31) the slot was found on.
    pub day: u8,
    /// Start of the slot, with minutes and seconds zeroed.
    pub starts_at: NaiveDateTime,
}

/// Finds the next timeslot after `now` during which `area` is shed at
/// `stage`, scanning forward day by day.
///
/// The first day is searched from `now`'s hour onward (a slot starting
/// exactly at the current hour is already underway and does not count);
/// later days are searched from their start. The day-of-month counter wraps
/// from 31 back to 1, while the result timestamp simply advances by the
/// number of elapsed days, so month lengths never enter the table lookup.
///
/// # Errors
///
/// Returns [`ScheduleError::StageOutOfRange`] or
/// [`ScheduleError::AreaOutOfRange`] before any scanning begins. The scan
/// loop terminates only for in-range inputs (every area turns up within the
/// 16-day group cycle), so the bounds are checked up front.
#[tracing::instrument]
pub fn next_occurrence(
    stage: u8,
    area: u8,
    now: NaiveDateTime,
) -> Result<NextOccurrence, ScheduleError> {
    validate_stage(stage)?;
    validate_area(area)?;

    let mut day = now.day() as u8;
    let mut elapsed_days: i64 = 0;

    let slot = loop {
        let from_hour = if elapsed_days == 0 {
            Some(now.hour() as u8)
        } else {
            None
        };

        if let Some(slot) = next_slot_in_day(stage, day, area, from_hour) {
            break slot;
        }

        day = if day >= MAX_MONTH_DAY { 1 } else { day + 1 };
        elapsed_days += 1;
        debug!(day, elapsed_days, "no remaining slot, advancing a day");
    };

    let starts_at = (now.date() + Duration::days(elapsed_days))
        .and_hms_opt(slot_start_hour(slot) as u32, 0, 0)
        .expect("slot start hour is always a valid time");

    Ok(NextOccurrence {
        slot,
        day,
        starts_at,
    })
}
