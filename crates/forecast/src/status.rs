//! Is an area being shed right now, and until when.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use loadshed_rota::{
    areas_at_time, slot_from_hour, slot_start_hour, DayTime, OVERLAP_MARGIN_MINUTES, SLOT_HOURS,
};
use serde::{Deserialize, Serialize};

/// Whether an area is currently being shed.
///
/// The end timestamp only exists while shedding is active, so it lives on
/// the active variant. Transitions happen at timeslot boundaries plus the
/// overlap margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentStatus {
    /// The area is shed during the current slot; the outage runs until
    /// `ends_at` (slot end plus the overlap margin).
    Shedding {
        /// When the outage is over, minutes past the official slot end.
        ends_at: NaiveDateTime,
    },
    /// The area is not affected right now.
    NotShedding,
}

impl CurrentStatus {
    /// Returns `true` while shedding is active.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Shedding { .. })
    }

    /// Returns the end of the current outage, if one is active.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Shedding { ends_at } => Some(*ends_at),
            Self::NotShedding => None,
        }
    }
}

/// Reports whether `area` is shed at `stage` at the instant `now`.
///
/// The overlap window is not considered here: an outage is active exactly
/// during its official slot. When active, the reported end time is the
/// slot's start plus [`SLOT_HOURS`] plus [`OVERLAP_MARGIN_MINUTES`],
/// computed from midnight so that the last slot of the day correctly ends
/// at 00:30 the next morning.
pub fn current_status(stage: u8, area: u8, now: NaiveDateTime) -> CurrentStatus {
    let time = DayTime::new(now.hour() as u8, now.minute() as u8);
    let areas = areas_at_time(stage, now.day() as u8, time);

    if !areas.contains(&area) {
        return CurrentStatus::NotShedding;
    }

    let slot = slot_from_hour(time.hour());
    let midnight = now
        .date()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time");
    let ends_at = midnight
        + Duration::hours((slot_start_hour(slot) + SLOT_HOURS) as i64)
        + Duration::minutes(OVERLAP_MARGIN_MINUTES as i64);

    CurrentStatus::Shedding { ends_at }
}
