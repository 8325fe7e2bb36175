//! Area resolution: which areas are shed for a given stage, day and slot.

use crate::daytime::DayTime;
use crate::offset::day_start_offset;
use crate::slot::{slot_from_hour, OVERLAP_MARGIN_MINUTES, SLOT_HOURS};
use crate::tables::{fold_day, stage_start_area, NUM_AREA_CODES, NUM_TIME_SLOTS};

/// Returns the area codes shed at `stage` on `day` during `slot`.
///
/// The day folds into its day group before lookup, so days 17..=31 read the
/// same columns as days 1..=15. A stage sheds its own area for the slot plus
/// every area shed by the lower stages, so the result is the union over
/// severities `stage` down to 1, in that insertion order. Lower-severity
/// entries are concatenated without deduplication, exactly as the published
/// table stacks stage pages; for day groups 13..=16 a higher-stage code can
/// repeat a stage 1..=4 code.
///
/// The single published anomaly is preserved verbatim: stage 4 contributes
/// no area of its own for slot 4 on day group 15.
///
/// # Panics
///
/// Panics if `stage` is not in 1..=8 (callers are assumed to supply a
/// published stage; only the multi-day scan validates).
pub fn areas_for_slot(stage: u8, day: u8, slot: u8) -> Vec<u8> {
    let day = fold_day(day);
    let mut areas = Vec::with_capacity(stage as usize);

    for severity in (1..=stage).rev() {
        if severity == 4 && slot == 4 && day == 15 {
            continue;
        }
        let acc = day_start_offset(severity, day) + slot as u16;
        areas.push(normalize_area(severity, acc));
    }

    areas
}

/// Returns the area codes shed at `stage` on `day` at the given time of day.
///
/// The hour maps onto its 2-hour slot (odd hours round down) and the
/// slot-based resolver does the rest.
///
/// # Panics
///
/// Panics if `stage` is not in 1..=8.
pub fn areas_at_time(stage: u8, day: u8, time: DayTime) -> Vec<u8> {
    areas_for_slot(stage, day, slot_from_hour(time.hour()))
}

/// Like [`areas_at_time`], but also unions in the previous slot's areas when
/// the caller is inside the overlap window.
///
/// Within the first [`OVERLAP_MARGIN_MINUTES`] of an even hour the previous
/// slot's outage may still be wrapping up, so its areas are appended. When
/// the previous slot falls on the previous day the day steps back too, and
/// `prev_month_last_day` supplies the day to use when stepping back from
/// day 1 across a month boundary.
///
/// # Panics
///
/// Panics if `stage` is not in 1..=8.
pub fn areas_at_time_with_overlap(
    stage: u8,
    day: u8,
    time: DayTime,
    prev_month_last_day: u8,
) -> Vec<u8> {
    let mut slot = slot_from_hour(time.hour());
    let mut areas = areas_for_slot(stage, day, slot);

    let even_hour = time.hour() % SLOT_HOURS == 0;
    if even_hour && time.minute() <= OVERLAP_MARGIN_MINUTES {
        let prev_day = if slot > 1 {
            slot -= 1;
            day
        } else {
            slot = NUM_TIME_SLOTS;
            if day > 1 {
                day - 1
            } else {
                prev_month_last_day
            }
        };
        areas.extend(areas_for_slot(stage, prev_day, slot));
    }

    areas
}

/// Rotates an accumulated position into an area code for the stage.
///
/// The cycle is 1-based, so the modulo is taken on `acc + start - 2` and
/// shifted back up: position 16 yields area 16, never 0.
fn normalize_area(stage: u8, acc: u16) -> u8 {
    let start = stage_start_area(stage) as u16;
    ((acc + start - 2) % NUM_AREA_CODES as u16 + 1) as u8
}
