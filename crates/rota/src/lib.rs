//! # loadshed-rota
//!
//! Pure table arithmetic for the published rotating load-shedding schedule.
//!
//! The published schedule is not stored as data: it is a repeating 16-area
//! cycle advanced by a fixed increment per 2-hour timeslot, perturbed on a
//! handful of calendar days. This crate reimplements that generator, so any
//! (stage, day, timeslot) cell of the table can be computed locally.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["day_start_offset()"] --> B["areas_for_slot()"]
//!     H["slot_from_hour()"] --> C["areas_at_time()"]
//!     B --> C
//!     B --> D["slots_for_area()"]
//!     D --> E["next_slot_in_day()"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use loadshed_rota::{areas_for_slot, next_slot_in_day, slots_for_area, DayTime};
//!
//! // Which areas are shed at stage 2 on the 3rd, during slot 5?
//! let areas = areas_for_slot(2, 3, 5);
//!
//! // Which slots hit area 7 on the 3rd at stage 2?
//! let slots = slots_for_area(2, 3, 7);
//!
//! // First slot for area 7 after 14:00, if any remains today.
//! let next = next_slot_in_day(2, 3, 7, Some(14));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `tables` | Published constants, day folding, bounds validation |
//! | `offset` | Cumulative area-code offset at the start of a day |
//! | `areas` | Slot-based and time-based area resolution |
//! | `slots` | Slot search for a given area |
//! | `slot` | Hour/timeslot conversion helpers |
//! | `daytime` | Hour/minute value type |
//! | `error` | Error types |

mod areas;
mod daytime;
mod error;
mod offset;
mod slot;
mod slots;
mod tables;

pub use areas::{areas_at_time, areas_at_time_with_overlap, areas_for_slot};
pub use daytime::DayTime;
pub use error::ScheduleError;
pub use offset::day_start_offset;
pub use slot::{slot_from_hour, slot_start_hour, OVERLAP_MARGIN_MINUTES, SLOT_HOURS};
pub use slots::{next_slot_in_day, slots_for_area};
pub use tables::{
    fold_day, stage_start_area, validate_area, validate_stage, EXTRA_INCREMENT_DAYS,
    HIGHEST_STAGE, LOW_STAGE_EXTRA_INCREMENT_DAYS, LOW_STAGE_MAX, MAX_MONTH_DAY, NUM_AREA_CODES,
    NUM_DAY_GROUPS, NUM_TIME_SLOTS,
};
