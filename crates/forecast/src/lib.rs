//! # loadshed-forecast
//!
//! "When is my area next shed" and "is it happening right now" answers on
//! top of the [`loadshed_rota`] table engine.
//!
//! The current time is always an explicit [`chrono::NaiveDateTime`]
//! parameter, never an ambient clock read, so every operation is a pure
//! function of its inputs and fully deterministic under test. Callers that
//! want wall-clock behaviour pass `Local::now().naive_local()`.
//!
//! ```ignore
//! use chrono::Local;
//! use loadshed_forecast::{current_status, next_occurrence};
//!
//! let now = Local::now().naive_local();
//! let next = next_occurrence(2, 7, now)?;
//! let status = current_status(2, 7, now);
//! ```

mod next;
mod status;

pub use next::{next_occurrence, NextOccurrence};
pub use status::{current_status, CurrentStatus};

// Callers matching on scan errors should not need a second dependency.
pub use loadshed_rota::ScheduleError;
