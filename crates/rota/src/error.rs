//! Error types for the loadshed-rota crate.

/// Error type for the fallible operations of the schedule engine.
///
/// Only the multi-day scan validates its inputs; every other entry point
/// folds out-of-range values deterministically instead of erroring. The
/// two variants identify which argument violated its bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when a stage is outside the valid range 1..=8.
    #[error("stage out of range: {stage} (must be 1..=8)")]
    StageOutOfRange {
        /// The invalid stage that was provided.
        stage: u8,
    },

    /// Returned when an area code is outside the valid range 1..=16.
    #[error("area code out of range: {area} (must be 1..=16)")]
    AreaOutOfRange {
        /// The invalid area code that was provided.
        area: u8,
    },
}
