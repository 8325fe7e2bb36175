//! Time-of-day value type for the time-based resolver.

/// An hour/minute pair within a single day.
///
/// Out-of-range components coerce to 0 rather than erroring: an hour of 24
/// or more becomes 0, a minute of 60 or more becomes 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DayTime {
    hour: u8,
    minute: u8,
}

impl DayTime {
    /// Creates a new `DayTime`, coercing out-of-range components to 0.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: if hour >= 24 { 0 } else { hour },
            minute: if minute >= 60 { 0 } else { minute },
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }
}
