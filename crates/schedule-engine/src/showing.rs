//! A single dated, timed occurrence of an item at a location.
//!
//! Showings never span midnight: `start < end` always holds on `date`.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::{Result, ScheduleError};

/// One concrete occurrence of an item.
///
/// Construct through [`Showing::new`] or [`Showing::with_duration`] so the
/// `start < end` invariant is checked; the fields stay public for reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Showing {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub date: NaiveDate,
    pub location: String,
}

impl Showing {
    /// Create a showing from explicit start and end times.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidShowing` unless `start < end`.
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        date: NaiveDate,
        location: impl Into<String>,
    ) -> Result<Self> {
        let location = location.into();
        if start >= end {
            return Err(ScheduleError::InvalidShowing {
                start,
                end,
                date,
                location,
            });
        }
        Ok(Self {
            start,
            end,
            date,
            location,
        })
    }

    /// Create a showing whose end is `start + duration_minutes`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidShowing` when the duration is zero or the
    /// end would fall on the following day.
    pub fn with_duration(
        start: NaiveTime,
        duration_minutes: u32,
        date: NaiveDate,
        location: impl Into<String>,
    ) -> Result<Self> {
        let (end, wrapped_secs) =
            start.overflowing_add_signed(Duration::minutes(i64::from(duration_minutes)));
        if wrapped_secs != 0 {
            // The sum crossed midnight; report the wrapped end so the error
            // shows an end that does not follow the start.
            return Err(ScheduleError::InvalidShowing {
                start,
                end,
                date,
                location: location.into(),
            });
        }
        Self::new(start, end, date, location)
    }

    /// Length of the showing in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Display for Showing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-> Start Time: {}", self.start.format("%H:%M"))?;
        writeln!(f, "-> End Time: {}", self.end.format("%H:%M"))?;
        writeln!(f, "-> Date: {}", self.date)?;
        write!(f, "-> Location: {}", self.location)
    }
}
