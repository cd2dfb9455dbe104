//! Restrict showings to the dates a person can attend.
//!
//! An empty date set means "no restriction", never "available on no dates".

use std::collections::BTreeSet;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::item::Item;

/// The set of dates a person can attend at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityConstraint {
    pub available_dates: BTreeSet<NaiveDate>,
}

impl AvailabilityConstraint {
    /// A constraint that admits every date.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            available_dates: dates.into_iter().collect(),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.available_dates.is_empty()
    }

    /// Whether a showing on `date` may be attended.
    pub fn allows(&self, date: NaiveDate) -> bool {
        self.is_unrestricted() || self.available_dates.contains(&date)
    }
}

/// Return a new item keeping only the showings on available dates.
///
/// Relative order of the surviving showings is preserved. The input is never
/// modified.
pub fn filter_by_availability(item: &Item, constraint: &AvailabilityConstraint) -> Item {
    if constraint.is_unrestricted() {
        return item.clone();
    }
    let showings = item
        .showings
        .iter()
        .filter(|s| constraint.allows(s.date))
        .cloned()
        .collect();
    item.with_showings(showings)
}

/// Filter every item of a selection, failing on the first item left empty.
///
/// # Errors
/// Returns `ScheduleError::InfeasibleSelection` naming the first item (in
/// order) with no showing on an available date.
pub fn filter_selection(items: &[Item], constraint: &AvailabilityConstraint) -> Result<Vec<Item>> {
    items
        .iter()
        .map(|item| {
            let filtered = filter_by_availability(item, constraint);
            debug!(
                "'{}': {} of {} showings available",
                item.name,
                filtered.showings.len(),
                item.showings.len()
            );
            if filtered.is_empty() {
                Err(ScheduleError::InfeasibleSelection {
                    item: item.name.clone(),
                })
            } else {
                Ok(filtered)
            }
        })
        .collect()
}
