//! The generator's output type.

use std::fmt;

use serde::Serialize;

use crate::showing::Showing;

/// One chosen showing for one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScheduleEntry {
    pub item: String,
    pub showing: Showing,
}

/// A full, conflict-free assignment of one showing per desired item.
///
/// Entries follow the selection's key order. No two entries overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", entry.item)?;
            write!(f, "{}", entry.showing)?;
        }
        Ok(())
    }
}
