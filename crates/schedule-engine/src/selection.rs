//! The person's desired items, keyed by the 1-based catalog index they typed.

use std::collections::BTreeMap;

use crate::error::{Result, ScheduleError};
use crate::item::Item;

/// Desired items in ascending key order.
///
/// Key order is the canonical order: it drives both the search order and the
/// entry order of every generated schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredSelection {
    entries: BTreeMap<usize, Item>,
}

impl DesiredSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from 1-based indices into `catalog`.
    ///
    /// Repeated indices are collapsed.
    ///
    /// # Errors
    /// Returns `ScheduleError::SelectionOutOfRange` for an index outside `1..=catalog.len()`.
    pub fn from_indices(catalog: &[Item], indices: &[usize]) -> Result<Self> {
        let mut selection = Self::new();
        for &index in indices {
            let item = index
                .checked_sub(1)
                .and_then(|i| catalog.get(i))
                .ok_or(ScheduleError::SelectionOutOfRange {
                    index,
                    len: catalog.len(),
                })?;
            selection.insert(index, item.clone());
        }
        Ok(selection)
    }

    /// Add an item under `key`.
    ///
    /// Returns `false` without changing anything when the key is taken or an
    /// identical item is already selected under another key.
    pub fn insert(&mut self, key: usize, item: Item) -> bool {
        if self.entries.contains_key(&key) || self.entries.values().any(|i| *i == item) {
            return false;
        }
        self.entries.insert(key, item);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// The selected items in key order.
    pub fn items(&self) -> Vec<Item> {
        self.entries.values().cloned().collect()
    }
}

/// Parse a line of typed indices such as `"1, 3 4"`.
///
/// Commas and whitespace both separate. Empty input yields an empty list.
///
/// # Errors
/// Returns `ScheduleError::InvalidSelectionInput` for a token that is not a
/// non-negative integer.
pub fn parse_indices(input: &str) -> Result<Vec<usize>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| ScheduleError::InvalidSelectionInput(token.to_string()))
        })
        .collect()
}
