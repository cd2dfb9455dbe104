//! A named thing to attend, with its showings in source order.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::showing::Showing;

/// An item with one or more mutually exclusive showings.
///
/// The order of `showings` is the catalog's order. It carries no meaning of its
/// own but fixes the order in which schedules are produced. Showings are
/// distinct: constructors drop repeats, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: String,
    pub showings: Vec<Showing>,
}

impl Item {
    pub fn new(name: impl Into<String>, showings: Vec<Showing>) -> Self {
        Self {
            name: name.into(),
            showings: distinct(showings),
        }
    }

    /// A copy of this item carrying a different set of showings.
    pub fn with_showings(&self, showings: Vec<Showing>) -> Self {
        Self {
            name: self.name.clone(),
            showings: distinct(showings),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.showings.is_empty()
    }
}

fn distinct(mut showings: Vec<Showing>) -> Vec<Showing> {
    let mut seen = HashSet::with_capacity(showings.len());
    showings.retain(|s| seen.insert(s.clone()));
    showings
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Showings:")?;
        for showing in &self.showings {
            write!(f, "\n{}", showing)?;
        }
        Ok(())
    }
}
