//! Error types for schedule-engine operations.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A showing does not satisfy `start < end` on a single date.
    #[error("Invalid showing on {date} at {location}: {start} does not precede {end}")]
    InvalidShowing {
        start: NaiveTime,
        end: NaiveTime,
        date: NaiveDate,
        location: String,
    },

    /// A desired item has no showings left after availability filtering.
    #[error("Infeasible selection: '{item}' has no showings on an available date")]
    InfeasibleSelection { item: String },

    /// A catalog item was supplied without any showings.
    #[error("Item '{0}' has no showings")]
    EmptyItem(String),

    #[error("Selection {index} is out of range (catalog has {len} items)")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("Invalid selection input: '{0}'")]
    InvalidSelectionInput(String),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
