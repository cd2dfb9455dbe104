//! # schedule-engine
//!
//! Conflict-free schedule generation for multi-day festivals.
//!
//! Given the items a person wants to attend, each with several mutually
//! exclusive showings, the engine produces every schedule that picks exactly
//! one showing per item with no two showings overlapping, optionally restricted
//! to the dates the person is available.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use schedule_engine::{generate, Item, Showing};
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
//!
//! let first = Item::new(
//!     "First",
//!     vec![
//!         Showing::new(t(9, 0), t(10, 30), day, "Capitol").unwrap(),
//!         Showing::new(t(11, 0), t(12, 30), day, "Capitol").unwrap(),
//!     ],
//! );
//! let second = Item::new(
//!     "Second",
//!     vec![Showing::new(t(10, 0), t(11, 0), day, "Armouries").unwrap()],
//! );
//!
//! let schedules = generate(&[first, second]).unwrap();
//! assert_eq!(schedules.len(), 1);
//! assert_eq!(schedules[0].entries[0].showing.start, t(11, 0));
//! ```
//!
//! ## Modules
//!
//! - [`showing`] — a single dated, timed occurrence at a location
//! - [`item`] — a named thing to attend with its showings
//! - [`conflict`] — half-open overlap predicate and pairwise conflict listing
//! - [`availability`] — restrict showings to the dates a person can attend
//! - [`selection`] — the person's desired items, keyed by catalog index
//! - [`generator`] — backtracking search for conflict-free schedules
//! - [`schedule`] — the generator's output type
//! - [`catalog`] — JSON catalog loading and saving
//! - [`config`] — catalog resolution options
//! - [`error`] — Error types

pub mod availability;
pub mod catalog;
pub mod config;
pub mod conflict;
pub mod error;
pub mod generator;
pub mod item;
pub mod schedule;
pub mod selection;
pub mod showing;

pub use availability::{filter_by_availability, filter_selection, AvailabilityConstraint};
pub use catalog::Catalog;
pub use config::CatalogOptions;
pub use conflict::{conflicts, find_conflicts, Conflict};
pub use error::ScheduleError;
pub use generator::{count_schedules, for_each_schedule, generate, generate_parallel, plan};
pub use item::Item;
pub use schedule::{Schedule, ScheduleEntry};
pub use selection::{parse_indices, DesiredSelection};
pub use showing::Showing;
