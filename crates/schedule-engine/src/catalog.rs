//! JSON catalog loading and saving.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "name": "Night Swim",
//!       "showings": [
//!         { "start": "19:00", "end": "20:45", "date": "2026-03-14", "location": "Capitol" },
//!         { "start": "13:30", "duration_minutes": 105, "date": "2026-03-15", "location": "Armouries" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Arrays keep their order, so the catalog's item and showing order survives a
//! load/save cycle. A showing's end is taken from `end`, else from
//! `duration_minutes`, else from [`CatalogOptions::default_duration_minutes`].
//! Saved catalogs always carry an explicit `end`. A showing listed twice for
//! the same item is kept once.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::CatalogOptions;
use crate::error::{Result, ScheduleError};
use crate::item::Item;
use crate::showing::Showing;

/// An ordered list of items as read from a catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

#[derive(Serialize, Deserialize)]
struct CatalogDocument {
    items: Vec<ItemRecord>,
}

#[derive(Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    showings: Vec<ShowingRecord>,
}

#[derive(Serialize, Deserialize)]
struct ShowingRecord {
    #[serde(with = "clock")]
    start: NaiveTime,
    #[serde(default, with = "clock::option", skip_serializing_if = "Option::is_none")]
    end: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_minutes: Option<u32>,
    date: NaiveDate,
    location: String,
}

impl ShowingRecord {
    fn resolve(self, item: &str, options: &CatalogOptions) -> Result<Showing> {
        match (self.end, self.duration_minutes) {
            (Some(end), _) => Showing::new(self.start, end, self.date, self.location),
            (None, Some(minutes)) => {
                Showing::with_duration(self.start, minutes, self.date, self.location)
            }
            (None, None) => {
                warn!(
                    "'{}' on {} at {} has no end time; assuming {} minutes",
                    item, self.date, self.start, options.default_duration_minutes
                );
                Showing::with_duration(
                    self.start,
                    options.default_duration_minutes,
                    self.date,
                    self.location,
                )
            }
        }
    }
}

impl From<&Showing> for ShowingRecord {
    fn from(s: &Showing) -> Self {
        Self {
            start: s.start,
            end: Some(s.end),
            duration_minutes: None,
            date: s.date,
            location: s.location.clone(),
        }
    }
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// # Errors
    /// Returns `ScheduleError::CatalogParse` for malformed JSON or a missing
    /// field, `ScheduleError::EmptyItem` for an item without showings, and
    /// `ScheduleError::InvalidShowing` for a showing that does not end after it
    /// starts on the same day.
    pub fn from_json(json: &str, options: &CatalogOptions) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;

        let items = document
            .items
            .into_iter()
            .map(|record| {
                if record.showings.is_empty() {
                    return Err(ScheduleError::EmptyItem(record.name));
                }
                let listed = record.showings.len();
                let showings = record
                    .showings
                    .into_iter()
                    .map(|s| s.resolve(&record.name, options))
                    .collect::<Result<Vec<_>>>()?;
                let item = Item::new(record.name, showings);
                if item.showings.len() < listed {
                    warn!(
                        "'{}' lists {} duplicate showings; keeping the first of each",
                        item.name,
                        listed - item.showings.len()
                    );
                }
                Ok(item)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("parsed catalog with {} items", items.len());
        Ok(Self { items })
    }

    /// Serialize to a pretty-printed document with explicit end times.
    ///
    /// # Errors
    /// Returns `ScheduleError::CatalogParse` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let document = CatalogDocument {
            items: self
                .items
                .iter()
                .map(|item| ItemRecord {
                    name: item.name.clone(),
                    showings: item.showings.iter().map(ShowingRecord::from).collect(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>, options: &CatalogOptions) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, options)
    }

    /// Write the catalog to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The first item with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Times of day as `HH:MM`, or `HH:MM:SS` when seconds are non-zero.
mod clock {
    use chrono::{NaiveTime, Timelike};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = if time.second() == 0 {
            time.format("%H:%M").to_string()
        } else {
            time.format("%H:%M:%S").to_string()
        };
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(de::Error::custom)
    }

    fn parse(text: &str) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(text, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
            .map_err(|_| format!("invalid time of day '{}', expected HH:MM or HH:MM:SS", text))
    }

    pub mod option {
        use chrono::NaiveTime;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|text| super::parse(&text).map_err(de::Error::custom))
                .transpose()
        }
    }
}
