//! Options applied while resolving a catalog into showings.

use serde::{Deserialize, Serialize};

/// Fallback length of a showing whose source gives neither an end time nor a
/// duration. A stand-in until the catalog carries real running times.
pub const DEFAULT_DURATION_MINUTES: u32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    /// Minutes added to `start` when a showing has no `end` or `duration_minutes`.
    pub default_duration_minutes: u32,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

impl CatalogOptions {
    pub fn with_default_duration(minutes: u32) -> Self {
        Self {
            default_duration_minutes: minutes,
        }
    }
}
