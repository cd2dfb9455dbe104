//! Detect overlapping showings.
//!
//! Showings on different dates never conflict. On the same date, two showings
//! conflict when their half-open intervals `[start, end)` intersect, so
//! back-to-back showings (one ends exactly when the other starts) are NOT
//! conflicts.

use serde::Serialize;

use crate::item::Item;
use crate::showing::Showing;

/// Whether two showings overlap in time.
///
/// Symmetric, and true for a showing compared with itself.
pub fn conflicts(a: &Showing, b: &Showing) -> bool {
    if a.date != b.date {
        return false;
    }
    // Half-open overlap: excludes the adjacent case where a.end == b.start.
    a.start < b.end && b.start < a.end
}

/// A detected conflict between showings of two different items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub item_a: String,
    pub showing_a: Showing,
    pub item_b: String,
    pub showing_b: Showing,
    pub overlap_minutes: i64,
}

/// Find every conflicting pair of showings between distinct items.
///
/// Pairs are reported in `(item index, showing index)` order with the earlier
/// item as `item_a`. The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts(items: &[Item]) -> Vec<Conflict> {
    let mut found = Vec::new();

    for (i, item_a) in items.iter().enumerate() {
        for item_b in &items[i + 1..] {
            for a in &item_a.showings {
                for b in &item_b.showings {
                    if conflicts(a, b) {
                        let overlap_start = a.start.max(b.start);
                        let overlap_end = a.end.min(b.end);
                        found.push(Conflict {
                            item_a: item_a.name.clone(),
                            showing_a: a.clone(),
                            item_b: item_b.name.clone(),
                            showing_b: b.clone(),
                            overlap_minutes: (overlap_end - overlap_start).num_minutes(),
                        });
                    }
                }
            }
        }
    }

    found
}
