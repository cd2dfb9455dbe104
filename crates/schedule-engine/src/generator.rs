//! Backtracking search for conflict-free schedules.
//!
//! Items are visited in the given order. At each depth every showing of the
//! current item is tried in catalog order against the showings already chosen;
//! a conflicting candidate is pruned without expanding its subtree. A complete
//! assignment is emitted when every item has a showing.
//!
//! The produced set equals filtering the full cross product of per-item
//! showings down to pairwise conflict-free tuples. Emission order is the
//! depth-first order, lexicographic in each item's showing order. It is stable
//! for identical input and implies no ranking.

use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::availability::{filter_selection, AvailabilityConstraint};
use crate::conflict::conflicts;
use crate::error::{Result, ScheduleError};
use crate::item::Item;
use crate::schedule::{Schedule, ScheduleEntry};
use crate::selection::DesiredSelection;
use crate::showing::Showing;

#[derive(Debug, Default)]
struct SearchStats {
    emitted: usize,
    pruned: usize,
}

/// Generate every conflict-free schedule for `items`.
///
/// An empty `items` slice yields exactly one empty schedule. An empty result
/// means every full combination contains an overlap; it is not an error.
///
/// # Errors
/// Returns `ScheduleError::InfeasibleSelection` naming the first item with no
/// showings. No search is performed in that case.
pub fn generate(items: &[Item]) -> Result<Vec<Schedule>> {
    let mut schedules = Vec::new();
    for_each_schedule(items, |schedule| schedules.push(schedule))?;
    Ok(schedules)
}

/// Stream every conflict-free schedule to `visit` in emission order.
///
/// # Errors
/// Same as [`generate`].
pub fn for_each_schedule<F>(items: &[Item], mut visit: F) -> Result<()>
where
    F: FnMut(Schedule),
{
    ensure_feasible(items)?;

    let mut partial = Vec::with_capacity(items.len());
    let mut stats = SearchStats::default();
    search(
        items,
        &mut partial,
        &mut |chosen: &[&Showing]| visit(materialize(items, chosen)),
        &mut stats,
    );

    debug!(
        "search over {} items emitted {} schedules",
        items.len(),
        stats.emitted
    );
    trace!("pruned {} conflicting candidates", stats.pruned);
    Ok(())
}

/// Count conflict-free schedules without building them.
///
/// # Errors
/// Same as [`generate`].
pub fn count_schedules(items: &[Item]) -> Result<usize> {
    ensure_feasible(items)?;

    let mut partial = Vec::with_capacity(items.len());
    let mut stats = SearchStats::default();
    search(items, &mut partial, &mut |_: &[&Showing]| {}, &mut stats);
    Ok(stats.emitted)
}

/// Like [`generate`], splitting the first item's showings across threads.
///
/// The showings are cut into at most `available_parallelism()` contiguous
/// chunks. Each worker owns its partial assignment and result list; results are
/// concatenated in chunk order, which is the same order [`generate`] emits.
///
/// # Errors
/// Same as [`generate`].
pub fn generate_parallel(items: &[Item]) -> Result<Vec<Schedule>> {
    ensure_feasible(items)?;

    let Some(first) = items.first() else {
        return Ok(vec![Schedule::default()]);
    };

    let threads = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    // The first item is non-empty here, so chunk_len >= 1.
    let chunk_len = first.showings.len().div_ceil(threads);

    let per_worker: Vec<Vec<Schedule>> = std::thread::scope(|scope| {
        let handles: Vec<_> = first
            .showings
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut partial = Vec::with_capacity(items.len());
                    let mut found = Vec::new();
                    let mut stats = SearchStats::default();
                    for showing in chunk {
                        partial.push(showing);
                        search(
                            items,
                            &mut partial,
                            &mut |chosen: &[&Showing]| found.push(materialize(items, chosen)),
                            &mut stats,
                        );
                        partial.pop();
                    }
                    found
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    });

    let workers = per_worker.len();
    let schedules: Vec<Schedule> = per_worker.into_iter().flatten().collect();
    debug!(
        "parallel search over {} items on {} workers emitted {} schedules",
        items.len(),
        workers,
        schedules.len()
    );
    Ok(schedules)
}

/// Apply availability to a desired selection, then generate.
///
/// # Errors
/// Returns `ScheduleError::InfeasibleSelection` when a selected item has no
/// showing on an available date.
pub fn plan(
    selection: &DesiredSelection,
    constraint: &AvailabilityConstraint,
) -> Result<Vec<Schedule>> {
    let items = filter_selection(&selection.items(), constraint)?;
    generate(&items)
}

fn ensure_feasible(items: &[Item]) -> Result<()> {
    match items.iter().find(|item| item.is_empty()) {
        Some(item) => Err(ScheduleError::InfeasibleSelection {
            item: item.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Depth-first search from the current partial assignment.
///
/// `partial.len()` is the depth; `partial[k]` is the showing chosen for `items[k]`.
fn search<'a, F>(
    items: &'a [Item],
    partial: &mut Vec<&'a Showing>,
    emit: &mut F,
    stats: &mut SearchStats,
) where
    F: FnMut(&[&Showing]),
{
    let Some(item) = items.get(partial.len()) else {
        stats.emitted += 1;
        emit(partial.as_slice());
        return;
    };

    for candidate in &item.showings {
        if partial.iter().any(|chosen| conflicts(chosen, candidate)) {
            stats.pruned += 1;
            continue;
        }
        partial.push(candidate);
        search(items, partial, emit, stats);
        partial.pop();
    }
}

fn materialize(items: &[Item], chosen: &[&Showing]) -> Schedule {
    Schedule {
        entries: items
            .iter()
            .zip(chosen)
            .map(|(item, showing)| ScheduleEntry {
                item: item.name.clone(),
                showing: (*showing).clone(),
            })
            .collect(),
    }
}
