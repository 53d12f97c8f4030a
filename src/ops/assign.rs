//! Assign operation: overwrite `[begin, end)` with local boundary edits.
//!
//! The breakpoint tree is kept canonical: no two consecutive breakpoints
//! resolve to equal values. Only the two boundaries and the breakpoints
//! strictly inside the interval are touched.

use std::collections::BTreeMap;
use std::ops::Bound::Excluded;

use safe_bump::Idx;

use crate::bounded::Bounded;
use crate::journal::{Edit, Journal};
use crate::ops::lookup::{predecessor, strict_predecessor};
use crate::store::ValueStore;

/// What happened to the breakpoint structure at one interval boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// No breakpoint was added or removed.
    Kept,
    /// A breakpoint was written, starting a new run.
    Split,
    /// Two runs with equal values were joined by removing a breakpoint
    /// (or by not writing one).
    Joined,
}

/// Outcome of an effective assign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignOutcome {
    /// Boundary at `end`.
    pub end: Boundary,
    /// Boundary at `begin`.
    pub begin: Boundary,
    /// Number of breakpoints strictly inside `(begin, end)` that were removed.
    pub removed: usize,
}

/// Assigns `value` to every key in `[begin, end)`.
///
/// Returns `None` without touching anything if `!(begin < end)`.
///
/// `end == K::max_value()` never gets a breakpoint: there is no key after the
/// domain maximum for the old value to continue on, so the run extends to the
/// end of the domain.
pub fn assign<K, V, S>(
    store: &mut S,
    breakpoints: &mut BTreeMap<K, Idx<V>>,
    journal: &mut Journal<K, V>,
    begin: K,
    end: K,
    value: V,
) -> Option<AssignOutcome>
where
    K: Bounded + Clone,
    V: PartialEq,
    S: ValueStore<V>,
{
    if begin >= end {
        return None;
    }

    // Boundary at `end`, resolved against the state before any edit.
    let (at_end, end_idx) = match predecessor(breakpoints, &end) {
        Some((key, idx)) => (*key == end, idx),
        None => return None,
    };
    let end_matches = *store.get_value(end_idx) == value;
    let end_boundary = match (at_end, end_matches) {
        (false, false) if end != K::max_value() => {
            breakpoints.insert(end.clone(), end_idx);
            journal.record(Edit::Inserted(end.clone()));
            Boundary::Split
        }
        (true, true) => {
            breakpoints.remove(&end);
            journal.record(Edit::Removed(end.clone(), end_idx));
            Boundary::Joined
        }
        _ => Boundary::Kept,
    };

    // Boundary at `begin`: merge with the preceding run if it already holds `value`.
    let merges = strict_predecessor(breakpoints, &begin)
        .is_some_and(|(_, idx)| *store.get_value(idx) == value);
    let begin_boundary = if merges {
        if let Some(idx) = breakpoints.remove(&begin) {
            journal.record(Edit::Removed(begin.clone(), idx));
        }
        Boundary::Joined
    } else {
        let idx = store.alloc_value(value);
        match breakpoints.insert(begin.clone(), idx) {
            Some(old) => journal.record(Edit::Replaced(begin.clone(), old)),
            None => journal.record(Edit::Inserted(begin.clone())),
        }
        Boundary::Split
    };

    // Everything strictly inside the interval is superseded.
    let mut removed = 0;
    for (key, idx) in breakpoints.extract_if((Excluded(&begin), Excluded(&end)), |_, _| true) {
        journal.record(Edit::Removed(key, idx));
        removed += 1;
    }

    Some(AssignOutcome {
        end: end_boundary,
        begin: begin_boundary,
        removed,
    })
}
