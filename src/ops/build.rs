//! Construction from an explicit breakpoint list, with canonical-form checks.

use std::collections::BTreeMap;

use safe_bump::Idx;

use crate::bounded::Bounded;
use crate::error::BreakpointError;
use crate::store::ValueStore;

/// Validates `iter` as a canonical breakpoint sequence and stores its values.
///
/// The sequence must start at `K::min_value()`, be strictly increasing by
/// key, and never repeat a value in consecutive positions. On error, values
/// already allocated stay in `store`; callers discard the store.
pub fn build<K, V, S, I>(store: &mut S, iter: I) -> Result<BTreeMap<K, Idx<V>>, BreakpointError>
where
    K: Bounded,
    V: PartialEq,
    S: ValueStore<V>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut breakpoints = BTreeMap::new();
    for (position, (key, value)) in iter.into_iter().enumerate() {
        match breakpoints.last_key_value() {
            None if key != K::min_value() => return Err(BreakpointError::MissingMinimum),
            None => {}
            Some((prev_key, _)) if key <= *prev_key => {
                return Err(BreakpointError::Unordered { position });
            }
            Some((_, &prev_idx)) if *store.get_value(prev_idx) == value => {
                return Err(BreakpointError::Redundant { position });
            }
            Some(_) => {}
        }
        let idx = store.alloc_value(value);
        breakpoints.insert(key, idx);
    }
    if breakpoints.is_empty() {
        return Err(BreakpointError::Empty);
    }
    Ok(breakpoints)
}
