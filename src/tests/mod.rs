use crate::IntervalMap;

mod canonical;
mod sync;

/// Snapshot of the breakpoint sequence as owned pairs.
fn breakpoints<K: Copy, V: Copy>(map: &IntervalMap<K, V>) -> Vec<(K, V)> {
    map.iter().map(|(&k, &v)| (k, v)).collect()
}

/// Panics unless the map starts at the domain minimum and holds no two
/// consecutive equal values.
fn assert_canonical<V: PartialEq + std::fmt::Debug>(map: &IntervalMap<u32, V>) {
    let keys: Vec<u32> = map.iter().map(|(&k, _)| k).collect();
    assert_eq!(keys.first(), Some(&0), "no breakpoint at the minimum");
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys not increasing");
    let values: Vec<&V> = map.iter().map(|(_, v)| v).collect();
    for pair in values.windows(2) {
        assert_ne!(pair[0], pair[1], "consecutive runs hold equal values");
    }
}
