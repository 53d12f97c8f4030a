use super::{assert_canonical, breakpoints};
use crate::IntervalMap;

/// Different assign histories producing the same mapping must produce the
/// same breakpoint sequence.
#[test]
fn history_independent_structure() {
    let mut a = IntervalMap::<u32, char>::new('A');
    a.assign(0, 10, 'x');
    a.assign(10, 20, 'y');
    a.assign(5, 15, 'z');

    let mut b = IntervalMap::<u32, char>::new('A');
    b.assign(15, 20, 'y');
    b.assign(5, 15, 'z');
    b.assign(0, 5, 'x');

    let mut c = IntervalMap::<u32, char>::new('A');
    for k in 0..20 {
        let v = match k {
            0..5 => 'x',
            5..15 => 'z',
            _ => 'y',
        };
        c.assign(k, k + 1, v);
    }

    assert_eq!(breakpoints(&a), breakpoints(&b));
    assert_eq!(a, c);
    assert_eq!(a.len(), 4);
}

/// Filling a range one key at a time with one value collapses to one run.
#[test]
fn unit_assigns_merge_into_one_run() {
    let mut map = IntervalMap::<u32, char>::new('A');
    for k in 10..50 {
        map.assign(k, k + 1, 'b');
    }
    assert_eq!(breakpoints(&map), vec![(0, 'A'), (10, 'b'), (50, 'A')]);
}

/// Filling right-to-left merges with the successor run every time.
#[test]
fn reverse_unit_assigns_merge_into_one_run() {
    let mut map = IntervalMap::<u32, char>::new('A');
    for k in (10..50).rev() {
        map.assign(k, k + 1, 'b');
    }
    assert_eq!(breakpoints(&map), vec![(0, 'A'), (10, 'b'), (50, 'A')]);
}

#[test]
fn repeated_assign_is_idempotent() {
    let mut map = IntervalMap::<u32, char>::new('A');
    map.assign(2, 9, 'b');
    map.assign(4, 6, 'c');
    let once = breakpoints(&map);
    map.assign(4, 6, 'c');
    assert_eq!(breakpoints(&map), once);
}

/// Joining neighbours on both sides leaves a single run.
#[test]
fn bridge_between_equal_runs() {
    let mut map = IntervalMap::<u32, char>::new('A');
    map.assign(0, 10, 'b');
    map.assign(20, 30, 'b');
    map.assign(10, 20, 'b');
    assert_eq!(breakpoints(&map), vec![(0, 'b'), (30, 'A')]);
    assert_canonical(&map);
}

#[test]
fn wide_assign_clears_interior() {
    let mut map = IntervalMap::<u32, u32>::new(0);
    for k in 1..100 {
        map.assign(k * 10, k * 10 + 5, k);
    }
    assert_eq!(map.len(), 199);
    map.assign(7, 993, 0);
    assert_eq!(breakpoints(&map), vec![(0, 0), (993, 99), (995, 0)]);
}

/// Minimum-key run can be replaced and merged like any other.
#[test]
fn minimum_breakpoint_is_overwritten_not_removed() {
    let mut map = IntervalMap::<u32, char>::new('A');
    map.assign(0, 5, 'b');
    map.assign(5, 9, 'b');
    assert_eq!(breakpoints(&map), vec![(0, 'b'), (9, 'A')]);
    map.assign(0, 9, 'A');
    assert_eq!(breakpoints(&map), vec![(0, 'A')]);
}

#[test]
fn maps_with_same_mapping_are_equal() {
    let mut a = IntervalMap::<u8, bool>::new(false);
    a.assign(10, 20, true);
    let b = IntervalMap::from_breakpoints([(0_u8, false), (10, true), (20, false)])
        .expect("valid breakpoints");
    assert_eq!(a, b);

    let mut c = IntervalMap::<u8, bool>::new(false);
    c.assign(10, 21, true);
    assert_ne!(a, c);
}
