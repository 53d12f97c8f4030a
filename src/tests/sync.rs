use std::sync::{Arc, RwLock};
use std::thread;

use crate::{IntervalMap, IntervalMapSync};

#[test]
fn sync_new() {
    let map: IntervalMapSync<u32, char> = IntervalMapSync::new('A');
    assert_eq!(map.len(), 1);
    assert_eq!(map.lookup(&42), &'A');
}

#[test]
fn sync_assign_and_lookup() {
    let mut map = IntervalMapSync::<u32, char>::new('A');
    map.assign(1, 2, 'c');
    map.assign(2, 3, 'q');
    map.assign(2, 5, 'c');
    let pairs: Vec<(u32, char)> = map.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(pairs, vec![(0, 'A'), (1, 'c'), (5, 'A')]);
}

#[test]
fn sync_matches_single_threaded() {
    let ops = [(3_u32, 9_u32, 'b'), (5, 7, 'c'), (0, 4, 'b'), (6, 12, 'A')];
    let mut single = IntervalMap::<u32, char>::new('A');
    let mut shared = IntervalMapSync::<u32, char>::new('A');
    for &(b, e, v) in &ops {
        single.assign(b, e, v);
        shared.assign(b, e, v);
    }
    assert!(single.iter().eq(shared.iter()));
}

#[test]
fn sync_checkpoint_rollback() {
    let mut map = IntervalMapSync::<u32, char>::new('A');
    map.assign(1, 4, 'b');
    let cp = map.checkpoint();

    map.assign(2, 8, 'c');
    map.rollback(cp);

    assert_eq!(map.len(), 3);
    assert_eq!(map.lookup(&3), &'b');
    assert_eq!(map.lookup(&5), &'A');
}

#[test]
fn sync_commit_releases_checkpoint() {
    let mut map = IntervalMapSync::<u32, char>::new('A');
    let cp = map.checkpoint();
    map.assign(1, 4, 'b');
    map.assign(1, 4, 'c');
    map.commit();
    assert_eq!(map.arena_len(), map.len());

    map.rollback(cp);
    assert_eq!(map.lookup(&2), &'c');
}

#[test]
fn sync_from_breakpoints() {
    let map = IntervalMapSync::from_breakpoints([(0_u8, 1_u8), (10, 2)]).expect("valid");
    assert_eq!(map.lookup(&255), &2);
}

#[test]
fn sync_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<IntervalMapSync<u64, String>>();
}

#[test]
fn sync_is_sync() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<IntervalMapSync<u64, String>>();
}

/// Writers take the lock exclusively; readers see whole assigns only.
#[test]
fn sync_behind_rwlock() {
    let map = Arc::new(RwLock::new(IntervalMapSync::<u32, u32>::new(0)));

    let writers: Vec<_> = (1..=4_u32)
        .map(|t| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                for i in 0..25 {
                    let begin = t * 1_000 + i * 10;
                    map.write().expect("lock").assign(begin, begin + 5, t);
                }
            })
        })
        .collect();
    for w in writers {
        w.join().expect("writer thread");
    }

    let map = map.read().expect("lock");
    for t in 1..=4_u32 {
        assert_eq!(map.lookup(&(t * 1_000)), &t);
        assert_eq!(map.lookup(&(t * 1_000 + 5)), &0);
    }
    assert_eq!(map.len(), 1 + 4 * 25 * 2);
}
