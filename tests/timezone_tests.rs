//! Runs with a pinned `TZ`; kept in its own test binary because it changes
//! the process environment.

mod common;
use common::{create, dt};
use kickoff::db::pool::DbPool;
use kickoff::db::store::EventStore;
use kickoff::utils::time::{from_epoch, normalize_local, to_epoch};

#[test]
fn test_dst_gap_time_round_trips_through_storage() {
    // SAFETY: the only test in this binary, no other thread reads the environment.
    unsafe { std::env::set_var("TZ", "Europe/Kyiv") };

    // 03:00-04:00 does not exist on 2025-03-30 in Kyiv
    let gap = dt(2025, 3, 30, 3, 30);
    let normalized = normalize_local(gap);
    assert_eq!(from_epoch(to_epoch(normalized)), Some(normalized));
    assert_eq!(normalize_local(normalized), normalized);

    let mut pool = DbPool::in_memory().expect("pool");
    let ev = create(&mut pool, "title=Night; time=30-3-2025 03:30");
    assert_eq!(ev.scheduled_time(), normalized);

    let loaded = pool
        .load_event(ev.id())
        .expect("load")
        .expect("event exists");
    assert_eq!(loaded.scheduled_time(), ev.scheduled_time());

    let regular = dt(2025, 3, 29, 3, 30);
    assert_eq!(normalize_local(regular), regular);
    assert_eq!(from_epoch(to_epoch(regular)), Some(regular));
}
