mod common;
use common::{CHAT, create, dt, fixed_resolver, origin};
use kickoff::core::event::EventLogic;
use kickoff::core::spec_parser::{EventDefaults, SkipReason, SpecParser};
use kickoff::db::log::load_log;
use kickoff::db::pool::DbPool;
use kickoff::db::store::EventStore;
use kickoff::errors::AppError;
use kickoff::models::event::{FieldUpdate, Origin};

#[test]
fn test_create_event_persists_parsed_fields() {
    let mut pool = DbPool::in_memory().expect("pool");
    let ev = create(
        &mut pool,
        "title=Friday football\naddress=Lypy 6A; limit=14\ntime=25-12-2025 20:15",
    );

    assert!(ev.id() > 0);
    assert_eq!(ev.title(), "Friday football");
    assert_eq!(ev.address(), "Lypy 6A");
    assert_eq!(ev.capacity(), 14);
    assert_eq!(ev.scheduled_time(), dt(2025, 12, 25, 20, 15));
    assert_eq!(ev.origin_chat_id(), CHAT);
    assert_eq!(ev.origin_message_id(), 1);
    assert_eq!(ev.created_at(), dt(2024, 1, 1, 12, 0));

    let loaded = pool.load_event(ev.id()).expect("load").expect("exists");
    assert_eq!(loaded, ev);
}

#[test]
fn test_create_event_reports_skipped_statements() {
    let mut pool = DbPool::in_memory().expect("pool");
    let defaults = EventDefaults::default();
    let parser = SpecParser::new(&defaults, fixed_resolver());

    let created = EventLogic::create_event(&mut pool, &parser, "limit=lots\nfoo=bar", origin(5))
        .expect("create");

    assert_eq!(created.event.capacity(), 21);
    assert_eq!(
        created.skipped,
        vec![
            SkipReason::InvalidCapacity("lots".to_string()),
            SkipReason::UnknownField("foo".to_string()),
        ]
    );
}

#[test]
fn test_list_events_ordered_by_time_and_scoped_to_chat() {
    let mut pool = DbPool::in_memory().expect("pool");
    let late = create(&mut pool, "title=Late; time=10-3-2025 21:00");
    let early = create(&mut pool, "title=Early; time=1-3-2025 18:00");

    let defaults = EventDefaults::default();
    let parser = SpecParser::new(&defaults, fixed_resolver());
    let other_chat = Origin {
        chat_id: 42,
        ..origin(9)
    };
    EventLogic::create_event(&mut pool, &parser, "title=Elsewhere", other_chat).expect("create");

    let events = EventLogic::list_events(&mut pool, CHAT, None).expect("list");
    let ids: Vec<i64> = events.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec![early.id(), late.id()]);
}

#[test]
fn test_list_events_hides_past_occasions() {
    let mut pool = DbPool::in_memory().expect("pool");
    create(&mut pool, "title=Past; time=1-3-2025 18:00");
    let future = create(&mut pool, "title=Future; time=1-3-2026 18:00");

    let events =
        EventLogic::list_events(&mut pool, CHAT, Some(dt(2025, 6, 1, 0, 0))).expect("list");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id(), future.id());
}

#[test]
fn test_update_event_whitelisted_fields() {
    let mut pool = DbPool::in_memory().expect("pool");
    let ev = create(&mut pool, "title=Before");

    let updated = EventLogic::update_event(
        &mut pool,
        ev.id(),
        &[
            FieldUpdate::Title("After".to_string()),
            FieldUpdate::Time(dt(2024, 2, 2, 20, 0)),
            FieldUpdate::Address("New pitch".to_string()),
            FieldUpdate::Capacity(10),
        ],
    )
    .expect("update");

    assert_eq!(updated.id(), ev.id());
    assert_eq!(updated.title(), "After");
    assert_eq!(updated.scheduled_time(), dt(2024, 2, 2, 20, 0));
    assert_eq!(updated.address(), "New pitch");
    assert_eq!(updated.capacity(), 10);
    assert_eq!(updated.origin_message_id(), ev.origin_message_id());
}

#[test]
fn test_update_event_rejects_invalid_values() {
    let mut pool = DbPool::in_memory().expect("pool");
    let ev = create(&mut pool, "title=Keep");

    let err = EventLogic::update_event(&mut pool, ev.id(), &[FieldUpdate::Capacity(0)])
        .expect_err("zero capacity");
    assert!(matches!(err, AppError::InvalidCapacity(_)));

    let err = EventLogic::update_event(
        &mut pool,
        ev.id(),
        &[
            FieldUpdate::Address("ignored".to_string()),
            FieldUpdate::Title("  ".to_string()),
        ],
    )
    .expect_err("empty title");
    assert!(matches!(err, AppError::InvalidTitle));

    // nothing from the rejected batch was written
    let loaded = pool.load_event(ev.id()).expect("load").expect("exists");
    assert_eq!(loaded, ev);
}

#[test]
fn test_update_missing_event() {
    let mut pool = DbPool::in_memory().expect("pool");
    let err = EventLogic::update_event(&mut pool, 999, &[FieldUpdate::Capacity(5)])
        .expect_err("missing");
    assert!(matches!(err, AppError::EventNotFound(999)));
}

#[test]
fn test_update_from_text_changes_only_mentioned_fields() {
    let mut pool = DbPool::in_memory().expect("pool");
    let ev = create(&mut pool, "title=Weekly; address=Old field; limit=12");

    let defaults = EventDefaults::default();
    let parser = SpecParser::new(&defaults, fixed_resolver());
    let (updated, skipped) =
        EventLogic::update_event_from_text(&mut pool, &parser, ev.id(), "time=+1 hour\nlimit=x")
            .expect("update");

    assert_eq!(skipped, vec![SkipReason::InvalidCapacity("x".to_string())]);
    assert_eq!(updated.title(), "Weekly");
    assert_eq!(updated.address(), "Old field");
    assert_eq!(updated.capacity(), 12);
    assert_eq!(updated.scheduled_time(), dt(2024, 1, 2, 20, 0));
}

#[test]
fn test_operations_are_audited() {
    let mut pool = DbPool::in_memory().expect("pool");
    let ev = create(&mut pool, "title=Audited");
    EventLogic::update_event(&mut pool, ev.id(), &[FieldUpdate::Capacity(8)]).expect("update");

    let ops: Vec<String> = load_log(&pool.conn)
        .expect("log")
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .filter(|op| op != "migration_applied")
        .collect();
    assert_eq!(ops, vec!["create".to_string(), "update".to_string()]);
}

#[test]
fn test_title_with_quotes_is_stored_verbatim() {
    let mut pool = DbPool::in_memory().expect("pool");
    let ev = create(&mut pool, "title=Bob's \"big\" game'); DROP TABLE event; --");

    let loaded = pool.load_event(ev.id()).expect("load").expect("exists");
    assert_eq!(loaded.title(), "Bob's \"big\" game')");
}
