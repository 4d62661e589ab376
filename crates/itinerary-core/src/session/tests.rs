use super::*;
use crate::{
    models::ItemId,
    store::{MemoryStore, TRIP_KEY},
};

fn eur() -> Locale {
    Locale {
        currency: "EUR".to_string(),
        timezone: Some("Europe/Rome".to_string()),
    }
}

fn open(store: MemoryStore) -> Session<MemoryStore> {
    Session::open_with_locale(store, &CreateTrip::default(), &eur()).unwrap()
}

fn stored_trip(session: &Session<MemoryStore>) -> Trip {
    session.gateway().try_load().unwrap().unwrap()
}

fn add(session: &mut Session<MemoryStore>, title: &str) -> Item {
    session
        .add_item(&CreateItem {
            title: title.to_string(),
            ..CreateItem::default()
        })
        .unwrap()
}

#[test]
fn test_open_empty_store_creates_and_saves() {
    let session = open(MemoryStore::new());

    assert_eq!(session.outcome(), &LoadOutcome::Created);
    assert_eq!(session.trip().name, "My Trip");
    assert_eq!(session.trip().currency, "EUR");
    assert_eq!(session.trip().day_count(), 3);
    assert_eq!(session.trip().timezone.as_deref(), Some("Europe/Rome"));
    assert_eq!(&stored_trip(&session), session.trip());
}

#[test]
fn test_open_existing_trip() {
    let mut first = open(MemoryStore::new());
    add(&mut first, "Pantheon");
    let store = first.gateway.into_store();

    let second = open(store);
    assert_eq!(second.outcome(), &LoadOutcome::Loaded);
    assert_eq!(second.trip().item_count(), 1);
    assert!(second.opening_report().is_clean());
}

#[test]
fn test_open_malformed_store_recovers() {
    let mut store = MemoryStore::new();
    store.set(TRIP_KEY, "definitely not json").unwrap();

    let session = open(store);
    assert!(matches!(session.outcome(), LoadOutcome::Recovered { .. }));
    assert_eq!(session.trip().item_count(), 0);
    // The unreadable snapshot is replaced
    assert_eq!(&stored_trip(&session), session.trip());
}

#[test]
fn test_open_repairs_misplaced_items() {
    let blob = r#"{
        "name": "Repair",
        "currency": "USD",
        "days": [
            {"items": [{"id": "x1", "title": "Stray", "category": "activity",
                        "dayIndex": 1, "segment": "morning", "durationMinutes": 30}]},
            {"items": []}
        ]
    }"#;
    let mut store = MemoryStore::new();
    store.set(TRIP_KEY, blob).unwrap();

    let session = open(store);
    assert_eq!(session.outcome(), &LoadOutcome::Loaded);
    assert_eq!(session.opening_report().relocated.len(), 1);
    assert!(session.trip().days()[0].items.is_empty());
    assert_eq!(session.trip().days()[1].items[0].title, "Stray");

    // The repaired trip was written back
    let stored = stored_trip(&session);
    assert_eq!(stored.days()[1].items.len(), 1);
}

#[test]
fn test_move_item_persists() {
    let mut session = open(MemoryStore::new());
    let item = add(&mut session, "Trastevere dinner");

    let placement = session
        .move_item(&MoveItem {
            id: item.id.short().to_string(),
            day: 2,
            segment: "evening".to_string(),
        })
        .unwrap();
    assert_eq!(placement.from_day, 0);
    assert_eq!(placement.to_day, 2);
    assert_eq!(placement.start_time.to_string(), "17:00");

    let stored = stored_trip(&session);
    let moved = stored.item(&item.id).unwrap();
    assert_eq!(moved.day_index, 2);
    assert_eq!(moved.segment, "evening");
    assert!(stored.days()[0].items.is_empty());
}

#[test]
fn test_rejected_move_leaves_store_untouched() {
    let mut session = open(MemoryStore::new());
    let item = add(&mut session, "Vatican");
    let before = session.gateway().raw().unwrap();

    let err = session
        .move_item(&MoveItem {
            id: item.id.to_string(),
            day: 9,
            segment: "morning".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidDestination { .. }));

    let err = session
        .move_item(&MoveItem {
            id: "nope".to_string(),
            day: 0,
            segment: "morning".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ItineraryError::ItemNotFound { .. }));

    assert_eq!(session.gateway().raw().unwrap(), before);
}

#[test]
fn test_remove_and_restore() {
    let mut session = open(MemoryStore::new());
    let item = add(&mut session, "Forum");
    let reference = ItemRef {
        id: item.id.to_string(),
    };

    let removed = session.remove_item(&reference).unwrap();
    assert_eq!(removed.status, ItemStatus::Removed);
    assert_eq!(
        stored_trip(&session).item(&item.id).unwrap().status,
        ItemStatus::Removed
    );

    let restored = session.restore_item(&reference).unwrap();
    assert!(restored.is_active());
    assert!(stored_trip(&session).item(&item.id).unwrap().is_active());
}

#[test]
fn test_update_and_start_date() {
    let mut session = open(MemoryStore::new());
    let item = add(&mut session, "Borghese");

    session
        .update_item(&UpdateItem {
            id: item.id.to_string(),
            cost: Some(15.0),
            notes: Some("Book ahead".to_string()),
            ..UpdateItem::default()
        })
        .unwrap();
    let date = jiff::civil::date(2025, 9, 1);
    session
        .set_start_date(&SetStartDate { date: Some(date) })
        .unwrap();

    let stored = stored_trip(&session);
    let updated = stored.item(&item.id).unwrap();
    assert_eq!(updated.cost, Some(15.0));
    assert_eq!(updated.notes, "Book ahead");
    assert_eq!(stored.day_date(2), Some(jiff::civil::date(2025, 9, 3)));
}

#[test]
fn test_reset_replaces_trip() {
    let mut session = open(MemoryStore::new());
    add(&mut session, "Old plan");

    let trip = session
        .reset_with_locale(
            &CreateTrip {
                name: "Naples".to_string(),
                days: 5,
                ..CreateTrip::default()
            },
            &eur(),
        )
        .unwrap();
    assert_eq!(trip.name, "Naples");
    assert_eq!(trip.item_count(), 0);
    assert_eq!(stored_trip(&session).day_count(), 5);

    let err = session
        .reset_with_locale(
            &CreateTrip {
                days: 0,
                ..CreateTrip::default()
            },
            &eur(),
        )
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidInput { .. }));
    assert_eq!(session.trip().name, "Naples");
}

#[test]
fn test_export_import() {
    let mut source = open(MemoryStore::new());
    let item = add(&mut source, "Catacombs");
    let blob = source.export().unwrap();

    let mut target = open(MemoryStore::new());
    let report = target.import(&blob).unwrap();
    assert!(report.is_clean());
    assert_eq!(target.trip(), source.trip());
    assert!(stored_trip(&target).item(&item.id).is_some());

    let err = target.import("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, ItineraryError::MalformedData { .. }));
    assert!(target.trip().item(&item.id).is_some());
}

#[test]
fn test_reconcile_clean_trip_reports_nothing() {
    let mut session = open(MemoryStore::new());
    add(&mut session, "Spanish Steps");
    let report = session.reconcile().unwrap();
    assert!(report.is_clean());
    assert!(session.trip().item(&ItemId::new("missing")).is_none());
}
