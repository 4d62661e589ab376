mod common;

use common::{create_test_session, open_session};
use itinerary_core::{
    engine::items_for, CreateItem, CreateTrip, ItemRef, ItineraryError, LoadOutcome, MoveItem,
    UpdateItem,
};

#[test]
fn test_session_creates_fallback_trip() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let session = open_session(
        &temp_dir,
        CreateTrip {
            name: "Iceland ring road".to_string(),
            days: 7,
            ..CreateTrip::default()
        },
    );

    assert_eq!(session.outcome(), &LoadOutcome::Created);
    assert_eq!(session.trip().name, "Iceland ring road");
    assert_eq!(session.trip().day_count(), 7);
    assert!(temp_dir.path().join("test.db").exists());
}

#[test]
fn test_changes_persist_across_sessions() {
    let (temp_dir, mut session) = create_test_session();

    let item = session
        .add_item(&CreateItem {
            title: "Blue Lagoon".to_string(),
            cost: Some(80.0),
            ..CreateItem::default()
        })
        .unwrap();
    session
        .move_item(&MoveItem {
            id: item.id.to_string(),
            day: 1,
            segment: "afternoon".to_string(),
        })
        .unwrap();
    drop(session);

    let reopened = open_session(&temp_dir, CreateTrip::default());
    assert_eq!(reopened.outcome(), &LoadOutcome::Loaded);

    let trip = reopened.trip();
    let afternoon = items_for(trip, 1, "afternoon");
    assert_eq!(afternoon.len(), 1);
    assert_eq!(afternoon[0].title, "Blue Lagoon");
    assert_eq!(
        afternoon[0].start_time.map(|t| t.to_string()).as_deref(),
        Some("12:00")
    );
    assert!(items_for(trip, 0, "morning").is_empty());
    assert_eq!(trip.total_cost(), 80.0);
}

#[test]
fn test_moves_conserve_items() {
    let (_temp_dir, mut session) = create_test_session();

    let mut ids = Vec::new();
    for title in ["Geysir", "Gullfoss", "Thingvellir"] {
        ids.push(
            session
                .add_item(&CreateItem {
                    title: title.to_string(),
                    ..CreateItem::default()
                })
                .unwrap()
                .id,
        );
    }

    let moves = [(0, 2, "evening"), (1, 1, "morning"), (0, 0, "afternoon")];
    for (index, day, segment) in moves {
        session
            .move_item(&MoveItem {
                id: ids[index].to_string(),
                day,
                segment: segment.to_string(),
            })
            .unwrap();
    }

    let trip = session.trip();
    assert_eq!(trip.item_count(), 3);
    for (day_index, day) in trip.days().iter().enumerate() {
        assert!(day.items.iter().all(|item| item.day_index == day_index));
    }
    assert_eq!(trip.item(&ids[0]).unwrap().segment, "afternoon");
}

#[test]
fn test_removed_items_can_be_restored_after_reopen() {
    let (temp_dir, mut session) = create_test_session();
    let item = session
        .add_item(&CreateItem {
            title: "Glacier hike".to_string(),
            ..CreateItem::default()
        })
        .unwrap();
    session
        .remove_item(&ItemRef {
            id: item.id.to_string(),
        })
        .unwrap();
    drop(session);

    let mut reopened = open_session(&temp_dir, CreateTrip::default());
    assert!(items_for(reopened.trip(), 0, "morning").is_empty());
    reopened
        .restore_item(&ItemRef {
            id: item.id.short().to_string(),
        })
        .unwrap();
    assert_eq!(items_for(reopened.trip(), 0, "morning").len(), 1);
}

#[test]
fn test_invalid_updates_are_rejected() {
    let (_temp_dir, mut session) = create_test_session();
    let item = session
        .add_item(&CreateItem {
            title: "Whale watching".to_string(),
            ..CreateItem::default()
        })
        .unwrap();

    let err = session
        .update_item(&UpdateItem {
            id: item.id.to_string(),
            duration_minutes: Some(0),
            ..UpdateItem::default()
        })
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidInput { .. }));

    let err = session
        .add_item(&CreateItem {
            title: "Nowhere".to_string(),
            segment: "midnight".to_string(),
            ..CreateItem::default()
        })
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidDestination { .. }));
    assert_eq!(session.trip().item_count(), 1);
}

#[test]
fn test_directory_as_database_path_is_rejected() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let result = itinerary_core::SessionBuilder::new()
        .with_database_path(Some(temp_dir.path()))
        .with_locale(common::test_locale())
        .build();
    assert!(matches!(result, Err(ItineraryError::Configuration { .. })));
}
