use guestbook::{
    core::registry::{Registry, RegistryError},
    guest::{GuestPatch, GuestRecord},
    types::StayStatus,
};

fn guest(document: &str, room: u32) -> GuestRecord {
    GuestRecord {
        document: document.to_string(),
        name: format!("Guest {document}"),
        nationality: "CL".to_string(),
        room,
        entry_date: "10-01-2025".to_string(),
        exit_date: "15-01-2025".to_string(),
        status: StayStatus::Lodged,
    }
}

#[test]
fn check_in_registers_guest_and_room() {
    let mut registry = Registry::new();
    registry.check_in(guest("123", 101)).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.is_room_occupied(101));
    assert_eq!(registry.history(), ["CHECK-IN: 123"]);
}

#[test]
fn duplicate_identity_fails_without_mutation() {
    let mut registry = Registry::new();
    registry.check_in(guest("123", 101)).unwrap();
    let before = registry.export_snapshot();

    let err = registry.check_in(guest("123", 102)).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateIdentity("123".to_string()));
    assert_eq!(registry.export_snapshot(), before);
    assert!(!registry.is_room_occupied(102));
}

#[test]
fn occupied_room_fails_without_mutation() {
    let mut registry = Registry::new();
    registry.check_in(guest("111", 101)).unwrap();
    let before = registry.export_snapshot();

    let err = registry.check_in(guest("222", 101)).unwrap_err();
    assert_eq!(err, RegistryError::RoomOccupied(101));
    assert_eq!(registry.export_snapshot(), before);
    assert!(registry.find_by_document("222").is_none());
}

#[test]
fn find_by_document_returns_registered_record() {
    let mut registry = Registry::new();
    registry.check_in(guest("123", 101)).unwrap();

    let found = registry.find_by_document("123").unwrap();
    assert_eq!(found.name, "Guest 123");
    assert_eq!(found.room, 101);
    assert!(registry.find_by_document("999").is_none());
}

#[test]
fn update_moves_room_occupancy() {
    let mut registry = Registry::new();
    registry.check_in(guest("123", 101)).unwrap();

    registry
        .update(
            "123",
            GuestPatch {
                room: Some(103),
                name: Some("Juan P".to_string()),
                ..GuestPatch::default()
            },
        )
        .unwrap();

    let rec = registry.find_by_document("123").unwrap();
    assert_eq!(rec.room, 103);
    assert_eq!(rec.name, "Juan P");
    assert!(!registry.is_room_occupied(101));
    assert!(registry.is_room_occupied(103));

    // The freed room is available again.
    registry.check_in(guest("456", 101)).unwrap();
    // The claimed one is not.
    assert_eq!(
        registry.check_in(guest("789", 103)),
        Err(RegistryError::RoomOccupied(103))
    );
}

#[test]
fn update_to_occupied_room_fails_without_mutation() {
    let mut registry = Registry::new();
    registry.check_in(guest("111", 200)).unwrap();
    registry.check_in(guest("123", 101)).unwrap();
    let before = registry.export_snapshot();

    let err = registry
        .update(
            "123",
            GuestPatch {
                room: Some(200),
                ..GuestPatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, RegistryError::RoomOccupied(200));
    assert_eq!(registry.export_snapshot(), before);
    assert!(registry.is_room_occupied(101));
}

#[test]
fn update_same_room_is_allowed() {
    let mut registry = Registry::new();
    registry.check_in(guest("123", 101)).unwrap();

    registry
        .update(
            "123",
            GuestPatch {
                room: Some(101),
                status: Some(StayStatus::CheckedOut),
                ..GuestPatch::default()
            },
        )
        .unwrap();
    assert!(registry.is_room_occupied(101));
    assert_eq!(
        registry.find_by_document("123").unwrap().status,
        StayStatus::CheckedOut
    );
}

#[test]
fn status_can_transition_back_to_lodged() {
    let mut registry = Registry::new();
    registry.check_in(guest("123", 101)).unwrap();

    let checkout = GuestPatch {
        status: Some(StayStatus::CheckedOut),
        ..GuestPatch::default()
    };
    registry.update("123", checkout).unwrap();

    let readmit = GuestPatch {
        status: Some(StayStatus::Lodged),
        ..GuestPatch::default()
    };
    registry.update("123", readmit).unwrap();
    assert_eq!(
        registry.find_by_document("123").unwrap().status,
        StayStatus::Lodged
    );
}

#[test]
fn update_missing_guest_fails() {
    let mut registry = Registry::new();
    assert_eq!(
        registry.update("123", GuestPatch::default()),
        Err(RegistryError::MissingGuest("123".to_string()))
    );
}

#[test]
fn delete_frees_room_and_removes_record() {
    let mut registry = Registry::new();
    registry.check_in(guest("123", 101)).unwrap();

    registry.delete("123").unwrap();
    assert!(registry.is_empty());
    assert!(!registry.is_room_occupied(101));
    assert!(registry.find_by_document("123").is_none());
    assert_eq!(registry.history(), ["CHECK-IN: 123", "DELETE: 123"]);

    assert_eq!(
        registry.delete("123"),
        Err(RegistryError::MissingGuest("123".to_string()))
    );
}

#[test]
fn find_by_room_scans_in_listing_order() {
    let mut registry = Registry::new();
    registry.check_in(guest("aaa11", 101)).unwrap();
    registry.check_in(guest("bbb22", 102)).unwrap();
    registry.check_in(guest("ccc33", 103)).unwrap();

    assert_eq!(registry.find_by_room(102).unwrap().document, "bbb22");
    assert!(registry.find_by_room(999).is_none());
}

#[test]
fn find_by_room_on_empty_registry_returns_none() {
    let registry = Registry::new();
    assert!(registry.find_by_room(101).is_none());
}

#[test]
fn list_preserves_check_in_order() {
    let mut registry = Registry::new();
    registry.check_in(guest("zzz99", 103)).unwrap();
    registry.check_in(guest("aaa11", 101)).unwrap();
    registry.check_in(guest("mmm55", 102)).unwrap();

    let docs: Vec<&str> = registry.list().iter().map(|g| g.document.as_str()).collect();
    assert_eq!(docs, ["zzz99", "aaa11", "mmm55"]);
}

#[test]
fn history_records_every_mutation_in_order() {
    let mut registry = Registry::new();
    registry.check_in(guest("123", 101)).unwrap();
    registry
        .update(
            "123",
            GuestPatch {
                nationality: Some("AR".to_string()),
                ..GuestPatch::default()
            },
        )
        .unwrap();
    registry.delete("123").unwrap();

    assert_eq!(
        registry.history(),
        ["CHECK-IN: 123", "UPDATE: 123", "DELETE: 123"]
    );
}
