use recstore_core::{Address, Contact, FormatError, RecordStore};

fn seeded_store() -> RecordStore<Contact> {
    let mut store = RecordStore::new();
    store.create(
        Contact::new("Ali Khan", "0300-1111111")
            .with_tags(vec!["friend".to_string()])
            .with_address(Address::new("Lahore", "54000")),
    );
    store.create(
        Contact::new("Sara Ahmed", "0300-2222222")
            .with_tags(vec!["work".to_string()])
            .with_address(Address::new("Islamabad", "44000")),
    );
    store
}

#[test]
fn export_then_import_round_trips_records_and_order() {
    let store = seeded_store();

    let snapshot = store.export_json().unwrap();
    let mut reloaded: RecordStore<Contact> = RecordStore::new();
    let count = reloaded.import_json(&snapshot).unwrap();

    assert_eq!(count, 2);
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn export_is_canonical_for_equal_stores() {
    let first = seeded_store();
    let second = seeded_store();
    assert_eq!(first.export_json().unwrap(), second.export_json().unwrap());
}

#[test]
fn create_continues_from_imported_maximum_id() {
    let snapshot = r#"[
        {"id": 7, "name": "Imported", "phone": "000"}
    ]"#;
    let mut store: RecordStore<Contact> = RecordStore::new();
    store.import_json(snapshot).unwrap();

    let next = store.create(Contact::new("Fresh", "111")).id;
    assert_eq!(next, 8);
}

#[test]
fn import_defaults_missing_list_and_nested_fields() {
    let snapshot = r#"[{"id": 1, "name": "Bare", "phone": "000"}]"#;
    let mut store: RecordStore<Contact> = RecordStore::new();
    store.import_json(snapshot).unwrap();

    let contact = store.get(1).unwrap();
    assert!(contact.tags.is_empty());
    assert_eq!(contact.address, Address::default());
}

#[test]
fn import_rejects_non_json_and_leaves_store_unchanged() {
    let mut store = seeded_store();
    let before = store.records().to_vec();

    let err = store.import_json("not json at all").unwrap_err();
    assert!(matches!(err, FormatError::Decode(_)));
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn import_rejects_non_sequence_top_level() {
    let mut store = seeded_store();
    let before = store.records().to_vec();

    let err = store.import_json(r#"{"id": 1}"#).unwrap_err();
    assert!(matches!(err, FormatError::NotASequence));
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn import_rejects_non_mapping_elements_with_index() {
    let mut store: RecordStore<Contact> = RecordStore::new();

    let err = store
        .import_json(r#"[{"id": 1, "name": "ok", "phone": ""}, 5]"#)
        .unwrap_err();
    assert!(matches!(err, FormatError::NotAMapping { index: 1 }));
    assert!(store.is_empty());
}

#[test]
fn import_rejects_shape_mismatch_atomically() {
    let mut store = seeded_store();
    let before = store.records().to_vec();

    // Second element is a mapping but lacks required fields.
    let err = store
        .import_json(r#"[{"id": 1, "name": "ok", "phone": ""}, {"id": 2}]"#)
        .unwrap_err();
    assert!(matches!(err, FormatError::InvalidRecord { index: 1, .. }));
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn import_rejects_duplicate_ids() {
    let mut store: RecordStore<Contact> = RecordStore::new();

    let err = store
        .import_json(
            r#"[
                {"id": 1, "name": "a", "phone": ""},
                {"id": 1, "name": "b", "phone": ""}
            ]"#,
        )
        .unwrap_err();
    assert!(matches!(err, FormatError::DuplicateId(1)));
    assert!(store.is_empty());
}

#[test]
fn import_replaces_previous_contents_wholesale() {
    let mut store = seeded_store();

    store
        .import_json(r#"[{"id": 9, "name": "Only", "phone": "9"}]"#)
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(9).unwrap().name, "Only");
    assert!(store.get(1).is_none());
}
