use recstore_core::{Address, Contact, ContactPatch, ContactService, RecordStore};

fn stored_contact() -> (RecordStore<Contact>, u64) {
    let mut store = RecordStore::new();
    let id = store
        .create(
            Contact::new("Ali Khan", "0300-1111111")
                .with_tags(vec!["friend".to_string()])
                .with_address(Address::new("Lahore", "54000")),
        )
        .id;
    (store, id)
}

#[test]
fn merge_overwrites_only_named_fields() {
    let (mut store, id) = stored_contact();

    let updated = store
        .update(
            id,
            ContactPatch {
                phone: Some("0300-9999999".to_string()),
                ..ContactPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.phone, "0300-9999999");
    assert_eq!(updated.name, "Ali Khan");
    assert_eq!(updated.tags, vec!["friend".to_string()]);
    assert_eq!(updated.address, Address::new("Lahore", "54000"));
}

#[test]
fn merge_preserves_untouched_nested_record() {
    let (mut store, id) = stored_contact();
    let address_before = store.get(id).unwrap().address.clone();

    let updated = store.update(
        id,
        ContactPatch {
            name: Some("Ali K.".to_string()),
            tags: Some(vec!["friend".to_string(), "gym".to_string()]),
            ..ContactPatch::default()
        },
    );
    assert!(updated.is_some());

    assert_eq!(store.get(id).unwrap().address, address_before);
}

#[test]
fn merge_replaces_nested_record_wholesale() {
    let (mut store, id) = stored_contact();

    // Passing only a city still replaces the whole address; the old zip is
    // not carried over.
    let updated = store
        .update(
            id,
            ContactPatch {
                address: Some(Address::new("Karachi", "")),
                ..ContactPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.address.city, "Karachi");
    assert_eq!(updated.address.zip, "");
}

#[test]
fn merge_does_not_change_record_id() {
    let (mut store, id) = stored_contact();

    let updated = store.update(
        id,
        ContactPatch {
            name: Some("Renamed".to_string()),
            ..ContactPatch::default()
        },
    );
    assert!(updated.is_some());

    assert_eq!(store.get(id).unwrap().id, id);
}

#[test]
fn service_find_by_name_is_case_insensitive_substring() {
    let mut service = ContactService::new();
    service.create_contact(Contact::new("Ali Khan", "0300-1111111"));
    service.create_contact(Contact::new("Sara Ahmed", "0300-2222222"));
    service.create_contact(Contact::new("Bilal", "0300-3333333"));

    let hits = service.find_by_name("ali");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Ali Khan");
    assert_eq!(hits[0].phone, "0300-1111111");
}

#[test]
fn service_find_by_name_returns_nothing_for_blank_query() {
    let mut service = ContactService::new();
    service.create_contact(Contact::new("Ali Khan", "0300-1111111"));

    assert!(service.find_by_name("   ").is_empty());
}

#[test]
fn service_crud_delegates_to_store_semantics() {
    let mut service = ContactService::new();
    let id = service.create_contact(Contact::new("Ali", "111"));

    assert!(service.get_contact(id).is_some());
    assert!(service
        .update_contact(
            id,
            ContactPatch {
                phone: Some("222".to_string()),
                ..ContactPatch::default()
            }
        )
        .is_some());
    assert_eq!(service.get_contact(id).unwrap().phone, "222");

    assert!(service.delete_contact(id));
    assert!(!service.delete_contact(id));
    assert!(service.get_contact(id).is_none());
}

#[test]
fn service_round_trips_through_json() {
    let mut service = ContactService::new();
    service.create_contact(
        Contact::new("Ali", "111").with_address(Address::new("Lahore", "54000")),
    );

    let snapshot = service.export_json().unwrap();
    let mut restored = ContactService::new();
    restored.import_json(&snapshot).unwrap();

    assert_eq!(restored.store().records(), service.store().records());
}
