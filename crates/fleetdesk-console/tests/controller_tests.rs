// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdesk_app::{
    CatalogError, CatalogRecord, EquipmentRecord, Page, ProviderRecord, ProviderStatus,
    ReconcilePolicy, SortKey,
};
use fleetdesk_console::{CollectionController, CollectionStore};
use fleetdesk_testkit::{
    InMemoryCatalog, equipment_fleet, equipment_priced, provider, provider_roster,
};

fn loaded_equipment(
    count: usize,
    page_size: u32,
) -> (CollectionController<EquipmentRecord>, InMemoryCatalog<EquipmentRecord>) {
    let mut catalog = InMemoryCatalog::new(equipment_fleet(count));
    let mut controller = CollectionController::new(page_size);
    controller.refresh(&mut catalog).expect("initial load");
    (controller, catalog)
}

#[test]
fn refresh_populates_page_and_pagination_metadata() {
    let (controller, catalog) = loaded_equipment(25, 10);
    assert_eq!(controller.records().len(), 10);
    assert_eq!(controller.page_index(), 1);
    assert_eq!(controller.total_pages(), 3);
    assert_eq!(catalog.fetch_calls, 1);
}

#[test]
fn empty_collection_normalizes_to_a_single_empty_page() {
    let (controller, _catalog) = loaded_equipment(0, 10);
    assert!(controller.page_is_empty());
    assert_eq!(controller.page_index(), 1);
    assert_eq!(controller.total_pages(), 1);
}

#[test]
fn go_to_out_of_range_is_a_no_op_without_a_fetch() {
    let (mut controller, mut catalog) = loaded_equipment(25, 10);

    assert!(!controller.go_to(&mut catalog, 0).expect("no-op"));
    assert!(!controller.go_to(&mut catalog, 4).expect("no-op"));
    assert_eq!(controller.page_index(), 1);
    assert_eq!(catalog.fetch_calls, 1);

    assert!(controller.go_to(&mut catalog, 3).expect("valid page"));
    assert_eq!(controller.page_index(), 3);
    assert_eq!(controller.records().len(), 5);
}

#[test]
fn fetch_failure_keeps_the_previous_page_and_page_index() {
    let (mut controller, mut catalog) = loaded_equipment(25, 10);
    let before: Vec<_> = controller.records().to_vec();

    catalog.fail_next_fetch(CatalogError::fetch("connection refused"));
    let error = controller
        .go_to(&mut catalog, 2)
        .expect_err("fetch should fail");
    assert!(matches!(error, CatalogError::Fetch(_)));

    // Records and the reported page index both still describe page 1.
    assert_eq!(controller.records(), before.as_slice());
    assert_eq!(controller.page_index(), 1);

    // A retry of the same transition succeeds normally.
    assert!(controller.go_to(&mut catalog, 2).expect("retry"));
    assert_eq!(controller.page_index(), 2);
}

#[test]
fn filter_criteria_persist_across_page_changes() {
    let (mut controller, mut catalog) = loaded_equipment(25, 10);
    controller.set_search_text("excavator");
    controller.set_sort_key(SortKey::PriceAsc);

    controller.go_to(&mut catalog, 2).expect("page 2");
    assert_eq!(controller.criteria().search_text, "excavator");
    assert_eq!(controller.criteria().sort_key, SortKey::PriceAsc);
}

#[test]
fn projection_sorts_the_current_page_only() {
    let mut catalog = InMemoryCatalog::new(vec![
        equipment_priced("a", "Tower crane", Some(100.0)),
        equipment_priced("b", "Wheel loader", Some(50.0)),
        equipment_priced("c", "Dump truck", Some(200.0)),
    ]);
    let mut controller = CollectionController::new(10);
    controller.refresh(&mut catalog).expect("load");

    controller.set_sort_key(SortKey::PriceAsc);
    let shown = controller.displayed();
    let ids: Vec<&str> = shown.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn status_policies_are_declared_per_record_kind() {
    assert_eq!(EquipmentRecord::STATUS_POLICY, ReconcilePolicy::Refetch);
    assert_eq!(ProviderRecord::STATUS_POLICY, ReconcilePolicy::LocalPatch);
}

#[test]
fn provider_approval_patches_locally_without_a_refetch() {
    let mut catalog = InMemoryCatalog::new(provider_roster(6));
    let mut controller: CollectionController<ProviderRecord> = CollectionController::new(10);
    controller.refresh(&mut catalog).expect("load");

    let target = controller.records()[0].clone();
    assert_eq!(target.status, ProviderStatus::Pending);

    controller
        .set_status(&mut catalog, &target.id, "approved")
        .expect("approve");

    // Same position, status updated, everything else untouched, and no
    // second fetch happened.
    let patched = &controller.records()[0];
    assert_eq!(patched.id, target.id);
    assert_eq!(patched.status, ProviderStatus::Approved);
    assert_eq!(patched.name, target.name);
    assert_eq!(patched.email, target.email);
    assert_eq!(patched.created_at, target.created_at);
    assert_eq!(catalog.fetch_calls, 1);
    assert_eq!(catalog.status_calls, 1);
}

#[test]
fn equipment_status_toggle_refetches_the_current_page() {
    let (mut controller, mut catalog) = loaded_equipment(5, 10);
    let id = controller.records()[0].id.clone();

    controller
        .set_status(&mut catalog, &id, "inactive")
        .expect("toggle");

    assert_eq!(catalog.fetch_calls, 2);
    let record = controller
        .records()
        .iter()
        .find(|record| record.id == id)
        .expect("record still on page");
    assert!(!record.availability);
}

#[test]
fn failed_status_command_leaves_local_state_unchanged() {
    let mut catalog = InMemoryCatalog::new(provider_roster(3));
    let mut controller: CollectionController<ProviderRecord> = CollectionController::new(10);
    controller.refresh(&mut catalog).expect("load");
    let before: Vec<_> = controller.records().to_vec();

    catalog.fail_next_command(CatalogError::command("rejected upstream"));
    let id = before[0].id.clone();
    let error = controller
        .set_status(&mut catalog, &id, "approved")
        .expect_err("command should fail");
    assert!(matches!(error, CatalogError::Command(_)));
    assert_eq!(controller.records(), before.as_slice());
    assert_eq!(catalog.fetch_calls, 1);
}

#[test]
fn removal_requires_the_two_step_confirmation() {
    let (mut controller, mut catalog) = loaded_equipment(5, 10);
    let id = controller.records()[0].id.clone();

    controller.request_removal(id.clone());
    assert_eq!(controller.pending_removal(), Some(&id));
    assert_eq!(catalog.remove_calls, 0);

    controller.cancel_removal();
    assert_eq!(controller.pending_removal(), None);
    controller.confirm_removal(&mut catalog).expect("no-op");
    assert_eq!(catalog.remove_calls, 0);

    controller.request_removal(id.clone());
    controller.confirm_removal(&mut catalog).expect("remove");
    assert_eq!(catalog.remove_calls, 1);
    assert_eq!(controller.records().len(), 4);
    assert!(controller.records().iter().all(|record| record.id != id));
}

#[test]
fn failed_removal_keeps_confirmation_pending_and_page_intact() {
    let (mut controller, mut catalog) = loaded_equipment(5, 10);
    let id = controller.records()[0].id.clone();

    controller.request_removal(id.clone());
    catalog.fail_next_command(CatalogError::command("delete rejected"));
    let error = controller
        .confirm_removal(&mut catalog)
        .expect_err("delete should fail");
    assert!(matches!(error, CatalogError::Command(_)));
    assert_eq!(controller.pending_removal(), Some(&id));
    assert_eq!(controller.records().len(), 5);
}

#[test]
fn deleting_the_last_record_of_a_tail_page_steps_back_one_page() {
    // 11 records, page size 10: page 2 holds exactly one record.
    let (mut controller, mut catalog) = loaded_equipment(11, 10);
    controller.go_to(&mut catalog, 2).expect("page 2");
    assert_eq!(controller.records().len(), 1);

    let id = controller.records()[0].id.clone();
    controller.request_removal(id);
    controller.confirm_removal(&mut catalog).expect("remove");

    assert_eq!(controller.page_index(), 1);
    assert_eq!(controller.total_pages(), 1);
    assert_eq!(controller.records().len(), 10);
}

#[test]
fn selection_is_cleared_when_the_record_leaves_the_page() {
    let (mut controller, mut catalog) = loaded_equipment(5, 10);
    let id = controller.records()[0].id.clone();
    controller.open_detail(id.clone());
    controller.toggle_expand(id.clone());
    assert!(controller.detail_record().is_some());

    controller.request_removal(id.clone());
    controller.confirm_removal(&mut catalog).expect("remove");

    assert!(controller.detail_record().is_none());
    assert!(!controller.is_expanded(&id));
}

#[test]
fn detail_view_renders_nothing_for_an_absent_identity() {
    let (mut controller, _catalog) = loaded_equipment(3, 10);
    controller.open_detail("not-on-this-page".into());
    assert!(controller.detail_record().is_none());
}

#[test]
fn no_matches_is_distinct_from_an_empty_page() {
    let (mut controller, _catalog) = loaded_equipment(3, 10);
    assert!(!controller.page_is_empty());
    assert!(!controller.no_matches());

    controller.set_search_text("no such machine");
    assert!(controller.no_matches());

    controller.reset_filters();
    assert!(!controller.no_matches());
}

#[test]
fn stale_page_response_loses_to_a_newer_install() {
    let mut store: CollectionStore<EquipmentRecord> = CollectionStore::new();
    let slow = store.begin_load(1);
    let fast = store.begin_load(2);

    assert!(store.install(fast, Page::new(equipment_fleet(3), 2, 5)));
    // The earlier load resolves late; highest sequence wins.
    assert!(!store.install(slow, Page::new(equipment_fleet(8), 1, 5)));
    assert_eq!(store.page_index(), 2);
    assert_eq!(store.records().len(), 3);
}

#[test]
fn local_patch_misses_records_absent_from_the_page() {
    let mut store: CollectionStore<ProviderRecord> = CollectionStore::new();
    let ticket = store.begin_load(1);
    store.install(ticket, Page::new(provider_roster(2), 1, 1));

    assert!(!store.patch_status(&provider(7).id, "approved"));
    assert!(!store.patch_status(&store.records()[0].id.clone(), "suspended"));
    assert!(store.patch_status(&store.records()[0].id.clone(), "approved"));
}
