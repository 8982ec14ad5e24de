//! End-to-end flows over a real on-disk store: admin writes, index
//! invalidation, detail precedence, capacity failures.

use std::sync::Arc;

use catalog_engine::db::CatalogStorage;
use catalog_engine::{
    AdminService, CatalogService, Config, CustomProductSubmission, SearchFilters, SortOption,
};

fn test_config(capacity: u64) -> Config {
    Config {
        work_dir: String::new(),
        storage_file: String::new(),
        storage_capacity_bytes: capacity,
        docs_root: "/brochures".to_string(),
        media_root: "/Two-way-Radios".to_string(),
        admin_access_key: "vkt2026".to_string(),
    }
}

fn open_service(dir: &tempfile::TempDir, capacity: u64) -> Arc<CatalogService> {
    let config = test_config(capacity);
    let storage = CatalogStorage::open(dir.path().join("catalog.redb"), capacity).unwrap();
    Arc::new(CatalogService::with_storage(&config, storage))
}

fn submission(name: &str) -> CustomProductSubmission {
    CustomProductSubmission {
        name: name.to_string(),
        category: "Two-Way Radios".to_string(),
        section: "DMR System".to_string(),
        subsection: "Handsets".to_string(),
        ..Default::default()
    }
}

#[test]
fn seeded_product_resolves_through_every_layer() {
    let dir = tempfile::tempdir().unwrap();
    let service = open_service(&dir, 5 * 1024 * 1024);

    assert_eq!(catalog_engine::slug::slugify("Hytera HP788"), "hytera-hp788");

    let location = service.find_location_by_id("hytera-hp788").unwrap().unwrap();
    assert_eq!(location.file_name, "Hytera HP788.png");
    assert_eq!(location.category_title, "Two-Way Radios");
    assert_eq!(location.section_title, "DMR System");
    assert_eq!(location.subsection_name, "Handsets");

    // Curated record exists for this id
    let details = service.product_details("hytera-hp788").unwrap().unwrap();
    assert_eq!(details.name, "Hytera HP788");
    assert_eq!(details.tagline, "Professional DMR Two-Way Radio");

    // No curated record for this one: generic fallback keyed off the label
    let generic = service.product_details("motorola-xir-m3688").unwrap().unwrap();
    assert_eq!(generic.name, "Motorola XiR M3688");
    assert_eq!(generic.tagline, "Reliable Communication Device");
}

#[test]
fn admin_save_round_trips_into_the_merged_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let service = open_service(&dir, 5 * 1024 * 1024);
    let admin = AdminService::new(service.clone());

    admin.add_or_update_product(submission("Acme Radio X1")).unwrap();

    let merged = service.merged_catalog().unwrap();
    let handsets = &merged["Two-Way Radios"].sections[0].subsections[0];
    assert!(handsets.products.iter().any(|p| p == "Acme Radio X1"));

    // And the record survives a full reopen of the store
    drop(service);
    drop(admin);
    let reopened = open_service(&dir, 5 * 1024 * 1024);
    assert!(
        reopened
            .find_location_by_id("acme-radio-x1")
            .unwrap()
            .is_some()
    );
}

#[test]
fn override_tagline_shadows_the_curated_record() {
    let dir = tempfile::tempdir().unwrap();
    let service = open_service(&dir, 5 * 1024 * 1024);
    let admin = AdminService::new(service.clone());

    let mut sub = submission("Hytera HP788");
    sub.tagline = Some("Now with extra reach".to_string());
    admin.add_or_update_product(sub).unwrap();

    let details = service.product_details("hytera-hp788").unwrap().unwrap();
    assert_eq!(details.tagline, "Now with extra reach");
    // No blending: the curated classification must not leak through
    assert_eq!(details.classification, "Professional Two-Way Radio");
}

#[test]
fn saving_twice_keeps_one_record_per_name() {
    let dir = tempfile::tempdir().unwrap();
    let service = open_service(&dir, 5 * 1024 * 1024);
    let admin = AdminService::new(service.clone());

    admin.add_or_update_product(submission("Acme Radio X1")).unwrap();
    admin.add_or_update_product(submission("ACME RADIO X1")).unwrap();

    let records = service.custom_products().unwrap();
    assert_eq!(
        records
            .iter()
            .filter(|r| r.name.eq_ignore_ascii_case("Acme Radio X1"))
            .count(),
        1
    );
}

#[test]
fn search_respects_filters_and_orderings() {
    let dir = tempfile::tempdir().unwrap();
    let service = open_service(&dir, 5 * 1024 * 1024);

    let asc = service
        .search("", &SearchFilters::default(), SortOption::NameAsc)
        .unwrap();
    assert!(asc.windows(2).all(|w| w[0].name <= w[1].name));

    let filters = SearchFilters {
        category: Some("MCS & PoC Solutions".to_string()),
        ..Default::default()
    };
    let filtered = service.search("", &filters, SortOption::Relevance).unwrap();
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|p| p.category == "MCS & PoC Solutions"));

    let queried = service
        .search("hytera", &filters, SortOption::Relevance)
        .unwrap();
    assert!(
        queried
            .iter()
            .all(|p| p.name.to_lowercase().contains("hytera"))
    );
}

#[test]
fn oversized_inline_payload_fails_without_side_effects() {
    use base64::Engine as _;

    let dir = tempfile::tempdir().unwrap();
    // Tight ceiling: the seed fits, a fat payload does not
    let service = open_service(&dir, 16 * 1024);
    let admin = AdminService::new(service.clone());

    admin.add_or_update_product(submission("Acme Radio X1")).unwrap();
    let before = service.custom_products().unwrap().len();

    let payload = base64::engine::general_purpose::STANDARD.encode(vec![0u8; 64 * 1024]);
    let mut sub = submission("Acme Radio X2");
    sub.image_source = Some(format!("data:image/png;base64,{payload}"));

    let err = admin.add_or_update_product(sub).unwrap_err();
    assert!(matches!(err, catalog_engine::AppError::CapacityExceeded(_)));

    let after = service.custom_products().unwrap();
    assert_eq!(after.len(), before);
    assert!(after.iter().all(|r| r.name != "Acme Radio X2"));
}

#[test]
fn inline_payload_resolves_back_to_bytes() {
    use base64::Engine as _;

    let dir = tempfile::tempdir().unwrap();
    let service = open_service(&dir, 5 * 1024 * 1024);
    let admin = AdminService::new(service.clone());

    let bytes = vec![7u8; 256];
    let mut sub = submission("Acme Radio X1");
    sub.image_source = Some(format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    ));
    let record = admin.add_or_update_product(sub).unwrap();

    let uri = record.image_source.unwrap();
    assert!(uri.starts_with("media://sha256/"));
    assert_eq!(service.products().media_bytes(&uri).unwrap(), Some(bytes));

    // The search index surfaces the media reference as the image URL
    let hits = service
        .search("Acme", &SearchFilters::default(), SortOption::Relevance)
        .unwrap();
    assert_eq!(hits[0].image_url, uri);
}
