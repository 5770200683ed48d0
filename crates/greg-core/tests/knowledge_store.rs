mod common;

use common::{domain_config_dir, fixture_path};
use greg_core::knowledge::KnowledgeStore;

#[test]
fn loads_domains_in_file_name_order() {
    let store = KnowledgeStore::load(&domain_config_dir()).expect("load domain config");

    assert_eq!(
        store.domain_names(),
        vec!["content", "customer_care", "financials", "reads"]
    );
}

#[test]
fn get_domain_is_idempotent() {
    let store = KnowledgeStore::load(&domain_config_dir()).expect("load domain config");

    let first = store.get("financials").expect("financials loaded");
    let second = store.get("financials").expect("financials loaded");

    let a = serde_json::to_value(first).expect("serialize");
    let b = serde_json::to_value(second).expect("serialize");
    assert_eq!(a, b);
    assert_eq!(first.name, "financials");
    assert!(!first.tables.is_empty());
}

#[test]
fn unknown_domain_returns_none() {
    let store = KnowledgeStore::load(&domain_config_dir()).expect("load domain config");

    assert!(store.get("does_not_exist").is_none());
}

#[test]
fn search_tables_is_case_insensitive_over_name_and_description() {
    let store = KnowledgeStore::load(&domain_config_dir()).expect("load domain config");

    let by_name = store.search_tables("TICKET");
    assert!(by_name.contains(&"customer_care.customer_care_tickets".to_string()));

    let by_description = store.search_tables("meter read values");
    assert!(by_description.contains(&"reads.reads_meter_readings".to_string()));

    assert!(store.search_tables("zzzz_no_such_table").is_empty());
}

#[test]
fn malformed_file_is_skipped_without_aborting_load() {
    let store =
        KnowledgeStore::load(&fixture_path("domains_mixed")).expect("load mixed fixture dir");

    // alpha.json loads, broken.json is skipped, notes.txt is not a domain file
    assert_eq!(store.domain_names(), vec!["alpha"]);
}

#[test]
fn missing_directory_yields_empty_store() {
    let store =
        KnowledgeStore::load(&fixture_path("no_such_dir")).expect("missing dir tolerated");

    assert!(store.is_empty());
    assert!(store.domain_names().is_empty());
}
