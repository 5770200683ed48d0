mod common;

use common::domain_config_dir;
use greg_core::classify::DomainClassifier;
use greg_core::knowledge::{Domain, KnowledgeStore};

fn store() -> KnowledgeStore {
    KnowledgeStore::load(&domain_config_dir()).expect("load domain config")
}

#[test]
fn revenue_keywords_map_to_financials() {
    let classifier = DomainClassifier::new();
    let result = classifier.classify("How much revenue did we make last month?", &store());

    assert_eq!(result, vec!["financials"]);
}

#[test]
fn literal_domain_name_matches_without_keywords() {
    let classifier = DomainClassifier::new();
    let result = classifier.classify("Describe the financials domain for me", &store());

    assert_eq!(result, vec!["financials"]);
}

#[test]
fn multiple_matches_keep_declaration_order() {
    let classifier = DomainClassifier::new();
    // Hits customer_care (ticket) and financials (revenue); config files load
    // in name order, so customer_care precedes financials.
    let result = classifier.classify("revenue impact of open customer tickets", &store());

    assert_eq!(result, vec!["customer_care", "financials"]);
}

#[test]
fn no_match_yields_empty_without_fallback() {
    let classifier = DomainClassifier::new();
    let result = classifier.classify("xyzzy plugh", &store());

    assert!(result.is_empty());
}

#[test]
fn fallback_replaces_empty_classification() {
    let classifier = DomainClassifier::with_fallback("financials");
    let result = classifier.classify("xyzzy plugh", &store());

    assert_eq!(result, vec!["financials"]);

    // A real match still wins over the fallback.
    let matched = classifier.classify("show me article engagement", &store());
    assert_eq!(matched, vec!["content"]);
}

#[test]
fn domains_without_keyword_entries_match_on_their_name() {
    let store = KnowledgeStore::from_domains(vec![Domain {
        name: "logistics".to_string(),
        description: "Shipments and delivery performance.".to_string(),
        tables: vec![],
        joins: vec![],
        caveats: vec![],
        sample_questions: vec![],
    }]);
    let classifier = DomainClassifier::new();

    let named = classifier.classify("average logistics delay last week", &store);
    assert_eq!(named, vec!["logistics"]);

    assert!(classifier
        .classify("average shipping delay last week", &store)
        .is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let classifier = DomainClassifier::new();
    let result = classifier.classify("TOTAL REVENUE BY QUARTER", &store());

    assert_eq!(result, vec!["financials"]);
}
