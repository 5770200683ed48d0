mod common;

use common::domain_config_dir;
use greg_core::classify::DomainClassifier;
use greg_core::compose;
use greg_core::execute;
use greg_core::knowledge::KnowledgeStore;
use greg_core::viz;

// The full question-to-chart chain, stage by stage, the way the server
// drives it.
#[test]
fn revenue_question_flows_to_a_line_chart() {
    let store = KnowledgeStore::load(&domain_config_dir()).expect("load domain config");
    let classifier = DomainClassifier::new();

    let question = "What was the total revenue last quarter?";
    let hints = classifier.classify(question, &store);
    assert_eq!(hints, vec!["financials"]);

    let proposed = compose::compose_with_hints(question, &hints);
    assert!(proposed.sql.contains("SUM"));
    assert!(proposed.sql.contains("financials_transactions"));
    assert!(!proposed.explanation.is_empty());
    assert_eq!(proposed.referenced_domains, vec!["financials"]);

    let result = execute::execute(&proposed.sql, 100);
    assert_eq!(result.columns, vec!["month", "total_revenue"]);
    assert!(result.warning.is_some());

    let sample_row = result.rows.first().cloned().unwrap_or_default();
    let profiles = viz::profile_columns(&result.columns, &sample_row);
    let suggestions = viz::suggest(&profiles);
    assert_eq!(suggestions[0].chart_type, "line");
}

#[test]
fn support_sql_with_limit_two_returns_two_ticket_rows() {
    let result = execute::execute("SELECT * FROM support_tickets", 2);

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.row_count, 2);
    assert_eq!(
        result.columns,
        vec!["ticket_id", "customer_id", "issue_type", "status", "created_at"]
    );
    let warning = result.warning.expect("synthetic-data warning");
    assert!(warning.contains("synthetic"));
}

#[test]
fn referenced_domains_are_loaded_store_members_for_template_queries() {
    let store = KnowledgeStore::load(&domain_config_dir()).expect("load domain config");

    // Not an enforced invariant, but the shipped templates and config agree.
    for question in [
        "total revenue by month",
        "tickets per customer",
        "top articles by engagement",
        "read activity per account",
    ] {
        let proposed = compose::compose(question);
        for domain in &proposed.referenced_domains {
            assert!(
                store.get(domain).is_some(),
                "template for {question:?} references unloaded domain {domain:?}"
            );
        }
    }
}
