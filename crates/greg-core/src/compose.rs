use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposedQuery {
    pub sql: String,
    pub explanation: String,
    pub referenced_domains: Vec<String>,
}

/// One row of the dispatch table: first group whose keyword appears in the
/// lower-cased question supplies the whole answer.
struct QueryTemplate {
    keywords: &'static [&'static str],
    sql: &'static str,
    explanation: &'static str,
    domains: &'static [&'static str],
}

const REVENUE_SQL: &str = "\
SELECT DATE_TRUNC(created_at, MONTH) AS month,
       SUM(amount) AS total_revenue
FROM financials_transactions
GROUP BY month
ORDER BY month";

const CUSTOMER_SQL: &str = "\
SELECT customer_id,
       COUNT(*) AS interaction_count,
       AVG(satisfaction_score) AS avg_satisfaction
FROM customer_care_tickets
GROUP BY customer_id
ORDER BY interaction_count DESC
LIMIT 100";

const CONTENT_SQL: &str = "\
SELECT content_id,
       title,
       read_count,
       engagement_score
FROM reads_content
ORDER BY engagement_score DESC
LIMIT 100";

const ENERGY_SQL: &str = "\
SELECT account_id,
       DATE_TRUNC(read_date, DAY) AS day,
       SUM(read_value_kwh) AS total_kwh
FROM reads_meter_readings
GROUP BY account_id, day
ORDER BY day DESC
LIMIT 100";

// Evaluated top to bottom. Content must stay ahead of the energy group so
// questions about read articles do not land on meter readings.
const TEMPLATES: &[QueryTemplate] = &[
    QueryTemplate {
        keywords: &["revenue", "sales", "money", "earning", "income", "profit", "cost"],
        sql: REVENUE_SQL,
        explanation: "This query analyzes revenue trends by month. It groups financial \
                      transactions by month using DATE_TRUNC and sums the transaction amounts \
                      to show total revenue per month, ordered chronologically.",
        domains: &["financials"],
    },
    QueryTemplate {
        keywords: &["customer", "user", "client", "ticket", "complaint", "satisfaction"],
        sql: CUSTOMER_SQL,
        explanation: "This query analyzes customer interactions by counting tickets per \
                      customer and calculating their average satisfaction score, showing the \
                      most active customers first.",
        domains: &["customer_care"],
    },
    QueryTemplate {
        keywords: &["content", "article", "engagement", "title"],
        sql: CONTENT_SQL,
        explanation: "This query shows content performance by displaying articles with their \
                      read counts and engagement scores, ordered by engagement level.",
        domains: &["content"],
    },
    QueryTemplate {
        keywords: &["read", "meter", "kwh", "usage", "consumption"],
        sql: ENERGY_SQL,
        explanation: "This query sums daily meter read values per account, most recent days \
                      first, to show energy consumption over time.",
        domains: &["reads"],
    },
];

// Mandatory fallback when no group matches.
const DEFAULT_TEMPLATE: QueryTemplate = QueryTemplate {
    keywords: &[],
    sql: REVENUE_SQL,
    explanation: "This is a default revenue analysis query that shows monthly revenue trends \
                  from financial transactions, grouped by month and ordered chronologically.",
    domains: &["financials"],
};

/// Map a question to a canned SQL template with an explanation.
///
/// Total over any string input: unmatched questions take the default entry.
/// Identical input yields byte-identical output.
pub fn compose(question: &str) -> ProposedQuery {
    compose_with_hints(question, &[])
}

/// Same dispatch, but when the default entry fires and the classifier offered
/// hints, the hints become the referenced domains. Matched groups always keep
/// their own domain attribution.
pub fn compose_with_hints(question: &str, hints: &[String]) -> ProposedQuery {
    let question = question.to_lowercase();

    for template in TEMPLATES {
        if template.keywords.iter().any(|kw| question.contains(kw)) {
            return proposed(template, template.domains.iter().map(|d| d.to_string()));
        }
    }

    if hints.is_empty() {
        proposed(
            &DEFAULT_TEMPLATE,
            DEFAULT_TEMPLATE.domains.iter().map(|d| d.to_string()),
        )
    } else {
        proposed(&DEFAULT_TEMPLATE, hints.iter().cloned())
    }
}

fn proposed(
    template: &QueryTemplate,
    domains: impl Iterator<Item = String>,
) -> ProposedQuery {
    ProposedQuery {
        sql: template.sql.to_string(),
        explanation: template.explanation.to_string(),
        referenced_domains: domains.collect(),
    }
}
