use crate::knowledge::KnowledgeStore;

/// Keyword associations per domain, evaluated in the store's declaration
/// order. Domains without an entry here still match on their literal name.
const KEYWORD_TABLE: &[(&str, &[&str])] = &[
    (
        "financials",
        &[
            "revenue",
            "money",
            "payment",
            "transaction",
            "profit",
            "cost",
            "sales",
            "income",
        ],
    ),
    (
        "customer_care",
        &[
            "customer",
            "ticket",
            "complaint",
            "support",
            "satisfaction",
            "client",
        ],
    ),
    ("content", &["content", "article", "engagement", "title"]),
    (
        "reads",
        &["read", "meter", "kwh", "usage", "consumption", "energy"],
    ),
];

/// Advisory mapper from a free-text question to the knowledge domains it
/// plausibly touches. Inclusion only, no scoring.
#[derive(Debug, Default)]
pub struct DomainClassifier {
    fallback: Option<String>,
}

impl DomainClassifier {
    pub fn new() -> Self {
        Self { fallback: None }
    }

    /// Replace an empty classification with `domain`.
    pub fn with_fallback(domain: impl Into<String>) -> Self {
        Self {
            fallback: Some(domain.into()),
        }
    }

    /// Ordered list of matching domain names; ties keep declaration order.
    pub fn classify(&self, question: &str, store: &KnowledgeStore) -> Vec<String> {
        let question = question.to_lowercase();
        let mut matched = Vec::new();

        for domain in store.domains() {
            if question.contains(&domain.name.to_lowercase()) {
                matched.push(domain.name.clone());
                continue;
            }

            let keywords = KEYWORD_TABLE
                .iter()
                .find(|(name, _)| *name == domain.name)
                .map(|(_, kws)| *kws)
                .unwrap_or(&[]);

            if keywords.iter().any(|kw| question.contains(kw)) {
                matched.push(domain.name.clone());
            }
        }

        if matched.is_empty() {
            if let Some(fallback) = &self.fallback {
                matched.push(fallback.clone());
            }
        }

        matched
    }
}
