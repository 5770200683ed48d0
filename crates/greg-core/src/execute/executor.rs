use crate::execute::datasets::{dataset, DatasetTag};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SYNTHETIC_DATA_WARNING: &str =
    "This is synthetic data for demonstration purposes. Live warehouse integration is pending.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub row_count: usize,
    pub warning: Option<String>,
}

// Ordered substring triggers; first hit wins. Content sits ahead of the read
// trigger so `reads_content` queries do not resolve to meter readings.
const TRIGGERS: &[(&[&str], DatasetTag)] = &[
    (&["revenue", "amount"], DatasetTag::Financial),
    (&["customer", "ticket"], DatasetTag::Support),
    (&["content", "engagement"], DatasetTag::Content),
    (&["read", "kwh"], DatasetTag::Energy),
];

/// Resolve a SQL string to its canned dataset tag. This is substring
/// dispatch, not query execution: an unparseable string still resolves.
pub fn resolve_dataset(sql: &str) -> DatasetTag {
    let sql = sql.to_lowercase();
    TRIGGERS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| sql.contains(kw)))
        .map(|(_, tag)| *tag)
        .unwrap_or(DatasetTag::Generic)
}

/// "Execute" a query against the synthetic dataset registry.
///
/// Returns at most `limit` rows, capped at the fixed dataset size, and always
/// carries the synthetic-data warning.
pub fn execute(sql: &str, limit: usize) -> ExecutionResult {
    let tag = resolve_dataset(sql);
    tracing::info!(?tag, limit, "executing query against mock registry");

    let mut data = dataset(tag);
    data.rows.truncate(limit);

    ExecutionResult {
        row_count: data.rows.len(),
        columns: data.columns,
        rows: data.rows,
        warning: Some(SYNTHETIC_DATA_WARNING.to_string()),
    }
}
