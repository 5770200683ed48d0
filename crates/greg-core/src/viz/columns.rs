use crate::knowledge::{FieldType, SemanticRole};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape classification for a result column, derived from name heuristics
/// with the sample value as a secondary signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    DateLike,
    Categorical,
}

#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
}

/// Field metadata as supplied by callers that already know their column
/// types, instead of a raw column/sample-row pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub semantic_role: Option<SemanticRole>,
}

const DATE_NAME_HINTS: &[&str] = &["date", "time", "_at", "day", "month", "year"];
const NUMERIC_NAME_HINTS: &[&str] = &[
    "amount", "count", "total", "score", "sum", "avg", "kwh", "revenue",
];

/// Classify a column by name, falling back to the sample value.
pub fn classify_column(name: &str, sample: Option<&Value>) -> ColumnKind {
    let lower = name.to_lowercase();

    if DATE_NAME_HINTS.iter().any(|hint| lower.contains(hint)) {
        return ColumnKind::DateLike;
    }
    if NUMERIC_NAME_HINTS.iter().any(|hint| lower.contains(hint)) {
        return ColumnKind::Numeric;
    }
    if sample.is_some_and(Value::is_number) {
        return ColumnKind::Numeric;
    }

    ColumnKind::Categorical
}

/// Profile a column list against an optional sample row.
pub fn profile_columns(columns: &[String], sample_row: &[Value]) -> Vec<ColumnProfile> {
    columns
        .iter()
        .enumerate()
        .map(|(i, name)| ColumnProfile {
            name: name.clone(),
            kind: classify_column(name, sample_row.get(i)),
        })
        .collect()
}

/// Profile structured field metadata; declared types win over name hints.
pub fn profile_fields(fields: &[FieldMetadata]) -> Vec<ColumnProfile> {
    fields
        .iter()
        .map(|f| {
            let kind = match f.field_type {
                FieldType::Numeric => ColumnKind::Numeric,
                FieldType::Date | FieldType::Timestamp => ColumnKind::DateLike,
                FieldType::String | FieldType::Boolean => ColumnKind::Categorical,
            };
            ColumnProfile {
                name: f.name.clone(),
                kind,
            }
        })
        .collect()
}
