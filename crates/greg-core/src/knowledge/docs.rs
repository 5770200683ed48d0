use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tables: Vec<TableDoc>,
    #[serde(default)]
    pub joins: Vec<JoinRule>,
    #[serde(default)]
    pub caveats: Vec<String>,
    #[serde(default)]
    pub sample_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDoc {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub fields: Vec<FieldDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub description: String,
    #[serde(default)]
    pub semantic_role: Option<SemanticRole>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    String,
    Numeric,
    Date,
    Timestamp,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    Key,
    Metric,
    Dimension,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRule {
    pub target_table: String,
    pub condition: String,
    pub join_type: JoinType, // "INNER" | "LEFT" | "RIGHT" | "FULL"
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}
