pub mod advisor;
pub mod columns;

pub use advisor::{sample_figure, suggest, ChartSuggestion};
pub use columns::{
    classify_column, profile_columns, profile_fields, ColumnKind, ColumnProfile, FieldMetadata,
};
