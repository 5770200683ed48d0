pub mod datasets;
pub mod executor;

pub use datasets::{dataset, DatasetTag, MockDataset};
pub use executor::{execute, resolve_dataset, ExecutionResult, SYNTHETIC_DATA_WARNING};
