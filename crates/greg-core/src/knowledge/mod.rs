pub mod docs;
pub mod store;

pub use docs::{Domain, FieldDoc, FieldType, JoinRule, JoinType, SemanticRole, TableDoc};
pub use store::{DomainFileError, KnowledgeStore};
