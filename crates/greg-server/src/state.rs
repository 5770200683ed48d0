use greg_core::classify::DomainClassifier;
use greg_core::knowledge::KnowledgeStore;
use greg_core::memory::ConversationMemory;

/// Everything the handlers need, constructed once in `main` and shared
/// read-only (the memory guards its own interior mutability).
pub struct AppState {
    pub knowledge: KnowledgeStore,
    pub classifier: DomainClassifier,
    pub memory: ConversationMemory,
}

impl AppState {
    pub fn new(knowledge: KnowledgeStore) -> Self {
        Self {
            knowledge,
            classifier: DomainClassifier::new(),
            memory: ConversationMemory::new(),
        }
    }
}
