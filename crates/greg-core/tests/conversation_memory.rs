use greg_core::memory::ConversationMemory;

#[test]
fn ensure_mints_fresh_ids_and_keeps_given_ones() {
    let memory = ConversationMemory::new();

    let a = memory.ensure(None);
    let b = memory.ensure(None);
    assert_ne!(a, b);

    let kept = memory.ensure(Some("conv-1".to_string()));
    assert_eq!(kept, "conv-1");
}

#[test]
fn history_round_trips_in_order() {
    let memory = ConversationMemory::new();

    memory.append("conv-1", "user", "total revenue?");
    memory.append("conv-1", "assistant", "SQL proposed");

    let history = memory.history("conv-1");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, "user");
    assert_eq!(history[0].content, "total revenue?");
    assert_eq!(history[1].role, "assistant");

    assert!(memory.history("unknown").is_empty());
}

#[test]
fn oldest_messages_are_evicted_past_capacity() {
    let memory = ConversationMemory::new();

    for i in 0..15 {
        memory.append("conv-1", "user", &format!("message {i}"));
    }

    let history = memory.history("conv-1");
    assert_eq!(history.len(), 10);
    assert_eq!(history[0].content, "message 5");
    assert_eq!(history[9].content, "message 14");
}

#[test]
fn conversations_are_isolated() {
    let memory = ConversationMemory::new();

    memory.append("conv-1", "user", "one");
    memory.append("conv-2", "user", "two");

    assert_eq!(memory.history("conv-1").len(), 1);
    assert_eq!(memory.history("conv-2").len(), 1);
}
