use rasterview_viewer::history::History;

#[test]
fn test_capacity_evicts_oldest() {
    let mut history: History<u32> = History::with_capacity(3).unwrap();
    for i in 0..4 {
        history.add_undo(i, format!("edit {}", i));
    }

    assert_eq!(history.undo_len(), 3);
    let states: Vec<u32> = history.undo_points().map(|p| p.state).collect();
    assert_eq!(states, vec![1, 2, 3]);
    assert_eq!(history.undo().map(|p| p.state), Some(3));
}

#[test]
fn test_redo_stack_is_bounded_too() {
    let mut history: History<u32> = History::with_capacity(2).unwrap();
    for i in 0..5 {
        history.add_redo(i, "redo");
    }
    assert_eq!(history.redo_len(), 2);
    assert_eq!(history.peek_redo().map(|p| p.state), Some(4));
}

#[test]
fn test_new_edit_clears_redo() {
    let mut history: History<&str> = History::new();
    history.add_undo("a", "first");
    history.add_redo("b", "first");
    assert!(history.can_redo());

    history.add_undo("c", "second");
    assert!(!history.can_redo());
}

#[test]
fn test_keep_redo_during_traversal() {
    let mut history: History<&str> = History::new();
    history.add_redo("b", "one");
    history.add_redo("c", "two");

    history.add_undo_keep_redo("a", "two", true);
    assert_eq!(history.redo_len(), 2);
    assert_eq!(history.peek_undo_comment(false).as_deref(), Some("two"));
}

#[test]
fn test_empty_history() {
    let mut history: History<u32> = History::default();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.undo().is_none());
    assert!(history.peek_undo_comment(true).is_none());

    history.add_undo(1, "x");
    history.clear();
    assert_eq!(history.undo_len(), 0);
    assert!(history.set_capacity(4).is_ok());
}
