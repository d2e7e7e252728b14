use text_table_convert::session::SessionStore;
use text_table_convert::types::Table;

fn table(marker: &str) -> Table {
    Table::new(
        vec!["text".to_string()],
        vec![vec![Some(marker.to_string())]],
    )
}

#[test]
fn insert_replaces_previous_pending_table_for_the_same_key() {
    let mut store: SessionStore<u64> = SessionStore::new();

    assert!(store.insert(1, table("first")).is_none());
    let replaced = store.insert(1, table("second")).unwrap();
    assert_eq!(replaced.cell(0, 0), Some("first"));

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&1).unwrap().cell(0, 0), Some("second"));
}

#[test]
fn take_is_single_use() {
    let mut store: SessionStore<u64> = SessionStore::new();
    store.insert(7, table("pending"));

    let taken = store.take(&7).unwrap();
    assert_eq!(taken.cell(0, 0), Some("pending"));

    assert!(store.take(&7).is_none());
    assert!(!store.contains(&7));
}

#[test]
fn discard_reports_whether_a_table_was_pending() {
    let mut store: SessionStore<&str> = SessionStore::new();
    store.insert("chat-a", table("x"));

    assert!(store.discard(&"chat-a"));
    assert!(!store.discard(&"chat-a"));
    assert!(!store.discard(&"never-seen"));
    assert!(store.is_empty());
}

#[test]
fn sessions_are_independent() {
    let mut store: SessionStore<u64> = SessionStore::new();
    store.insert(1, table("one"));
    store.insert(2, table("two"));

    assert_eq!(store.take(&1).unwrap().cell(0, 0), Some("one"));
    assert!(store.contains(&2));
    assert_eq!(store.len(), 1);
}
