use focusboard_core::db::open_db_in_memory;
use focusboard_core::{MemoryStateStore, SqliteStateStore, StateStore};

fn exercise_store(store: &impl StateStore) {
    assert_eq!(store.get("missing").unwrap(), None);

    store.set("agentic-tasks", "[]").unwrap();
    assert_eq!(store.get("agentic-tasks").unwrap().as_deref(), Some("[]"));

    store.set("agentic-tasks", r#"[{"id":"x"}]"#).unwrap();
    assert_eq!(
        store.get("agentic-tasks").unwrap().as_deref(),
        Some(r#"[{"id":"x"}]"#)
    );

    // Keys are independent documents.
    store.set("agentic-ir", "{}").unwrap();
    assert_eq!(store.get("agentic-ir").unwrap().as_deref(), Some("{}"));
    assert_eq!(
        store.get("agentic-tasks").unwrap().as_deref(),
        Some(r#"[{"id":"x"}]"#)
    );
}

#[test]
fn sqlite_store_get_set_overwrite() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::new(&conn);
    exercise_store(&store);
}

#[test]
fn memory_store_get_set_overwrite() {
    let store = MemoryStateStore::new();
    exercise_store(&store);
}

#[test]
fn sqlite_store_persists_across_connections_to_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.db");

    {
        let conn = focusboard_core::db::open_db(&path).unwrap();
        let store = SqliteStateStore::new(&conn);
        store.set("agentic-kcs", r#"{"raw":""}"#).unwrap();
    }

    let conn = focusboard_core::db::open_db(&path).unwrap();
    let store = SqliteStateStore::new(&conn);
    assert_eq!(
        store.get("agentic-kcs").unwrap().as_deref(),
        Some(r#"{"raw":""}"#)
    );
}
