use focusboard_core::db::open_db_in_memory;
use focusboard_core::{
    write_export, BlueprintService, ChunkingError, ExportFormat, MemoryStateStore,
    SqliteStateStore, StateStore, COMPENDIUM_STATE_KEY, DEFAULT_CHUNK_SIZE,
};
use std::fs;

#[test]
fn fresh_service_starts_with_defaults() {
    let service = BlueprintService::new(MemoryStateStore::new());

    assert!(service.ruleset().raw.is_empty());
    assert!(service.ruleset().markdown.is_empty());
    assert_eq!(service.ruleset().updated_at, None);
    assert_eq!(service.compendium().format, ExportFormat::Json);
    assert_eq!(service.compendium().chunk_size, DEFAULT_CHUNK_SIZE);
}

#[test]
fn save_ruleset_derives_markdown_and_stamps_time() {
    let mut service = BlueprintService::new(MemoryStateStore::new());
    let state = service.save_ruleset("stay factual\nanswer briefly");

    assert_eq!(
        state.markdown,
        "## Instructional Ruleset\n\n- stay factual\n- answer briefly"
    );
    assert!(state.updated_at.is_some());
}

#[test]
fn ruleset_export_follows_filename_convention() {
    let mut service = BlueprintService::new(MemoryStateStore::new());
    assert!(service.export_ruleset().is_none());

    service.save_ruleset("one rule");
    let export = service.export_ruleset().unwrap();
    assert_eq!(export.filename, "instructional-ruleset.md");
    assert_eq!(export.mime_type, "text/markdown");
    assert!(export.content.contains("- one rule"));
}

#[test]
fn save_compendium_chunks_and_survives_rehydration() {
    let conn = open_db_in_memory().unwrap();

    let mut service = BlueprintService::new(SqliteStateStore::new(&conn));
    service.set_chunk_size(100).unwrap();
    let chunks = service
        .save_compendium("x".repeat(250))
        .unwrap()
        .to_vec();
    assert_eq!(chunks.len(), 3);

    let rehydrated = BlueprintService::new(SqliteStateStore::new(&conn));
    assert_eq!(rehydrated.compendium().chunks, chunks);
    assert_eq!(rehydrated.compendium().chunk_size, 100);
}

#[test]
fn empty_compendium_clears_chunks_without_error() {
    let mut service = BlueprintService::new(MemoryStateStore::new());
    service.save_compendium("some knowledge").unwrap();
    assert!(!service.compendium().chunks.is_empty());

    service.save_compendium("   ").unwrap();
    assert!(service.compendium().chunks.is_empty());
    assert!(service.chunk_summary().is_none());
}

#[test]
fn chunk_size_policy_bounds_are_enforced() {
    let mut service = BlueprintService::new(MemoryStateStore::new());

    assert!(matches!(
        service.set_chunk_size(99),
        Err(ChunkingError::ChunkSizeOutOfRange(99))
    ));
    assert!(matches!(
        service.set_chunk_size(1201),
        Err(ChunkingError::ChunkSizeOutOfRange(1201))
    ));
    service.set_chunk_size(100).unwrap();
    service.set_chunk_size(1200).unwrap();
}

#[test]
fn out_of_range_hydrated_chunk_size_resets_to_default() {
    let store = MemoryStateStore::new();
    store
        .set(
            COMPENDIUM_STATE_KEY,
            r#"{"raw":"","chunks":[],"format":"json","chunkSize":5000,"updatedAt":null}"#,
        )
        .unwrap();

    let service = BlueprintService::new(store);
    assert_eq!(service.compendium().chunk_size, DEFAULT_CHUNK_SIZE);
}

#[test]
fn compendium_export_matches_configured_format() {
    let mut service = BlueprintService::new(MemoryStateStore::new());
    assert!(service.export_compendium().unwrap().is_none());

    service.save_compendium("knowledge to keep").unwrap();

    let json_export = service.export_compendium().unwrap().unwrap();
    assert_eq!(json_export.filename, "knowledge-compendium.json");
    assert_eq!(json_export.mime_type, "application/json");
    assert!(json_export.content.starts_with('['));

    service.set_format(ExportFormat::Jsonl);
    let jsonl_export = service.export_compendium().unwrap().unwrap();
    assert_eq!(jsonl_export.filename, "knowledge-compendium.jsonl");
    assert_eq!(jsonl_export.content.lines().count(), 1);
}

#[test]
fn chunk_summary_reflects_current_chunk_set() {
    let mut service = BlueprintService::new(MemoryStateStore::new());
    service.set_chunk_size(100).unwrap();
    service.save_compendium("y".repeat(220)).unwrap();

    let summary = service.chunk_summary().unwrap();
    assert_eq!(summary.count, 3);
    // 100 + 100 + 20 chars at 4 chars per token.
    assert_eq!(summary.total_tokens, 55);
}

#[test]
fn write_export_places_file_in_target_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = BlueprintService::new(MemoryStateStore::new());
    service.save_ruleset("persisted rule");

    let export = service.export_ruleset().unwrap();
    let path = write_export(dir.path().join("exports"), &export).unwrap();

    assert!(path.ends_with("instructional-ruleset.md"));
    assert_eq!(fs::read_to_string(path).unwrap(), export.content);
}
