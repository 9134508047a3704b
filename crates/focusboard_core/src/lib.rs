//! Core domain logic for the Focus Board.
//! This crate is the single source of truth for scoring, chunking and
//! document-state invariants.

pub mod chunking;
pub mod clock;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod ruleset;
pub mod scoring;
pub mod service;

pub use chunking::{
    chunk_text, chunk_text_at, estimate_tokens, parse_export_format, serialize_chunks,
    summarize_chunks, ChunkSummary, ChunkingError, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE,
    MIN_CHUNK_SIZE,
};
pub use export::{write_export, ExportFile};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::blueprint::{
    ChunkMetadata, ExportFormat, InstructionalRulesetState, KnowledgeChunk,
    KnowledgeCompendiumState,
};
pub use model::task::{
    NewTaskRequest, QuadrantAssignment, Task, TaskId, TaskQuadrant, TaskValidationError, SCALE_MAX,
    SCALE_MIN,
};
pub use repo::state_repo::{
    MemoryStateStore, RepoError, RepoResult, SqliteStateStore, StateStore,
};
pub use scoring::{
    build_task, build_task_at, calculate_score, determine_quadrant, group_by_quadrant,
    quadrant_color, quadrant_label, sort_tasks,
};
pub use service::blueprint_service::{BlueprintService, COMPENDIUM_STATE_KEY, RULESET_STATE_KEY};
pub use service::board_service::{BoardService, TASKS_STATE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
