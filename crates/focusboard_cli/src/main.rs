//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `focusboard_core` wiring end to
//!   end against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use focusboard_core::db::open_db_in_memory;
use focusboard_core::{
    quadrant_label, BlueprintService, BoardService, NewTaskRequest, SqliteStateStore,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("focusboard_core version={}", focusboard_core::core_version());

    let conn = open_db_in_memory()?;

    let mut board = BoardService::new(SqliteStateStore::new(&conn));
    let task = board.add_task(&NewTaskRequest::auto("Ship report", "", 8, 9))?;
    println!(
        "task score={} quadrant={}",
        task.score,
        quadrant_label(task.quadrant)
    );
    println!("open tasks={}", board.open_task_count());

    let mut blueprint = BlueprintService::new(SqliteStateStore::new(&conn));
    blueprint.save_ruleset("stay factual\nanswer briefly");
    blueprint.save_compendium("The quick brown fox jumps over the lazy dog. ".repeat(16))?;
    if let Some(summary) = blueprint.chunk_summary() {
        println!(
            "compendium chunks={} tokens={} avg={}",
            summary.count, summary.total_tokens, summary.average_tokens
        );
    }

    Ok(())
}
