//! Blueprint documents use-case service.
//!
//! # Responsibility
//! - Maintain the Instructional Ruleset and Knowledge Compendium states.
//! - Derive Markdown and chunk artifacts on save and prepare file exports.
//! - Hydrate from and write through to the `agentic-ir` and `agentic-kcs`
//!   store keys.
//!
//! # Invariants
//! - Saving a document re-derives its artifact wholesale and stamps
//!   `updated_at`.
//! - Store or decode failures degrade to default states with a warning.
//! - A hydrated chunk size outside the accepted bounds is reset to the
//!   default.

use crate::chunking::{
    chunk_text, serialize_chunks, summarize_chunks, ChunkSummary, ChunkingError,
    DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE,
};
use crate::clock::now_epoch_ms;
use crate::export::{ExportFile, COMPENDIUM_EXPORT_BASENAME, RULESET_EXPORT_FILENAME};
use crate::model::blueprint::{
    ExportFormat, InstructionalRulesetState, KnowledgeChunk, KnowledgeCompendiumState,
};
use crate::repo::state_repo::StateStore;
use crate::ruleset::ruleset_to_markdown;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Store key holding the serialized ruleset state.
pub const RULESET_STATE_KEY: &str = "agentic-ir";
/// Store key holding the serialized compendium state.
pub const COMPENDIUM_STATE_KEY: &str = "agentic-kcs";

/// Use-case service for the two blueprint documents.
pub struct BlueprintService<S: StateStore> {
    store: S,
    ruleset: InstructionalRulesetState,
    compendium: KnowledgeCompendiumState,
}

impl<S: StateStore> BlueprintService<S> {
    /// Creates the service and hydrates both document states from the store.
    pub fn new(store: S) -> Self {
        let ruleset = hydrate(&store, RULESET_STATE_KEY);
        let mut compendium: KnowledgeCompendiumState = hydrate(&store, COMPENDIUM_STATE_KEY);
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&compendium.chunk_size) {
            warn!(
                "event=state_hydrate module=blueprint status=warn key={COMPENDIUM_STATE_KEY} \
                 reset_chunk_size={} default={DEFAULT_CHUNK_SIZE}",
                compendium.chunk_size
            );
            compendium.chunk_size = DEFAULT_CHUNK_SIZE;
        }
        Self {
            store,
            ruleset,
            compendium,
        }
    }

    /// Current ruleset state.
    pub fn ruleset(&self) -> &InstructionalRulesetState {
        &self.ruleset
    }

    /// Current compendium state.
    pub fn compendium(&self) -> &KnowledgeCompendiumState {
        &self.compendium
    }

    /// Saves raw ruleset text, re-deriving its Markdown rendition.
    ///
    /// Also the import path: file contents are saved the same way typed text
    /// is.
    pub fn save_ruleset(&mut self, raw: impl Into<String>) -> &InstructionalRulesetState {
        let raw = raw.into();
        self.ruleset = InstructionalRulesetState {
            markdown: ruleset_to_markdown(&raw),
            raw,
            updated_at: Some(now_epoch_ms()),
        };
        self.persist(RULESET_STATE_KEY, &self.ruleset);
        &self.ruleset
    }

    /// Prepares the Markdown export, or `None` before the first save.
    pub fn export_ruleset(&self) -> Option<ExportFile> {
        if self.ruleset.markdown.is_empty() {
            return None;
        }
        Some(ExportFile {
            filename: RULESET_EXPORT_FILENAME.to_string(),
            mime_type: "text/markdown",
            content: self.ruleset.markdown.clone(),
        })
    }

    /// Updates the chunk window size used by subsequent saves.
    ///
    /// # Errors
    /// - `ChunkSizeOutOfRange` outside `[100, 1200]`.
    pub fn set_chunk_size(&mut self, chunk_size: usize) -> Result<(), ChunkingError> {
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            return Err(ChunkingError::ChunkSizeOutOfRange(chunk_size));
        }
        self.compendium.chunk_size = chunk_size;
        self.persist(COMPENDIUM_STATE_KEY, &self.compendium);
        Ok(())
    }

    /// Updates the export format used by subsequent exports.
    pub fn set_format(&mut self, format: ExportFormat) {
        self.compendium.format = format;
        self.persist(COMPENDIUM_STATE_KEY, &self.compendium);
    }

    /// Saves raw compendium text, regenerating the chunk set wholesale.
    ///
    /// Also the import path for file contents. Empty input clears the chunk
    /// set without error.
    pub fn save_compendium(
        &mut self,
        raw: impl Into<String>,
    ) -> Result<&[KnowledgeChunk], ChunkingError> {
        let raw = raw.into();
        let chunks = chunk_text(&raw, self.compendium.chunk_size)?;
        self.compendium.raw = raw;
        self.compendium.chunks = chunks;
        self.compendium.updated_at = Some(now_epoch_ms());
        self.persist(COMPENDIUM_STATE_KEY, &self.compendium);
        Ok(&self.compendium.chunks)
    }

    /// Prepares the chunk-set export in the configured format.
    ///
    /// Returns `None` while the compendium holds no chunks.
    pub fn export_compendium(&self) -> Result<Option<ExportFile>, ChunkingError> {
        if self.compendium.chunks.is_empty() {
            return Ok(None);
        }
        let content = serialize_chunks(&self.compendium.chunks, self.compendium.format)?;
        Ok(Some(ExportFile {
            filename: format!(
                "{COMPENDIUM_EXPORT_BASENAME}.{}",
                self.compendium.format.as_str()
            ),
            mime_type: "application/json",
            content,
        }))
    }

    /// Display statistics over the current chunk set.
    pub fn chunk_summary(&self) -> Option<ChunkSummary> {
        summarize_chunks(&self.compendium.chunks)
    }

    fn persist(&self, key: &str, state: &impl Serialize) {
        let payload = match serde_json::to_string(state) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=state_persist module=blueprint status=warn key={key} error={err}");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &payload) {
            warn!("event=state_persist module=blueprint status=warn key={key} error={err}");
        }
    }
}

fn hydrate<S: StateStore, T: DeserializeOwned + Default>(store: &S, key: &str) -> T {
    let stored = match store.get(key) {
        Ok(stored) => stored,
        Err(err) => {
            warn!("event=state_hydrate module=blueprint status=warn key={key} error={err}");
            return T::default();
        }
    };

    let Some(payload) = stored else {
        return T::default();
    };

    match serde_json::from_str(&payload) {
        Ok(state) => state,
        Err(err) => {
            warn!("event=state_hydrate module=blueprint status=warn key={key} error={err}");
            T::default()
        }
    }
}
