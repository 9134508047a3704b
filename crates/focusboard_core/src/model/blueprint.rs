//! Blueprint document models: Instructional Ruleset and Knowledge Compendium.
//!
//! # Responsibility
//! - Define the chunk record emitted by the chunking engine.
//! - Define the two persisted document states and the export format token.
//!
//! # Invariants
//! - A chunk set is regenerated wholesale on every chunking call; chunks are
//!   never mutated incrementally.
//! - Wire field names stay camelCase to match the persisted layout.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Positional and sizing metadata attached to one knowledge chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkMetadata {
    /// Human-readable 1-based ordinal label, `chunk-1`, `chunk-2`, ...
    pub chunk_id: String,
    /// Character offset of the first content char in the normalized source.
    pub start: usize,
    /// Exclusive character offset; `end - start` equals the content length.
    pub end: usize,
    /// Heuristic token count, `ceil(chars / 4)`.
    pub token_estimate: usize,
    /// Unix epoch milliseconds shared by every chunk of one chunking call.
    pub created_at: i64,
}

/// One bounded-size slice of the knowledge compendium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeChunk {
    /// Fresh unique identifier, distinct per chunk and per call.
    pub id: Uuid,
    /// Contiguous substring of the normalized source text.
    pub content: String,
    pub metadata: ChunkMetadata,
}

/// Interchange format for compendium export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Single pretty-printed array document.
    Json,
    /// One compact record per line.
    Jsonl,
}

impl ExportFormat {
    /// Canonical lowercase token, also used as the file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Jsonl => "jsonl",
        }
    }
}

/// Persisted state of the Instructional Ruleset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionalRulesetState {
    /// Author-supplied raw text.
    pub raw: String,
    /// Markdown bullet rendition derived from `raw` on save.
    pub markdown: String,
    /// Unix epoch milliseconds of the last save, `None` before first save.
    pub updated_at: Option<i64>,
}

impl Default for InstructionalRulesetState {
    fn default() -> Self {
        Self {
            raw: String::new(),
            markdown: String::new(),
            updated_at: None,
        }
    }
}

/// Persisted state of the Knowledge Compendium document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCompendiumState {
    /// Author-supplied raw text.
    pub raw: String,
    /// Chunk set regenerated wholesale on save.
    pub chunks: Vec<KnowledgeChunk>,
    /// Export format selected for this compendium.
    pub format: ExportFormat,
    /// Window size in characters used by the chunker.
    pub chunk_size: usize,
    /// Unix epoch milliseconds of the last save, `None` before first save.
    pub updated_at: Option<i64>,
}

impl Default for KnowledgeCompendiumState {
    fn default() -> Self {
        Self {
            raw: String::new(),
            chunks: Vec::new(),
            format: ExportFormat::Json,
            chunk_size: crate::chunking::DEFAULT_CHUNK_SIZE,
            updated_at: None,
        }
    }
}
