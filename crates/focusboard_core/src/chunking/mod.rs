//! Chunking engine: bounded text windows, token estimates and serializers.
//!
//! # Responsibility
//! - Split raw compendium text into ordered chunks under a size bound.
//! - Attach positional metadata and a token estimate per chunk.
//! - Serialize a chunk set to JSON or JSONL interchange text.
//!
//! # Invariants
//! - Windows split purely on character count; no word-boundary snapping, so
//!   offset arithmetic stays exact.
//! - Concatenating chunk contents in order reconstructs the trimmed source;
//!   offsets are contiguous and non-overlapping.
//! - Empty or whitespace-only input yields an empty chunk set, not an error.

use crate::clock::now_epoch_ms;
use crate::model::blueprint::{ChunkMetadata, ExportFormat, KnowledgeChunk};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Smallest accepted chunk window, in characters.
pub const MIN_CHUNK_SIZE: usize = 100;
/// Largest accepted chunk window, in characters.
pub const MAX_CHUNK_SIZE: usize = 1200;
/// Window size used when no explicit preference is stored.
pub const DEFAULT_CHUNK_SIZE: usize = 400;

/// Heuristic character-per-token ratio used for the estimate.
const CHARS_PER_TOKEN: usize = 4;

/// Chunking and serialization error.
#[derive(Debug)]
pub enum ChunkingError {
    /// Requested window size rejected: zero at the engine level, or outside
    /// the `[100, 1200]` board policy at the service level.
    ChunkSizeOutOfRange(usize),
    /// Format token not recognized as `json` or `jsonl`.
    UnknownFormat(String),
    /// Underlying JSON encoding failure.
    Json(serde_json::Error),
}

impl Display for ChunkingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChunkSizeOutOfRange(size) => write!(
                f,
                "chunk size {size} outside accepted range {MIN_CHUNK_SIZE}..={MAX_CHUNK_SIZE}"
            ),
            Self::UnknownFormat(token) => {
                write!(f, "unknown export format `{token}`; expected json|jsonl")
            }
            Self::Json(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ChunkingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ChunkingError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parses an export format token, case-insensitively.
pub fn parse_export_format(token: &str) -> Result<ExportFormat, ChunkingError> {
    match token.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(ExportFormat::Json),
        "jsonl" => Ok(ExportFormat::Jsonl),
        _ => Err(ChunkingError::UnknownFormat(token.to_string())),
    }
}

/// Estimates the token cost of a text at four characters per token.
///
/// Display heuristic only; never used for exact accounting.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

/// Splits raw text into chunks stamped with the current time.
///
/// See [`chunk_text_at`] for the full contract; chunk IDs and the shared
/// timestamp are the only non-deterministic outputs.
pub fn chunk_text(raw: &str, chunk_size: usize) -> Result<Vec<KnowledgeChunk>, ChunkingError> {
    chunk_text_at(raw, chunk_size, now_epoch_ms())
}

/// Splits raw text into chunks with a caller-provided shared timestamp.
///
/// The input is trimmed first; the trimmed text is partitioned into
/// contiguous windows of at most `chunk_size` characters, covering the whole
/// text with no gaps. The final window may be shorter. Offsets count `char`s
/// in the trimmed text, end exclusive.
///
/// The engine accepts any window size of at least one character; the
/// `[100, 1200]` board policy is enforced where chunk sizes are configured,
/// in [`crate::service::blueprint_service::BlueprintService`].
///
/// # Errors
/// - `ChunkSizeOutOfRange` when `chunk_size` is zero.
///
/// Empty or whitespace-only input returns `Ok` with an empty vec.
pub fn chunk_text_at(
    raw: &str,
    chunk_size: usize,
    created_at_ms: i64,
) -> Result<Vec<KnowledgeChunk>, ChunkingError> {
    if chunk_size == 0 {
        return Err(ChunkingError::ChunkSizeOutOfRange(chunk_size));
    }

    let normalized = raw.trim();
    if normalized.is_empty() {
        return Ok(Vec::new());
    }

    let chars: Vec<char> = normalized.chars().collect();
    let mut chunks = Vec::with_capacity(chars.len().div_ceil(chunk_size));

    let mut start = 0;
    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        let content: String = chars[start..end].iter().collect();
        chunks.push(KnowledgeChunk {
            id: Uuid::new_v4(),
            metadata: ChunkMetadata {
                chunk_id: format!("chunk-{}", chunks.len() + 1),
                start,
                end,
                token_estimate: estimate_tokens(&content),
                created_at: created_at_ms,
            },
            content,
        });
        start = end;
    }

    Ok(chunks)
}

/// Serializes a chunk set into the requested interchange format.
///
/// - `Json`: one pretty-printed array document; an empty set yields `[]`.
/// - `Jsonl`: one compact record per line in sequence order, every line
///   newline-terminated including the last; an empty set yields `""`.
pub fn serialize_chunks(
    chunks: &[KnowledgeChunk],
    format: ExportFormat,
) -> Result<String, ChunkingError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(chunks)?),
        ExportFormat::Jsonl => {
            let mut out = String::new();
            for chunk in chunks {
                out.push_str(&serde_json::to_string(chunk)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Display statistics over one chunk set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSummary {
    /// Number of chunks.
    pub count: usize,
    /// Sum of per-chunk token estimates.
    pub total_tokens: usize,
    /// Rounded mean token estimate per chunk.
    pub average_tokens: usize,
}

/// Aggregates display statistics over a chunk set.
///
/// Returns `None` for an empty set. The average rounds to nearest.
pub fn summarize_chunks(chunks: &[KnowledgeChunk]) -> Option<ChunkSummary> {
    if chunks.is_empty() {
        return None;
    }
    let total_tokens: usize = chunks
        .iter()
        .map(|chunk| chunk.metadata.token_estimate)
        .sum();
    Some(ChunkSummary {
        count: chunks.len(),
        total_tokens,
        average_tokens: (total_tokens + chunks.len() / 2) / chunks.len(),
    })
}
