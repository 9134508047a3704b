use focusboard_core::{
    chunk_text, chunk_text_at, estimate_tokens, serialize_chunks, summarize_chunks, ChunkingError,
    ExportFormat, KnowledgeChunk,
};

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

#[test]
fn empty_and_whitespace_input_yield_no_chunks() {
    assert!(chunk_text("", 400).unwrap().is_empty());
    assert!(chunk_text("   \n\t  ", 400).unwrap().is_empty());
}

#[test]
fn zero_chunk_size_is_rejected() {
    let err = chunk_text(PANGRAM, 0).unwrap_err();
    assert!(matches!(err, ChunkingError::ChunkSizeOutOfRange(0)));
}

#[test]
fn pangram_splits_into_five_bounded_windows() {
    let chunks = chunk_text(PANGRAM, 10).unwrap();

    assert_eq!(chunks.len(), 5);
    assert_eq!(chunks[0].content, "The quick ");
    assert_eq!(chunks[0].metadata.start, 0);
    assert_eq!(chunks[0].metadata.end, 10);
    assert!(chunks.iter().all(|chunk| chunk.content.chars().count() <= 10));

    let last = chunks.last().unwrap();
    assert_eq!(last.metadata.end, PANGRAM.chars().count());
    assert_eq!(last.content, "dog");
}

#[test]
fn chunks_reconstruct_trimmed_source_contiguously() {
    // Multi-byte chars prove offsets count chars, not bytes.
    let source = "  héllo wörld • résumé naïve façade coöperate 数据 🙂 end  ";
    let trimmed = source.trim();
    let chunks = chunk_text_at(source, 7, 42).unwrap();

    let rebuilt: String = chunks.iter().map(|chunk| chunk.content.as_str()).collect();
    assert_eq!(rebuilt, trimmed);

    for chunk in &chunks {
        assert_eq!(
            chunk.metadata.end - chunk.metadata.start,
            chunk.content.chars().count()
        );
    }
    for pair in chunks.windows(2) {
        assert_eq!(pair[0].metadata.end, pair[1].metadata.start);
    }
    assert_eq!(chunks[0].metadata.start, 0);
    assert_eq!(
        chunks.last().unwrap().metadata.end,
        trimmed.chars().count()
    );
}

#[test]
fn metadata_carries_ordinals_estimates_and_shared_timestamp() {
    let chunks = chunk_text_at(PANGRAM, 10, 1_700_000_000_000).unwrap();

    for (index, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.metadata.chunk_id, format!("chunk-{}", index + 1));
        assert_eq!(
            chunk.metadata.token_estimate,
            estimate_tokens(&chunk.content)
        );
        assert_eq!(chunk.metadata.created_at, 1_700_000_000_000);
    }

    // 10 chars -> 3 tokens, final 3 chars -> 1 token.
    assert_eq!(chunks[0].metadata.token_estimate, 3);
    assert_eq!(chunks.last().unwrap().metadata.token_estimate, 1);
}

#[test]
fn chunk_ids_are_unique_per_call() {
    let chunks = chunk_text(PANGRAM, 10).unwrap();
    let mut ids: Vec<_> = chunks.iter().map(|chunk| chunk.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), chunks.len());
}

#[test]
fn rechunking_is_structurally_idempotent() {
    let first = chunk_text_at(PANGRAM, 10, 7).unwrap();
    let second = chunk_text_at(PANGRAM, 10, 7).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.content, b.content);
        assert_eq!(a.metadata, b.metadata);
        // Fresh identity per call.
        assert_ne!(a.id, b.id);
    }
}

#[test]
fn json_serialization_round_trips() {
    let chunks = chunk_text_at(PANGRAM, 10, 7).unwrap();
    let serialized = serialize_chunks(&chunks, ExportFormat::Json).unwrap();

    let decoded: Vec<KnowledgeChunk> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(decoded, chunks);
}

#[test]
fn json_serialization_uses_expected_wire_fields() {
    let chunks = chunk_text_at(PANGRAM, 10, 7).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&serialize_chunks(&chunks, ExportFormat::Json).unwrap()).unwrap();

    let first = &value[0];
    assert_eq!(first["content"], "The quick ");
    assert_eq!(first["metadata"]["chunkId"], "chunk-1");
    assert_eq!(first["metadata"]["start"], 0);
    assert_eq!(first["metadata"]["end"], 10);
    assert_eq!(first["metadata"]["tokenEstimate"], 3);
    assert_eq!(first["metadata"]["createdAt"], 7);
}

#[test]
fn jsonl_serialization_emits_one_parseable_line_per_chunk() {
    let chunks = chunk_text_at(PANGRAM, 10, 7).unwrap();
    let serialized = serialize_chunks(&chunks, ExportFormat::Jsonl).unwrap();

    assert!(serialized.ends_with('\n'));
    let lines: Vec<&str> = serialized.lines().collect();
    assert_eq!(lines.len(), chunks.len());
    for (line, chunk) in lines.iter().zip(&chunks) {
        let decoded: KnowledgeChunk = serde_json::from_str(line).unwrap();
        assert_eq!(&decoded, chunk);
    }
}

#[test]
fn empty_chunk_set_serializes_to_empty_collections() {
    assert_eq!(serialize_chunks(&[], ExportFormat::Json).unwrap(), "[]");
    assert_eq!(serialize_chunks(&[], ExportFormat::Jsonl).unwrap(), "");
}

#[test]
fn summary_aggregates_token_estimates() {
    let chunks = chunk_text_at(PANGRAM, 10, 7).unwrap();
    let summary = summarize_chunks(&chunks).unwrap();

    assert_eq!(summary.count, 5);
    // Four 10-char windows at 3 tokens plus a 3-char tail at 1 token.
    assert_eq!(summary.total_tokens, 13);
    assert_eq!(summary.average_tokens, 3);

    assert!(summarize_chunks(&[]).is_none());
}
