//! Pipeline driver loop.
//!
//! Chunks are processed strictly one at a time, in input order. The call
//! for chunk `i+1` is never issued before chunk `i` resolves: its request
//! needs the global index and continuity excerpt that chunk `i` produced.

use tracing::{error, info, warn};

use shotboard_annotator::{AnnotatorClient, SegmentRequest};
use shotboard_models::{
    check_compliance, normalize_text, tail_excerpt, ChunkSplitter, ComplianceReport, Shot,
};

use crate::config::PipelineConfig;
use crate::normalize::normalize_output;

/// State threaded through the chunk loop.
///
/// Exclusively owned by the driver and mutated only between iterations.
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Index the next emitted shot must receive
    pub next_index: u32,
    /// Trailing excerpt of the most recently processed chunk
    pub continuity: Option<String>,
}

impl PipelineState {
    fn new() -> Self {
        Self {
            next_index: 1,
            continuity: None,
        }
    }
}

/// Result of a pipeline run.
///
/// On chunk failure the run still yields a well-formed partial list:
/// every shot accumulated from previously completed chunks, indices
/// contiguous from 1, plus a description of what went wrong.
#[derive(Debug)]
pub struct SegmentationOutcome {
    /// Accumulated shots, in chunk-submission then within-chunk order
    pub shots: Vec<Shot>,
    /// Length compliance summary over the accumulated shots
    pub report: ComplianceReport,
    /// Number of chunks the input was split into
    pub chunks_total: usize,
    /// Number of chunks that completed successfully
    pub chunks_processed: usize,
    /// Failure description when the run aborted early
    pub failure: Option<String>,
}

impl SegmentationOutcome {
    /// Whether every chunk completed.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Run the full segmentation pipeline over a raw document.
///
/// Normalizes the input, splits it into bounded chunks, and folds the
/// annotation calls sequentially. Any annotation failure aborts the
/// remaining chunks; there is no retry and no rollback of accumulated
/// shots.
pub async fn run_segmentation(
    client: &AnnotatorClient,
    config: &PipelineConfig,
    raw_text: &str,
) -> SegmentationOutcome {
    let cleaned = normalize_text(raw_text);
    let chunks: Vec<_> = ChunkSplitter::new(&cleaned, config.chunk_size).collect();
    let chunks_total = chunks.len();

    info!(
        input_chars = cleaned.chars().count(),
        chunks = chunks_total,
        chunk_size = config.chunk_size,
        model = client.model(),
        "Starting segmentation"
    );

    let mut shots: Vec<Shot> = Vec::new();
    let mut state = PipelineState::new();
    let mut chunks_processed = 0;
    let mut failure = None;

    for (i, chunk) in chunks.iter().enumerate() {
        let request = SegmentRequest::new(
            state.next_index,
            state.continuity.clone(),
            chunk.text.clone(),
        );

        info!(
            chunk = i + 1,
            total = chunks_total,
            start_index = state.next_index,
            "Requesting segmentation"
        );

        match client.annotate(&request).await {
            Ok(raw) => {
                let (chunk_shots, next_index) = normalize_output(&raw, state.next_index);
                if chunk_shots.is_empty() {
                    warn!(chunk = i + 1, "Annotation produced no usable shot lines");
                }
                shots.extend(chunk_shots);

                // Continuity is carried even when the chunk yielded no shots.
                state.next_index = next_index;
                state.continuity =
                    Some(tail_excerpt(&chunk.text, config.context_chars).to_string());
                chunks_processed += 1;
            }
            Err(e) => {
                error!(
                    chunk = i + 1,
                    total = chunks_total,
                    error = %e,
                    "Annotation failed, keeping shots from completed chunks"
                );
                failure = Some(format!("chunk {} of {}: {}", i + 1, chunks_total, e));
                break;
            }
        }
    }

    let report = check_compliance(&shots);
    info!(
        shots = report.total,
        non_compliant = report.non_compliant,
        chunks_processed,
        chunks_total,
        "Segmentation finished"
    );

    SegmentationOutcome {
        shots,
        report,
        chunks_total,
        chunks_processed,
        failure,
    }
}
