//! Wire types for the annotation service.

use serde::{Deserialize, Serialize};

/// Per-chunk segmentation request data.
///
/// The instruction sent alongside these fields is a fixed configuration
/// value (see [`crate::prompt::SEGMENTATION_INSTRUCTION`]); only these
/// three fields vary between chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRequest {
    /// Global index the first shot of this chunk must receive
    pub start_index: u32,

    /// Trailing excerpt of the previous chunk, absent before the first
    pub context_excerpt: Option<String>,

    /// The chunk text, verbatim
    pub chunk_text: String,
}

impl SegmentRequest {
    pub fn new(start_index: u32, context_excerpt: Option<String>, chunk_text: impl Into<String>) -> Self {
        Self {
            start_index,
            context_excerpt,
            chunk_text: chunk_text.into(),
        }
    }
}

/// Chat completion request body (OpenAI-compatible).
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Chat completion response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub content: String,
}
