//! Prompt composition for segmentation requests.

use crate::types::SegmentRequest;

/// Fixed system instruction describing the segmentation rules.
///
/// Identical for every chunk; only the user content varies per request.
pub const SEGMENTATION_INSTRUCTION: &str = r#"You are a storyboard editor. Split the given transcript text into numbered shots, where each shot is one visual beat of roughly 5 seconds.

Rules:
- Each shot must be 20-35 characters long. Fragments shorter than 15 characters are strictly forbidden: merge them into a neighboring shot.
- If a fragment would exceed 35 characters, split it at a logical break.
- Preserve the original text content exactly. Do not rewrite, summarize, reorder, or drop anything, and do not insert commentary or annotations.
- Continue numbering from the starting index given below. Do not restart at 1.
- Output ONLY shot lines, one per line, in the exact format: index.content
"#;

/// Build the per-chunk user content: starting index, optional continuity
/// excerpt, and the chunk text, human-readably labeled, in that order.
pub fn build_user_content(request: &SegmentRequest) -> String {
    let mut content = format!("STARTING INDEX: {}\n", request.start_index);

    if let Some(ref excerpt) = request.context_excerpt {
        if !excerpt.is_empty() {
            content.push_str(&format!(
                "PREVIOUS CONTEXT (already segmented, for continuity only):\n{}\n",
                excerpt
            ));
        }
    }

    content.push_str(&format!("\nTEXT TO SEGMENT:\n{}", request.chunk_text));
    content
}
