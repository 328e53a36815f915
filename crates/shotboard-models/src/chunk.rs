//! Input normalization and chunk splitting.
//!
//! The raw document is first collapsed into one dense character stream,
//! then partitioned into fixed-size, order-preserving, non-overlapping
//! windows. All sizes and offsets count Unicode scalar values, not bytes.

use serde::{Deserialize, Serialize};

/// Default length of the continuity excerpt carried between chunks.
pub const DEFAULT_CONTEXT_CHARS: usize = 30;

/// A bounded contiguous slice of the cleaned input stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Character offset of this chunk within the cleaned stream
    pub start_offset: usize,

    /// The exact substring assigned to this chunk
    pub text: String,
}

/// Strip all whitespace and newlines from raw input into one dense stream.
pub fn normalize_text(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lazy iterator over fixed-size chunks of a cleaned stream.
///
/// Every chunk holds exactly `size` characters except possibly the last,
/// which holds the remainder. Concatenating all chunk texts in order
/// reconstructs the input exactly. Empty input yields no chunks.
/// Restartable by constructing a new splitter over the same text.
#[derive(Debug, Clone)]
pub struct ChunkSplitter<'a> {
    rest: &'a str,
    offset: usize,
    size: usize,
}

impl<'a> ChunkSplitter<'a> {
    /// Create a splitter over `text` with chunk bound `size` (> 0).
    pub fn new(text: &'a str, size: usize) -> Self {
        assert!(size > 0, "chunk size must be positive");
        Self {
            rest: text,
            offset: 0,
            size,
        }
    }
}

impl Iterator for ChunkSplitter<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.rest.is_empty() {
            return None;
        }

        // Byte position of the size-th character, or the whole remainder.
        let split_at = self
            .rest
            .char_indices()
            .nth(self.size)
            .map(|(byte_pos, _)| byte_pos)
            .unwrap_or(self.rest.len());

        let (head, tail) = self.rest.split_at(split_at);
        let chunk = Chunk {
            start_offset: self.offset,
            text: head.to_string(),
        };

        self.offset += head.chars().count();
        self.rest = tail;
        Some(chunk)
    }
}

/// Last `k` characters of `text`, or the whole text when shorter.
///
/// Purely advisory context for the next chunk's request; the annotation
/// service may ignore it.
pub fn tail_excerpt(text: &str, k: usize) -> &str {
    let char_count = text.chars().count();
    if char_count <= k {
        return text;
    }
    let start = text
        .char_indices()
        .nth(char_count - k)
        .map(|(byte_pos, _)| byte_pos)
        .unwrap_or(0);
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_whitespace() {
        assert_eq!(normalize_text("a b\tc\nd\r\ne  f"), "abcdef");
        assert_eq!(normalize_text("  \n\t "), "");
    }

    #[test]
    fn test_split_exact_multiple() {
        let chunks: Vec<_> = ChunkSplitter::new("abcdef", 3).collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "abc");
        assert_eq!(chunks[0].start_offset, 0);
        assert_eq!(chunks[1].text, "def");
        assert_eq!(chunks[1].start_offset, 3);
    }

    #[test]
    fn test_split_with_remainder() {
        let chunks: Vec<_> = ChunkSplitter::new("abcdefg", 3).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].text, "g");
        assert_eq!(chunks[2].start_offset, 6);
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(ChunkSplitter::new("", 10).count(), 0);
    }

    #[test]
    fn test_split_bound_larger_than_input() {
        let chunks: Vec<_> = ChunkSplitter::new("ab", 10).collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "ab");
    }

    #[test]
    fn test_lossless_reconstruction() {
        let inputs = ["", "x", "hello world dense", "月は東に日は西に沈む頃"];
        for input in inputs {
            for size in [1, 2, 3, 7, 100] {
                let joined: String = ChunkSplitter::new(input, size)
                    .map(|c| c.text)
                    .collect();
                assert_eq!(joined, input, "input={:?} size={}", input, size);
            }
        }
    }

    #[test]
    fn test_split_multibyte_boundaries() {
        let chunks: Vec<_> = ChunkSplitter::new("あいうえお", 2).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "あい");
        assert_eq!(chunks[1].text, "うえ");
        assert_eq!(chunks[2].text, "お");
        assert_eq!(chunks[1].start_offset, 2);
    }

    #[test]
    fn test_splitter_restartable() {
        let text = "abcdef";
        let first: Vec<_> = ChunkSplitter::new(text, 4).collect();
        let second: Vec<_> = ChunkSplitter::new(text, 4).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tail_excerpt_long_text() {
        let text = "abcdefghij";
        assert_eq!(tail_excerpt(text, 4), "ghij");
    }

    #[test]
    fn test_tail_excerpt_short_text() {
        assert_eq!(tail_excerpt("abc", 30), "abc");
        assert_eq!(tail_excerpt("", 30), "");
    }

    #[test]
    fn test_tail_excerpt_multibyte() {
        assert_eq!(tail_excerpt("春はあけぼの", 3), "けぼの");
    }

    #[test]
    fn test_tail_excerpt_exact_length() {
        assert_eq!(tail_excerpt("abcd", 4), "abcd");
    }
}
