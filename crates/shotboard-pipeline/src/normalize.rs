//! Output normalization.
//!
//! The annotation service returns free-form numbered-line text. Its
//! numbering is untrusted: whatever numeration it produced is discarded
//! and indices are reassigned sequentially from the expected start, so
//! global continuity holds no matter what the service emitted. Shot
//! content itself is never rewritten here.

use regex::Regex;

use shotboard_models::Shot;

/// Normalize one chunk's raw annotation output into shots.
///
/// Splits `raw` into lines, strips any leading run of digits followed by
/// separator characters (period, full-width period, middle dots,
/// ideographic comma/stop, whitespace), trims the remainder, and emits
/// one shot per non-empty remainder, numbered sequentially from
/// `start_index`. Blank and all-noise lines consume no index.
///
/// Returns the shots and the next index to use for the following chunk.
/// Empty input yields no shots and an unchanged index.
pub fn normalize_output(raw: &str, start_index: u32) -> (Vec<Shot>, u32) {
    let prefix = Regex::new(r"^[0-9０-９]+[\s.．。·・•、]+").unwrap();

    let mut shots = Vec::new();
    let mut next_index = start_index;

    for line in raw.lines() {
        let line = line.trim();
        let content = prefix.replace(line, "");
        let content = content.trim();

        if content.is_empty() {
            continue;
        }

        shots.push(Shot::new(next_index, content));
        next_index += 1;
    }

    (shots, next_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reassigns_untrusted_numbering() {
        let raw = "7. Hello\n99. World\nfoo Bar";
        let (shots, next) = normalize_output(raw, 1);

        assert_eq!(shots.len(), 3);
        assert_eq!(shots[0], Shot::new(1, "Hello"));
        assert_eq!(shots[1], Shot::new(2, "World"));
        assert_eq!(shots[2], Shot::new(3, "foo Bar"));
        assert_eq!(next, 4);
    }

    #[test]
    fn test_blank_lines_consume_no_index() {
        let raw = "1. first\n\n   \n2. second";
        let (shots, next) = normalize_output(raw, 5);

        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].index, 5);
        assert_eq!(shots[1].index, 6);
        assert_eq!(next, 7);
    }

    #[test]
    fn test_pure_noise_line_skipped() {
        let (shots, next) = normalize_output("12.\n3. real content", 1);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0], Shot::new(1, "real content"));
        assert_eq!(next, 2);
    }

    #[test]
    fn test_empty_input_leaves_index_unchanged() {
        let (shots, next) = normalize_output("", 42);
        assert!(shots.is_empty());
        assert_eq!(next, 42);
    }

    #[test]
    fn test_separator_variants() {
        let raw = "1。雨の中を歩く二人\n２・傘を差し出す手\n3．駅のホームで別れる";
        let (shots, _) = normalize_output(raw, 1);
        assert_eq!(shots[0].text, "雨の中を歩く二人");
        assert_eq!(shots[1].text, "傘を差し出す手");
        assert_eq!(shots[2].text, "駅のホームで別れる");
    }

    #[test]
    fn test_number_without_separator_kept() {
        // Digits followed by non-separator content are real content.
        let (shots, _) = normalize_output("2001:ASpaceOdyssey", 1);
        assert_eq!(shots[0].text, "2001:ASpaceOdyssey");
    }

    #[test]
    fn test_content_preserved_after_prefix_strip() {
        let (shots, _) = normalize_output("14. The lights flicker, then hold", 14);
        assert_eq!(shots[0].text, "The lights flicker, then hold");
        assert_eq!(shots[0].index, 14);
    }
}
