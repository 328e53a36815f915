//! Shot models.

use serde::{Deserialize, Serialize};

/// One numbered segment of output text representing a single visual beat.
///
/// Indices are 1-based and strictly increase by 1 across the whole output
/// sequence. A shot is immutable once created: the driver appends shots to
/// the global list and never mutates or reorders existing entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    /// Position in the global sequence (1-indexed)
    pub index: u32,

    /// Shot content with no embedded numbering marker
    pub text: String,
}

impl Shot {
    /// Create a new shot.
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Content length in characters (Unicode scalar values).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Render as the canonical `index.content` line.
    pub fn render_line(&self) -> String {
        format!("{}.{}", self.index, self.text)
    }
}

impl std::fmt::Display for Shot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.index, self.text)
    }
}

/// Render a shot list as `index.content` lines, one per shot.
///
/// This is the export format handed to presentation collaborators.
pub fn render_shot_list(shots: &[Shot]) -> String {
    let mut out = String::new();
    for shot in shots {
        out.push_str(&shot.render_line());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line() {
        let shot = Shot::new(7, "A door creaks open in the dark");
        assert_eq!(shot.render_line(), "7.A door creaks open in the dark");
    }

    #[test]
    fn test_char_len_counts_scalars() {
        let shot = Shot::new(1, "雨が静かに降り始めた");
        assert_eq!(shot.char_len(), 10);
    }

    #[test]
    fn test_render_shot_list() {
        let shots = vec![Shot::new(1, "First beat"), Shot::new(2, "Second beat")];
        assert_eq!(render_shot_list(&shots), "1.First beat\n2.Second beat\n");
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_shot_list(&[]), "");
    }

    #[test]
    fn test_serde_round_trip() {
        let shot = Shot::new(3, "The camera pans across the harbor");
        let json = serde_json::to_string(&shot).unwrap();
        let back: Shot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shot);
    }
}
