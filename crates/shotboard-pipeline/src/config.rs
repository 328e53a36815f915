//! Pipeline configuration.

use shotboard_models::DEFAULT_CONTEXT_CHARS;

/// Default chunk bound in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum characters per chunk sent to the annotation service
    pub chunk_size: usize,
    /// Length of the continuity excerpt carried between chunks
    pub context_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            context_chars: DEFAULT_CONTEXT_CHARS,
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            chunk_size: std::env::var("SHOTBOARD_CHUNK_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(DEFAULT_CHUNK_SIZE),
            context_chars: std::env::var("SHOTBOARD_CONTEXT_CHARS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CONTEXT_CHARS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.context_chars, 30);
    }
}
