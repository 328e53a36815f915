//! Shared data models for the Shotboard pipeline.
//!
//! This crate provides the pure domain types and functions:
//! - Shots (numbered storyboard fragments) and shot-list rendering
//! - Input normalization and bounded chunk splitting
//! - Continuity excerpt extraction
//! - Compliance checking against the target length band

pub mod chunk;
pub mod compliance;
pub mod shot;

// Re-export common types
pub use chunk::{normalize_text, tail_excerpt, Chunk, ChunkSplitter, DEFAULT_CONTEXT_CHARS};
pub use compliance::{check_compliance, ComplianceReport, MAX_SHOT_CHARS, MIN_SHOT_CHARS};
pub use shot::{render_shot_list, Shot};
