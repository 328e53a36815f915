//! Client for the external shot annotation service.
//!
//! The annotation service is an LLM-style chat completion endpoint that
//! segments transcript chunks into numbered shot lines. Its output is
//! non-deterministic and untrusted; this crate only covers the wire
//! contract (request composition, transport, response unwrapping). All
//! repair of the returned text happens downstream in the pipeline.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{AnnotatorClient, AnnotatorConfig};
pub use error::{AnnotatorError, AnnotatorResult};
pub use prompt::{build_user_content, SEGMENTATION_INSTRUCTION};
pub use types::SegmentRequest;
