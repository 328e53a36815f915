//! Sequential segmentation pipeline.
//!
//! Drives the chunk-by-chunk conversion of a transcript into a globally
//! numbered shot list: normalize input, split into bounded chunks, call
//! the annotation service once per chunk in order, repair whatever comes
//! back, and report length compliance over the final list.

pub mod config;
pub mod driver;
pub mod error;
pub mod normalize;

pub use config::PipelineConfig;
pub use driver::{run_segmentation, PipelineState, SegmentationOutcome};
pub use error::{PipelineError, PipelineResult};
pub use normalize::normalize_output;
