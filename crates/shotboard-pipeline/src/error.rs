//! Pipeline error types.
//!
//! Chunk-level annotation failures never surface as errors: the driver
//! converts them into a truncated, well-formed partial result. These
//! variants cover the setup and IO edges around the pipeline run.

use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Annotator error: {0}")]
    Annotator(#[from] shotboard_annotator::AnnotatorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
