//! # Stemcell Stage Manager Errors
//!
//! Defines error types specific to stage selection and pipeline assembly.
//!
//! This module includes [`StageSystemError`], covering malformed pipelines
//! (duplicate or missing stages) and unknown stage group names.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageSystemError {
    #[error("Pipeline '{pipeline_name}': stage '{stage_id}' is already part of the pipeline")]
    DuplicateStage { pipeline_name: String, stage_id: String },

    #[error("Pipeline '{pipeline_name}' has no stages; running it would silently skip the build")]
    EmptyPipeline { pipeline_name: String },

    #[error("Unknown stage group '{name}' (expected one of: operating-system, extract-operating-system, agent, infrastructure)")]
    UnknownStageGroup { name: String },
}
