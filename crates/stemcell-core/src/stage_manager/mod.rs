//! # Stemcell Stage Manager
//!
//! Decides which named build stages produce a stemcell, and in which order.
//!
//! - [`groups`] holds the constant, ordered stage fragments.
//! - [`StageCollection`] combines those fragments for a given
//!   [`Definition`](crate::definition::Definition).
//! - [`StagePipeline`] is the ordered list handed to the external executor.
//!
//! Nothing here executes a stage; the executor looks each id up and runs it.
pub mod collection;
pub mod error;
pub mod groups;
pub mod pipeline;

/// Opaque name of one executable build stage.
pub type StageId = &'static str;

// Re-export important types
pub use collection::{StageCollection, StageGroupKind};
pub use error::StageSystemError;
pub use groups::StageGroup;
pub use pipeline::{PipelineBuilder, StagePipeline};

// Test module declaration
#[cfg(test)]
mod tests;
