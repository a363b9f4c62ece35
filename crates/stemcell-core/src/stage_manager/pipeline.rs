use crate::kernel::error::Result;
use crate::stage_manager::StageId;
use crate::stage_manager::error::StageSystemError;
use crate::stage_manager::groups::StageGroup;

/// An ordered list of stage ids handed to the build executor.
///
/// Stages run in insertion order. A stage id may appear at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePipeline {
    /// Name of the pipeline
    name: String,
    /// Description of what this pipeline does
    description: String,
    /// Ordered list of stage IDs to execute
    stages: Vec<StageId>,
}

impl StagePipeline {
    /// Create a new, empty stage pipeline
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            stages: Vec::new(),
        }
    }

    /// Create a pipeline holding exactly the stages of a group
    pub fn from_group(group: &StageGroup) -> Result<Self> {
        let mut pipeline = Self::new(group.name, group.description.unwrap_or_default());
        pipeline.add_stages(group.stages)?;
        Ok(pipeline)
    }

    /// Append a stage. Fails if the stage is already in the pipeline.
    pub fn add_stage(&mut self, stage_id: StageId) -> Result<()> {
        if self.stages.contains(&stage_id) {
            return Err(StageSystemError::DuplicateStage {
                pipeline_name: self.name.clone(),
                stage_id: stage_id.to_string(),
            }
            .into());
        }
        self.stages.push(stage_id);
        Ok(())
    }

    /// Append several stages, preserving their order
    pub fn add_stages(&mut self, stage_ids: &[StageId]) -> Result<()> {
        for &stage_id in stage_ids {
            self.add_stage(stage_id)?;
        }
        Ok(())
    }

    /// Check that the pipeline would actually run something.
    pub fn validate(&self) -> Result<()> {
        if self.stages.is_empty() {
            return Err(StageSystemError::EmptyPipeline {
                pipeline_name: self.name.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Get the name of the pipeline
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description of the pipeline
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the stages in the pipeline
    pub fn stages(&self) -> &[StageId] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Pipeline builder for simplified pipeline creation
pub struct PipelineBuilder {
    /// The pipeline being built
    pipeline: StagePipeline,
}

impl PipelineBuilder {
    /// Start building a new pipeline
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            pipeline: StagePipeline::new(name, description),
        }
    }

    /// Append the stages of a group
    pub fn add_group(self, group: &StageGroup) -> Result<Self> {
        self.add_stages(group.stages)
    }

    /// Append a list of stages
    pub fn add_stages(mut self, stage_ids: &[StageId]) -> Result<Self> {
        self.pipeline.add_stages(stage_ids)?;
        Ok(self)
    }

    /// Finish the pipeline, rejecting an empty one.
    pub fn build(self) -> Result<StagePipeline> {
        self.pipeline.validate()?;
        Ok(self.pipeline)
    }
}
