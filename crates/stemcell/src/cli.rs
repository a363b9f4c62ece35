use clap::ValueEnum;
use serde::Serialize;
use stemcell_core::{Definition, StageId, StagePipeline};

/// How results are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One stage id per line
    Text,
    /// JSON documents
    Json,
}

#[derive(Serialize)]
struct PipelineView<'a> {
    name: &'a str,
    description: &'a str,
    stages: &'a [StageId],
}

impl<'a> From<&'a StagePipeline> for PipelineView<'a> {
    fn from(pipeline: &'a StagePipeline) -> Self {
        Self {
            name: pipeline.name(),
            description: pipeline.description(),
            stages: pipeline.stages(),
        }
    }
}

#[derive(Serialize)]
struct MatrixRow<'a> {
    #[serde(flatten)]
    definition: &'a Definition,
    stages: &'a [StageId],
}

/// Renders query results for the command line.
#[derive(Debug)]
pub struct CliRenderer {
    format: OutputFormat,
}

impl CliRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn stages(&self, stages: &[StageId]) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => Ok(lines(stages)),
            OutputFormat::Json => serde_json::to_string_pretty(stages),
        }
    }

    pub fn pipelines(&self, pipelines: &[StagePipeline]) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => Ok(pipelines
                .iter()
                .map(|pipeline| format!("# {}: {}\n{}", pipeline.name(), pipeline.description(), lines(pipeline.stages())))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                let views: Vec<PipelineView<'_>> = pipelines.iter().map(PipelineView::from).collect();
                serde_json::to_string_pretty(&views)
            }
        }
    }

    pub fn matrix(&self, rows: &[(Definition, Vec<StageId>)]) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => Ok(rows
                .iter()
                .map(|(definition, stages)| format!("{}: {}", definition, stages.join(" ")))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                let rows: Vec<MatrixRow<'_>> = rows
                    .iter()
                    .map(|(definition, stages)| MatrixRow { definition, stages })
                    .collect();
                serde_json::to_string_pretty(&rows)
            }
        }
    }
}

fn lines(stages: &[StageId]) -> String {
    stages.join("\n")
}
