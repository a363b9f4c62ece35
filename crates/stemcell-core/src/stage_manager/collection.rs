use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::definition::{Agent, Definition, Infrastructure, OperatingSystem};
use crate::kernel::error::Result;
use crate::stage_manager::StageId;
use crate::stage_manager::error::StageSystemError;
use crate::stage_manager::groups::{self, StageGroup};
use crate::stage_manager::pipeline::{PipelineBuilder, StagePipeline};

/// Name of the pipeline that builds the base operating system image.
pub const OS_IMAGE_PIPELINE: &str = "os_image";
/// Name of the pipeline that turns a base OS image into a stemcell.
pub const STEMCELL_PIPELINE: &str = "stemcell";

/// The four stage lists a definition can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageGroupKind {
    OperatingSystem,
    ExtractOperatingSystem,
    Agent,
    Infrastructure,
}

impl StageGroupKind {
    pub const ALL: [StageGroupKind; 4] = [
        StageGroupKind::OperatingSystem,
        StageGroupKind::ExtractOperatingSystem,
        StageGroupKind::Agent,
        StageGroupKind::Infrastructure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StageGroupKind::OperatingSystem => "operating-system",
            StageGroupKind::ExtractOperatingSystem => "extract-operating-system",
            StageGroupKind::Agent => "agent",
            StageGroupKind::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for StageGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StageGroupKind {
    type Err = StageSystemError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| StageSystemError::UnknownStageGroup { name: s.to_string() })
    }
}

/// Selects and orders the build stages for a [`Definition`].
///
/// Every query is a pure function of the borrowed definition and the
/// constant groups in [`groups`]; nothing is cached or mutated.
#[derive(Debug, Clone, Copy)]
pub struct StageCollection<'a> {
    definition: &'a Definition,
}

impl<'a> StageCollection<'a> {
    pub fn new(definition: &'a Definition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &'a Definition {
        self.definition
    }

    /// OS-specific base stages followed by the common OS stages.
    pub fn operating_system_stages(&self) -> Vec<StageId> {
        let base = match self.definition.operating_system() {
            OperatingSystem::Centos => &groups::CENTOS_OS_STAGES,
            OperatingSystem::Ubuntu => &groups::UBUNTU_OS_STAGES,
        };
        debug!("{}: operating system stages from '{}'", self.definition, base.name);
        concat(&[base, &groups::COMMON_OS_STAGES])
    }

    /// Unpacks a pre-fetched base OS image. Independent of the definition.
    pub fn extract_operating_system_stages(&self) -> Vec<StageId> {
        groups::EXTRACT_OS_STAGES.stages.to_vec()
    }

    /// Keyed on the agent alone.
    pub fn agent_stages(&self) -> Vec<StageId> {
        let group = match self.definition.agent() {
            Agent::Go => &groups::GO_AGENT_STAGES,
            Agent::Ruby => &groups::RUBY_AGENT_STAGES,
        };
        debug!("{}: agent stages from '{}'", self.definition, group.name);
        group.stages.to_vec()
    }

    /// Dispatches on infrastructure, then on whether the guest is CentOS.
    pub fn infrastructure_stages(&self) -> Vec<StageId> {
        let group = self.infrastructure_group(self.definition.infrastructure());
        debug!("{}: infrastructure stages from '{}'", self.definition, group.name);
        group.stages.to_vec()
    }

    /// OpenStack stages for this definition's operating system, whatever
    /// its infrastructure.
    pub fn openstack_stages(&self) -> Vec<StageId> {
        self.infrastructure_group(Infrastructure::OpenStack).stages.to_vec()
    }

    /// vSphere stages for this definition's operating system.
    pub fn vsphere_stages(&self) -> Vec<StageId> {
        self.infrastructure_group(Infrastructure::Vsphere).stages.to_vec()
    }

    /// vCloud stages for this definition's operating system.
    pub fn vcloud_stages(&self) -> Vec<StageId> {
        self.infrastructure_group(Infrastructure::Vcloud).stages.to_vec()
    }

    pub fn stages_for(&self, kind: StageGroupKind) -> Vec<StageId> {
        match kind {
            StageGroupKind::OperatingSystem => self.operating_system_stages(),
            StageGroupKind::ExtractOperatingSystem => self.extract_operating_system_stages(),
            StageGroupKind::Agent => self.agent_stages(),
            StageGroupKind::Infrastructure => self.infrastructure_stages(),
        }
    }

    /// Stages that build the base OS image.
    pub fn operating_system_image_pipeline(&self) -> Result<StagePipeline> {
        PipelineBuilder::new(
            OS_IMAGE_PIPELINE,
            &format!("Build the {} base image", self.definition.operating_system()),
        )
        .add_stages(&self.operating_system_stages())?
        .build()
    }

    /// Stages that turn an extracted base OS image into a stemcell:
    /// extraction, then the agent, then the infrastructure tail.
    pub fn stemcell_pipeline(&self) -> Result<StagePipeline> {
        PipelineBuilder::new(
            STEMCELL_PIPELINE,
            &format!("Build the {} stemcell", self.definition),
        )
        .add_stages(&self.extract_operating_system_stages())?
        .add_stages(&self.agent_stages())?
        .add_stages(&self.infrastructure_stages())?
        .build()
    }

    // AWS has no CentOS-specific list.
    fn infrastructure_group(&self, infrastructure: Infrastructure) -> &'static StageGroup {
        let centos = self.definition.operating_system().is_centos();
        match (infrastructure, centos) {
            (Infrastructure::Aws, _) => &groups::AWS_STAGES,
            (Infrastructure::OpenStack, true) => &groups::CENTOS_OPENSTACK_STAGES,
            (Infrastructure::OpenStack, false) => &groups::DEFAULT_OPENSTACK_STAGES,
            (Infrastructure::Vsphere, true) => &groups::CENTOS_VSPHERE_STAGES,
            (Infrastructure::Vsphere, false) => &groups::DEFAULT_VSPHERE_STAGES,
            (Infrastructure::Vcloud, true) => &groups::CENTOS_VCLOUD_STAGES,
            (Infrastructure::Vcloud, false) => &groups::DEFAULT_VCLOUD_STAGES,
        }
    }
}

fn concat(parts: &[&StageGroup]) -> Vec<StageId> {
    parts.iter().flat_map(|group| group.stages.iter().copied()).collect()
}
