//! # Stemcell Definition
//!
//! The target descriptor for a stemcell build: which infrastructure the image
//! is for, which guest operating system it carries, and which agent is
//! installed into it.
//!
//! A [`Definition`] is an immutable value. It is created by the caller (from
//! CLI flags or a definition file, see [`crate::storage`]) and handed by
//! reference to the [`StageCollection`](crate::stage_manager::StageCollection)
//! for the duration of a query.
pub mod agent;
pub mod error;
pub mod infrastructure;
pub mod operating_system;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use agent::Agent;
pub use error::DefinitionError;
pub use infrastructure::Infrastructure;
pub use operating_system::OperatingSystem;

/// A fully resolved (infrastructure, operating system, agent) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Definition {
    infrastructure: Infrastructure,
    operating_system: OperatingSystem,
    agent: Agent,
}

impl Definition {
    pub fn new(infrastructure: Infrastructure, operating_system: OperatingSystem, agent: Agent) -> Self {
        Self {
            infrastructure,
            operating_system,
            agent,
        }
    }

    /// Build a definition from the canonical names of each axis.
    ///
    /// The first axis that fails to parse determines the error.
    pub fn for_names(
        infrastructure_name: &str,
        operating_system_name: &str,
        agent_name: &str,
    ) -> Result<Self, DefinitionError> {
        Ok(Self::new(
            infrastructure_name.parse()?,
            operating_system_name.parse()?,
            agent_name.parse()?,
        ))
    }

    /// Every supported combination, infrastructure-major.
    pub fn all() -> Vec<Definition> {
        let mut definitions = Vec::with_capacity(
            Infrastructure::ALL.len() * OperatingSystem::ALL.len() * Agent::ALL.len(),
        );
        for infrastructure in Infrastructure::ALL {
            for operating_system in OperatingSystem::ALL {
                for agent in Agent::ALL {
                    definitions.push(Self::new(infrastructure, operating_system, agent));
                }
            }
        }
        definitions
    }

    pub fn infrastructure(&self) -> Infrastructure {
        self.infrastructure
    }

    pub fn operating_system(&self) -> OperatingSystem {
        self.operating_system
    }

    pub fn agent(&self) -> Agent {
        self.agent
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.infrastructure, self.operating_system, self.agent)
    }
}
