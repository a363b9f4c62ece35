use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::definition::error::DefinitionError;

/// The guest operating system family installed into the stemcell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Centos,
    Ubuntu,
}

impl OperatingSystem {
    pub const ALL: [OperatingSystem; 2] = [OperatingSystem::Centos, OperatingSystem::Ubuntu];

    pub fn name(&self) -> &'static str {
        match self {
            OperatingSystem::Centos => "centos",
            OperatingSystem::Ubuntu => "ubuntu",
        }
    }

    /// Several infrastructures ship a dedicated stage list for CentOS guests.
    pub fn is_centos(&self) -> bool {
        matches!(self, OperatingSystem::Centos)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperatingSystem {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "centos" => Ok(OperatingSystem::Centos),
            "ubuntu" => Ok(OperatingSystem::Ubuntu),
            _ => Err(DefinitionError::UnsupportedOperatingSystem(s.to_string())),
        }
    }
}
