use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::definition::error::DefinitionError;

/// The cloud or hypervisor platform a stemcell is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Infrastructure {
    Aws,
    OpenStack,
    Vsphere,
    Vcloud,
}

impl Infrastructure {
    /// Every supported infrastructure, in declaration order.
    pub const ALL: [Infrastructure; 4] = [
        Infrastructure::Aws,
        Infrastructure::OpenStack,
        Infrastructure::Vsphere,
        Infrastructure::Vcloud,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Infrastructure::Aws => "aws",
            Infrastructure::OpenStack => "openstack",
            Infrastructure::Vsphere => "vsphere",
            Infrastructure::Vcloud => "vcloud",
        }
    }
}

impl fmt::Display for Infrastructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Infrastructure {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|infrastructure| infrastructure.name() == wanted)
            .ok_or_else(|| DefinitionError::UnsupportedInfrastructure(s.to_string()))
    }
}
