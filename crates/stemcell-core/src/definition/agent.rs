use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::definition::error::DefinitionError;

/// The in-guest management agent implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    #[serde(alias = "go_agent")]
    Go,
    #[serde(alias = "ruby_agent")]
    Ruby,
}

impl Agent {
    pub const ALL: [Agent; 2] = [Agent::Go, Agent::Ruby];

    pub fn name(&self) -> &'static str {
        match self {
            Agent::Go => "go",
            Agent::Ruby => "ruby",
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Agent {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `go_agent` / `ruby_agent` are accepted alongside the short names
        match s.trim().to_lowercase().as_str() {
            "go" | "go_agent" => Ok(Agent::Go),
            "ruby" | "ruby_agent" => Ok(Agent::Ruby),
            _ => Err(DefinitionError::UnsupportedAgent(s.to_string())),
        }
    }
}
