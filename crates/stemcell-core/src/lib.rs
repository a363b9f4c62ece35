//! # stemcell-core
//!
//! Decides which build stages produce a stemcell for a given
//! infrastructure, operating system and agent, and in which order.
//!
//! ```
//! use stemcell_core::{Definition, StageCollection};
//!
//! let definition = Definition::for_names("aws", "ubuntu", "go").unwrap();
//! let stages = StageCollection::new(&definition).agent_stages();
//! assert_eq!(stages, ["bosh_ruby", "bosh_go_agent", "bosh_micro_go", "aws_cli"]);
//! ```
pub mod definition;
pub mod kernel;
pub mod stage_manager;
pub mod storage;

// Re-export key public types for easier use by the binary
pub use definition::{Agent, Definition, DefinitionError, Infrastructure, OperatingSystem};
pub use kernel::error::{Error, Result};
pub use stage_manager::{StageCollection, StageGroupKind, StageId, StagePipeline};
pub use storage::{ConfigFormat, DefinitionConfig};
