//! # Stemcell Core Kernel
//!
//! Crate-wide plumbing shared by every subsystem:
//!
//! - **Constants**: application name and environment variable names, in `constants`.
//! - **Error Handling**: the aggregated [`Error`](error::Error) type and the
//!   `Result` alias, in `error`.
pub mod constants;
pub mod error;

pub use error::{Error, Result};
