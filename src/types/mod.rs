//! Core Types Module
//!
//! Artifact records, the address map, and the unified error type.

pub mod artifact;
pub mod error;

pub use artifact::{
    AddressMap, Argument, DeployedFile, ExecutableFile, File, FileType, ProcessResult,
};
pub use error::{Result, ScoutError};
