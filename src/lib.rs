pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::CliArgs, Settings};
pub use crate::core::{ProcessStatus, ProcessedResult, Record};
pub use crate::domain::model::OperationResult;
pub use crate::utils::error::{EtlError, Result};
