pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{OperationResult, ProcessStatus, ProcessedResult, Record};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
