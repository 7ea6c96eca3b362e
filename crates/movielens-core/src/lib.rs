pub mod config;
pub mod error;
pub mod frame;
pub mod join;
pub mod outputs;
pub mod pipeline;
pub mod timestamps;

pub use config::{ConfigFile, DuplicatePolicy, PipelineConfig};
pub use error::{PipelineError, Result};
pub use pipeline::{merge_tables, run, MergeResult, PipelineSummary};
