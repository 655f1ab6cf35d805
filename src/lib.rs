pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

// Domain data shapes shared across layers
pub mod domain;

pub use config::Config;
pub use error::{PipelineError, Result};
pub use pipeline::{CleanBatch, ReviewPipeline, ReviewSource};
