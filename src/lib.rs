//! tabprep — client-side preview engine for tabular dataset preparation
//!
//! The computational core of a dataset-preparation wizard: per-column
//! statistics, multi-method feature scaling over a bounded row sample, the
//! serializable pipeline state passed between steps, and the contract types
//! of the remote preprocessing backend that performs the authoritative
//! full-dataset transform.

pub mod api;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod sample;
pub mod scaling;
pub mod stats;

// Re-export commonly used types
pub use api::{JobStatus, JobUpdate, ScaleRequest, ScaleResponse};
pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineState, ScalingStage, Stage};
pub use sample::{CellValue, TabularSample};
pub use scaling::{scale, ScalingMethod};
pub use stats::{column_stats, ColumnStats};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
