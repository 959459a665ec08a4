//! Backend contract types
//!
//! The wizard delegates the authoritative full-dataset transform to a remote
//! preprocessing backend; the engine in this crate only produces the
//! sample-based preview shown while that job runs. These are the serde
//! shapes of the scaling endpoint and the asynchronous job-status contract.
//! Transport is out of scope.

use serde::{Deserialize, Serialize};

use crate::sample::TabularSample;
use crate::scaling::ScalingMethod;

/// Request body of the backend scaling endpoint
///
/// The backend takes a flat shape: optional fields are present only for the
/// methods that use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleRequest {
    pub dataset_id: String,
    pub method: String,
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_range: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_mean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_std: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<bool>,
}

impl ScaleRequest {
    /// Flatten a configured method into the backend's request shape
    pub fn new(dataset_id: &str, method: &ScalingMethod, columns: Vec<String>) -> Self {
        let mut request = ScaleRequest {
            dataset_id: dataset_id.to_string(),
            method: method.identifier().to_string(),
            columns,
            feature_range: None,
            with_mean: None,
            with_std: None,
            clip: None,
        };
        match *method {
            ScalingMethod::Standard { with_mean, with_std } => {
                request.with_mean = Some(with_mean);
                request.with_std = Some(with_std);
            }
            ScalingMethod::MinMax {
                feature_range,
                clip,
            } => {
                request.feature_range = Some(feature_range);
                request.clip = Some(clip);
            }
            ScalingMethod::MaxAbs | ScalingMethod::L1 | ScalingMethod::L2 => {}
        }
        request
    }
}

/// Response of the scaling endpoint: the transformed dataset's identity and
/// optionally a fresh preview sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleResponse {
    pub dataset_id: String,
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<TabularSample>,
}

/// Lifecycle of an asynchronous backend job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// Whether the job has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// A single status update, polled or streamed while a job runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobUpdate {
    pub job_id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_dataset_id: Option<String>,
}
