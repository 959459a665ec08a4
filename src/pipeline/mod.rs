//! Preparation pipeline
//!
//! Wizard steps pass an explicit, serializable [`PipelineState`] by value:
//! each stage consumes the previous state and produces a new one, with no
//! ambient storage in between. A stage's output supersedes the previous
//! sample entirely — a stale result from a superseded run is discarded, not
//! merged.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sample::TabularSample;
use crate::scaling::{scale, ScalingMethod};

/// The state handed from one wizard step to the next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineState {
    /// The current working sample (original plus any derived columns)
    pub sample: TabularSample,
    /// Names of the stages applied so far, in order
    pub history: Vec<String>,
}

impl PipelineState {
    pub fn new(sample: TabularSample) -> Self {
        PipelineState {
            sample,
            history: Vec::new(),
        }
    }
}

/// A single preparation step
///
/// Stages are stateless: `apply` is a pure function of the input sample.
pub trait Stage {
    /// Name recorded in the pipeline history
    fn name(&self) -> &str;

    /// Produce the next sample from the current one
    fn apply(&self, sample: &TabularSample) -> Result<TabularSample>;
}

/// The feature-scaling step, wrapping [`crate::scaling::scale`]
pub struct ScalingStage {
    methods: Vec<ScalingMethod>,
    target_columns: Vec<String>,
}

impl ScalingStage {
    pub fn new(methods: Vec<ScalingMethod>, target_columns: Vec<String>) -> Self {
        ScalingStage {
            methods,
            target_columns,
        }
    }
}

impl Stage for ScalingStage {
    fn name(&self) -> &str {
        "scaling"
    }

    fn apply(&self, sample: &TabularSample) -> Result<TabularSample> {
        scale(sample, &self.methods, &self.target_columns)
    }
}

/// An ordered chain of stages
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline { stages: Vec::new() }
    }

    /// Append a stage to the chain
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run every stage in order, threading the state through by value
    pub fn run(&self, state: PipelineState) -> Result<PipelineState> {
        let mut sample = state.sample;
        let mut history = state.history;

        for stage in &self.stages {
            sample = stage.apply(&sample)?;
            history.push(stage.name().to_string());
        }

        Ok(PipelineState { sample, history })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
