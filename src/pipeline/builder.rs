//! Pipeline builder for composing aggregation stages.
//!
//! This module provides a type-safe fluent API for building pipelines.

use super::stage::{AnyStage, Stage};
use crate::errors::Error;
use std::any::Any;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Builder for constructing pipelines.
///
/// The builder uses phantom types to track the output type of the pipeline
/// at compile time, enabling type-safe composition.
///
/// # Example
///
/// ```rust
/// use taskpoints::pipeline::{PipelineBuilder, PureStage};
///
/// let pipeline = PipelineBuilder::new()
///     .stage(PureStage::new("Start", |()| vec![5u64, 13, 8]))
///     .stage(PureStage::new("Sum", |points: Vec<u64>| points.iter().sum::<u64>()))
///     .build();
///
/// assert_eq!(pipeline.execute().unwrap(), 26);
/// ```
pub struct PipelineBuilder<T> {
    stages: Vec<Box<dyn AnyStage>>,
    progress_enabled: bool,
    _phantom: PhantomData<fn() -> T>,
}

impl PipelineBuilder<()> {
    /// Create a new empty pipeline builder.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            progress_enabled: false,
            _phantom: PhantomData,
        }
    }
}

impl Default for PipelineBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PipelineBuilder<T> {
    /// Add a stage to the pipeline.
    ///
    /// The stage's input type must match the current pipeline output type.
    /// Returns a new builder with the stage's output type.
    pub fn stage<S>(mut self, stage: S) -> PipelineBuilder<S::Output>
    where
        S: Stage<Input = T> + Send + Sync + 'static,
        S::Input: 'static,
        S::Output: 'static,
        S::Error: Into<Error>,
    {
        self.stages.push(Box::new(stage));
        PipelineBuilder {
            stages: self.stages,
            progress_enabled: self.progress_enabled,
            _phantom: PhantomData,
        }
    }

    /// Enable progress reporting for this pipeline.
    pub fn with_progress(mut self) -> Self {
        self.progress_enabled = true;
        self
    }

    /// Build the final pipeline ready for execution.
    pub fn build(self) -> BuiltPipeline<T> {
        BuiltPipeline {
            stages: self.stages,
            progress_enabled: self.progress_enabled,
            _phantom: PhantomData,
        }
    }
}

/// A built pipeline ready for execution.
///
/// The pipeline can be executed multiple times; every run starts from `()`.
pub struct BuiltPipeline<T> {
    stages: Vec<Box<dyn AnyStage>>,
    progress_enabled: bool,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> BuiltPipeline<T> {
    /// Execute the pipeline.
    ///
    /// The pipeline starts with a unit value `()` and threads data through
    /// each stage sequentially.
    ///
    /// # Errors
    ///
    /// Returns the first stage error wrapped in [`Error::Stage`], or
    /// [`Error::Pipeline`] if a value has an unexpected type.
    pub fn execute(&self) -> Result<T, Error> {
        self.execute_with_timing().map(|(result, _)| result)
    }

    /// Execute the pipeline and collect timing information for each stage.
    ///
    /// Returns both the final result and timing data for performance analysis.
    ///
    /// # Errors
    ///
    /// Same as [`BuiltPipeline::execute`].
    pub fn execute_with_timing(&self) -> Result<(T, Vec<StageTiming>), Error> {
        let mut data: Box<dyn Any> = Box::new(());
        let mut timings = Vec::with_capacity(self.stages.len());

        if self.progress_enabled {
            log::info!("Pipeline: {} stages", self.stages.len());
        }

        for (i, stage) in self.stages.iter().enumerate() {
            let start = Instant::now();

            if self.progress_enabled {
                log::info!("Stage {}/{}: {}", i + 1, self.stages.len(), stage.name());
            }

            data = stage.execute_any(data).map_err(|e| match e {
                Error::Pipeline { .. } | Error::Stage { .. } => e,
                other => Error::stage(stage.name(), other),
            })?;

            timings.push(StageTiming {
                name: stage.name().to_string(),
                duration: start.elapsed(),
            });
        }

        let result = data
            .downcast::<T>()
            .map(|b| *b)
            .map_err(|_| Error::pipeline("output", "Type mismatch in pipeline output"))?;

        Ok((result, timings))
    }

    /// Get the number of stages in this pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

/// Timing information for a pipeline stage.
#[derive(Debug, Clone)]
pub struct StageTiming {
    /// Name of the stage
    pub name: String,

    /// Time taken to execute the stage
    pub duration: Duration,
}

impl StageTiming {
    /// Format the timing as a human-readable string.
    pub fn format(&self) -> String {
        format!("{}: {:.3}ms", self.name, self.duration.as_secs_f64() * 1000.0)
    }
}
