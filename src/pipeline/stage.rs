//! Pipeline stage abstractions for composable aggregation workflows.
//!
//! This module defines the core `Stage` trait that enables type-safe composition
//! of aggregation steps. Stages are either pure transformations or fallible
//! steps such as input validation.

use crate::errors::Error;
use std::marker::PhantomData;

/// A pipeline stage that transforms data.
///
/// Each stage has:
/// - An input type (what data it expects)
/// - An output type (what data it produces)
/// - An error type (how it can fail)
///
/// [`PipelineBuilder::stage`](super::PipelineBuilder::stage) only accepts a
/// stage whose `Input` is the previous stage's `Output`.
pub trait Stage {
    type Input;
    type Output;
    type Error;

    /// Execute this stage with the given input.
    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Get the stage name for progress reporting.
    fn name(&self) -> &str;
}

/// A pure stage that performs no I/O.
///
/// # Example
///
/// ```rust
/// use taskpoints::pipeline::{PureStage, Stage};
///
/// let stage = PureStage::new("Double", |x: u64| x * 2);
/// assert_eq!(stage.execute(21).unwrap(), 42);
/// ```
pub struct PureStage<F, I, O> {
    name: String,
    func: F,
    _phantom: PhantomData<fn(I) -> O>,
}

impl<F, I, O> PureStage<F, I, O>
where
    F: Fn(I) -> O,
{
    /// Create a new pure stage with a name and transformation function.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O> Stage for PureStage<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = std::convert::Infallible;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.func)(input))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A fallible stage that can fail with an error.
///
/// The source-driven pipeline loads and validates its records in one of
/// these, so a rejected document stops the run before any aggregation.
pub struct FallibleStage<F, I, O, E> {
    name: String,
    func: F,
    _phantom: PhantomData<fn(I) -> Result<O, E>>,
}

impl<F, I, O, E> FallibleStage<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    /// Create a new fallible stage with a name and function.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O, E> Stage for FallibleStage<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.func)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Type-erased stage for dynamic dispatch.
///
/// Lets stages of different types live in one `Vec` inside the builder.
pub(crate) trait AnyStage: Send + Sync {
    fn execute_any(
        &self,
        input: Box<dyn std::any::Any>,
    ) -> Result<Box<dyn std::any::Any>, Error>;
    fn name(&self) -> &str;
}

impl<S> AnyStage for S
where
    S: Stage + Send + Sync,
    S::Input: 'static,
    S::Output: 'static,
    S::Error: Into<Error>,
{
    fn execute_any(
        &self,
        input: Box<dyn std::any::Any>,
    ) -> Result<Box<dyn std::any::Any>, Error> {
        let typed_input = input.downcast::<S::Input>().map_err(|_| {
            Error::pipeline(Stage::name(self), "Type mismatch in pipeline stage input")
        })?;

        let output = self.execute(*typed_input).map_err(Into::<Error>::into)?;
        Ok(Box::new(output))
    }

    fn name(&self) -> &str {
        Stage::name(self)
    }
}
