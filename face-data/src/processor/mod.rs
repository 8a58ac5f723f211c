//! Sample preprocessing steps.

mod normalize;
mod to_tensor;

pub use normalize::*;
pub use to_tensor::*;

use crate::{
    common::*,
    data::{RawSample, Sample},
};

/// A step of the data transformation pipeline.
pub trait Processor<In> {
    type Output;

    fn process(&self, input: In) -> Result<Self::Output>;
}

/// Extension methods to chain processors.
pub trait ProcessorExt<In>
where
    Self: Processor<In> + Sized,
{
    /// Feed the output of this processor into `next`.
    fn then<P>(self, next: P) -> Compose<Self, P>
    where
        P: Processor<Self::Output>,
    {
        Compose { first: self, second: next }
    }
}

impl<In, T> ProcessorExt<In> for T where T: Processor<In> {}

/// Two processors applied in order.
#[derive(Debug, Clone)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<In, A, B> Processor<In> for Compose<A, B>
where
    A: Processor<In>,
    B: Processor<A::Output>,
{
    type Output = B::Output;

    fn process(&self, input: In) -> Result<Self::Output> {
        let intermediate = self.first.process(input)?;
        self.second.process(intermediate)
    }
}

/// The complete transformation from a decoded image to a training sample.
pub trait SampleProcessor
where
    Self: Processor<RawSample, Output = Sample> + Debug + Send + Sync,
{
}

impl<T> SampleProcessor for T where T: Processor<RawSample, Output = Sample> + Debug + Send + Sync {}

/// The pipeline used by both training and testing phases.
pub type DefaultPipeline = Compose<Normalize, ToTensor>;
