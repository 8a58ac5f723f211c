use super::Processor;
use crate::{
    common::*,
    data::{NormalizedSample, Sample},
};

/// Packs a normalized sample into channel-first arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToTensor;

impl Processor<NormalizedSample> for ToTensor {
    type Output = Sample;

    fn process(&self, input: NormalizedSample) -> Result<Self::Output> {
        let NormalizedSample { image, landmarks } = input;

        // [H, W] -> [C, H, W]
        let image = image.insert_axis(Axis(0));
        let landmarks = Array1::from(landmarks.into_flat());

        Ok(Sample { image, landmarks })
    }
}
