use crate::{common::*, data::Sample};
use tch::Tensor;

/// The sample converted to libtorch tensors.
#[derive(Debug)]
pub struct TchSample {
    /// Float tensor in `[1, H, W]` shape.
    pub image: Tensor,
    /// Float tensor in `[2N]` shape.
    pub landmarks: Tensor,
}

impl Sample {
    pub fn to_tch(&self) -> Result<TchSample> {
        let (channels, height, width) = self.image.dim();
        let pixels = self
            .image
            .as_slice()
            .ok_or_else(|| format_err!("the image array is not contiguous"))?;
        let landmarks = self
            .landmarks
            .as_slice()
            .ok_or_else(|| format_err!("the landmark array is not contiguous"))?;

        let image =
            Tensor::of_slice(pixels).view([channels as i64, height as i64, width as i64]);
        let landmarks = Tensor::of_slice(landmarks);

        Ok(TchSample { image, landmarks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_to_tch() {
        let sample = Sample {
            image: Array3::from_elem((1, 4, 6), 0.5),
            landmarks: Array1::from(vec![1.0, 2.0]),
        };
        let TchSample { image, landmarks } = sample.to_tch().unwrap();
        assert_eq!(image.size(), vec![1, 4, 6]);
        assert_eq!(landmarks.size(), vec![2]);
        assert_eq!(Vec::<f32>::from(&landmarks), vec![1.0, 2.0]);
    }
}
