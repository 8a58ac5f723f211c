use crate::common::*;

/// The decoded image with its face rectangle and landmarks, before preprocessing.
#[derive(Debug, Clone)]
pub struct RawSample {
    pub image: GrayImage,
    /// The face rectangle in `[x0, y0, x1, y1]` order.
    pub rect: [i64; 4],
    pub landmarks: Landmarks<f32>,
}

/// The cropped, resized and normalized image with rescaled landmarks.
#[derive(Debug, Clone)]
pub struct NormalizedSample {
    /// Normalized pixels in `[height, width]` shape.
    pub image: Array2<f32>,
    pub landmarks: Landmarks<f32>,
}

/// The sample accepted by the training loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Image in `[channel, height, width]` shape with a single channel.
    pub image: Array3<f32>,
    /// Flat `[x0, y0, x1, y1, ...]` landmark coordinates in output image pixels.
    pub landmarks: Array1<f32>,
}

impl Sample {
    /// The single-channel image plane.
    pub fn plane(&self) -> ArrayView2<'_, f32> {
        self.image.index_axis(Axis(0), 0)
    }

    pub fn num_points(&self) -> usize {
        self.landmarks.len() / 2
    }
}
