use super::Processor;
use crate::{
    codec::ImageCodec,
    common::*,
    config::{LandmarkFrame, PreprocessorConfig},
    data::{NormalizedSample, RawSample},
    error::DataError,
};

/// Crops the face, resizes it to a square, rescales the landmarks and normalizes pixel intensities.
#[derive(Debug, Clone)]
pub struct Normalize {
    image_size: u32,
    epsilon: f64,
    rounding: RoundingMode,
    landmark_frame: LandmarkFrame,
    codec: Arc<dyn ImageCodec>,
}

impl Normalize {
    pub fn new(config: &PreprocessorConfig, codec: Arc<dyn ImageCodec>) -> Result<Self> {
        let PreprocessorConfig {
            image_size,
            epsilon,
            rounding,
            landmark_frame,
            ..
        } = *config;
        let image_size = u32::try_from(image_size.get())
            .with_context(|| format!("image_size {} is too large", image_size))?;
        ensure!(epsilon.raw() >= 0.0, "epsilon must be non-negative");

        Ok(Self {
            image_size,
            epsilon: epsilon.raw(),
            rounding,
            landmark_frame,
            codec,
        })
    }

    pub fn image_size(&self) -> u32 {
        self.image_size
    }
}

impl Processor<RawSample> for Normalize {
    type Output = NormalizedSample;

    fn process(&self, input: RawSample) -> Result<Self::Output> {
        let Self {
            image_size,
            epsilon,
            rounding,
            landmark_frame,
            ..
        } = *self;
        let RawSample {
            image,
            rect: xyxy,
            landmarks,
        } = input;

        let rect = crop_rect(xyxy).ok_or(DataError::DegenerateRect { rect: xyxy })?;

        let cropped = crop_image(&image, &rect)?;
        let resized = self.codec.resize(&cropped, image_size, image_size);

        let landmarks = {
            let rect = rect.cast::<f64>();
            let size = HW::square(image_size as f64)?;
            let transform = match landmark_frame {
                LandmarkFrame::Image => Transform::from_crop(&rect, &size),
                LandmarkFrame::Crop => Transform::scale_of_crop(&rect, &size),
            };
            (&transform * &landmarks.cast::<f64>())
                .round(rounding)
                .cast::<f32>()
        };

        let image = channel_norm(&resized, epsilon)?;

        Ok(NormalizedSample { image, landmarks })
    }
}

/// Build the crop rectangle from `[x0, y0, x1, y1]` values.
///
/// Returns `None` unless both sides are positive and fit in a `u32`.
fn crop_rect(xyxy: [i64; 4]) -> Option<TLBR<i64>> {
    let [x0, y0, x1, y1] = xyxy;
    let max_side = u32::MAX as i64;
    let h = y1.checked_sub(y0)?;
    let w = x1.checked_sub(x0)?;
    if h > max_side || w > max_side {
        return None;
    }
    TLBR::try_from_xyxy(xyxy)
        .ok()
        .filter(|rect| rect.is_non_empty())
}

/// Crop the image to the rectangle.
///
/// The rectangle may exceed the image boundary. Pixels outside the image are filled with zeros.
pub fn crop_image(image: &GrayImage, rect: &TLBR<i64>) -> Result<GrayImage> {
    let [crop_h, crop_w] = rect.hw();
    let mut output = GrayImage::new(u32::try_from(crop_w)?, u32::try_from(crop_h)?);

    let (image_w, image_h) = image.dimensions();
    let bounds = TLBR::from_tlhw([0, 0, image_h as i64, image_w as i64]);

    if let Some(overlap) = rect.intersect_with(&bounds) {
        let [t, l, h, w] = overlap.tlhw();
        let patch =
            image::imageops::crop_imm(image, l as u32, t as u32, w as u32, h as u32).to_image();
        image::imageops::replace(
            &mut output,
            &patch,
            (l - rect.l()) as u32,
            (t - rect.t()) as u32,
        );
    }

    Ok(output)
}

/// Standardize pixel intensities to zero mean and unit variance.
///
/// `epsilon` is added to the standard deviation so that constant images do not divide by zero.
pub fn channel_norm(image: &GrayImage, epsilon: f64) -> Result<Array2<f32>> {
    let (width, height) = image.dimensions();
    let pixels: Vec<f64> = image.as_raw().iter().map(|&value| value as f64).collect();
    let pixels = Array2::from_shape_vec((height as usize, width as usize), pixels)?;

    let mean = pixels
        .mean()
        .ok_or_else(|| format_err!("cannot normalize an empty image"))?;
    let std = pixels.std(0.0);
    let normalized = pixels.mapv(|value| ((value - mean) / (std + epsilon)) as f32);

    Ok(normalized)
}
