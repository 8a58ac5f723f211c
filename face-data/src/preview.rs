//! Landmark overlay rendering for visual inspection.

use crate::{common::*, data::Sample};

/// Render the sample image with its landmarks drawn as white squares.
///
/// Normalized pixels are min-max scaled back to 0..=255. Landmarks outside the image are skipped.
pub fn draw_landmarks(sample: &Sample, radius: u32) -> Result<GrayImage> {
    let plane = sample.plane();
    let (height, width) = plane.dim();

    let (min, max) = plane
        .iter()
        .copied()
        .minmax()
        .into_option()
        .ok_or_else(|| format_err!("cannot draw an empty image"))?;
    let range = max - min;

    let mut canvas = GrayImage::from_fn(width as u32, height as u32, |x, y| {
        let value = plane[[y as usize, x as usize]];
        let scaled = if range > 0.0 {
            (value - min) / range * 255.0
        } else {
            0.0
        };
        Luma([scaled.round() as u8])
    });

    let radius = radius as i64;
    let (width, height) = (width as i64, height as i64);

    sample
        .landmarks
        .iter()
        .tuples()
        .map(|(&x, &y)| (x as i64, y as i64))
        .filter(|&(cx, cy)| (0..width).contains(&cx) && (0..height).contains(&cy))
        .for_each(|(cx, cy)| {
            let ys = (cy - radius).max(0)..=(cy + radius).min(height - 1);
            let xs = (cx - radius).max(0)..=(cx + radius).min(width - 1);
            ys.cartesian_product(xs).for_each(|(y, x)| {
                canvas.put_pixel(x as u32, y as u32, Luma([255]));
            });
        });

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_landmark_squares() {
        let image = Array3::from_shape_fn((1, 10, 10), |(_, row, _)| row as f32 - 4.5);
        let sample = Sample {
            image,
            landmarks: Array1::from(vec![2.0, 3.0, 9.0, 9.0, 10.0, 0.0]),
        };
        let canvas = draw_landmarks(&sample, 1).unwrap();

        assert_eq!(canvas.dimensions(), (10, 10));
        // the gradient is rescaled to full range
        assert_eq!(canvas.get_pixel(5, 0), &Luma([0]));
        assert_eq!(canvas.get_pixel(5, 9), &Luma([255]));

        for (x, y) in [(1, 2), (2, 3), (3, 4), (8, 8)] {
            assert_eq!(canvas.get_pixel(x, y), &Luma([255]));
        }
        assert_eq!(canvas.get_pixel(0, 3), &Luma([85]));
        // the landmark at x = 10 lies outside the image
        assert_eq!(canvas.get_pixel(9, 0), &Luma([0]));
    }

    #[test]
    fn draw_constant_image() {
        let sample = Sample {
            image: Array3::zeros((1, 4, 4)),
            landmarks: Array1::from(vec![]),
        };
        let canvas = draw_landmarks(&sample, 0).unwrap();
        assert!(canvas.pixels().all(|&Luma([value])| value == 0));
    }
}
