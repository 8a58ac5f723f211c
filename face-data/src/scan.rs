//! Concurrent validation of every sample in a dataset.

use crate::{common::*, data::FaceLandmarksDataset};

/// The summary of a dataset scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub num_samples: usize,
    pub num_failures: usize,
    pub failures: Vec<ScanFailure>,
    /// The minimum and maximum of all rescaled landmark coordinates.
    pub landmark_range: Option<(f32, f32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFailure {
    pub index: usize,
    pub message: String,
}

/// Load every sample of the dataset in parallel and collect failures.
pub async fn scan_dataset(dataset: Arc<FaceLandmarksDataset>) -> ScanReport {
    let num_samples = dataset.len();
    info!("scanning {} samples of phase '{}'", num_samples, dataset.phase());

    let outcomes: Vec<_> = stream::iter(0..num_samples)
        .par_map(None, move |index| {
            let dataset = dataset.clone();
            move || {
                let outcome = dataset
                    .get(index)
                    .map(|sample| sample.landmarks.iter().copied().minmax().into_option());
                (index, outcome)
            }
        })
        .collect()
        .await;

    let mut failures = vec![];
    let mut landmark_range: Option<(f32, f32)> = None;

    for (index, outcome) in outcomes {
        match outcome {
            Ok(Some((min, max))) => {
                landmark_range = Some(match landmark_range {
                    Some((lo, hi)) => (lo.min(min), hi.max(max)),
                    None => (min, max),
                });
            }
            Ok(None) => {}
            Err(err) => {
                let message = format!("{:#}", err);
                warn!("sample {} failed: {}", index, message);
                failures.push(ScanFailure { index, message });
            }
        }
    }

    ScanReport {
        num_samples,
        num_failures: failures.len(),
        failures,
        landmark_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::{ImageCodec, MemoryCodec},
        config::Config,
        data::{build_pipeline, Phase},
    };

    #[tokio::test]
    async fn scan_reports_failures() {
        let mut codec = MemoryCodec::default();
        codec.insert("a.png", GrayImage::from_pixel(64, 64, Luma([10])));
        let codec: Arc<dyn ImageCodec> = Arc::new(codec);

        let lines = vec![
            "a.png 0 0 32 32 0 0 16 8".to_string(),
            "a.png 0 0 32".to_string(),
            "b.png 0 0 32 32".to_string(),
            "a.png 8 8 40 40 40 40".to_string(),
        ];
        let transform = build_pipeline(&Config::default().preprocessor, codec.clone()).unwrap();
        let dataset =
            FaceLandmarksDataset::new(lines, Phase::test(), codec, Arc::new(transform));

        let report = scan_dataset(Arc::new(dataset)).await;
        assert_eq!(report.num_samples, 4);
        assert_eq!(report.num_failures, 2);
        assert_eq!(
            report.failures.iter().map(|failure| failure.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(report.landmark_range, Some((0.0, 112.0)));
    }
}
