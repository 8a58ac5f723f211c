use super::*;
use crate::{
    codec::ImageCodec,
    common::*,
    error::DataError,
    processor::SampleProcessor,
};

/// The generic dataset trait.
pub trait GenericDataset
where
    Self: Debug + Sync + Send,
{
    /// The number of color channels of the output images.
    fn input_channels(&self) -> usize;
}

/// The dataset that can be random accessed.
pub trait RandomAccessDataset
where
    Self: GenericDataset,
{
    /// Get number of records in the dataset.
    fn num_records(&self) -> usize;

    /// Get the nth record in the dataset.
    fn nth(&self, index: usize) -> Result<Sample>;
}

/// The face landmark dataset backed by annotation lines.
///
/// Each access parses the line, decodes the image and runs the transform pipeline.
/// Nothing is cached.
#[derive(Debug, Clone)]
pub struct FaceLandmarksDataset {
    lines: Vec<String>,
    phase: Phase,
    image_root: Option<PathBuf>,
    codec: Arc<dyn ImageCodec>,
    transform: Arc<dyn SampleProcessor>,
}

impl GenericDataset for FaceLandmarksDataset {
    fn input_channels(&self) -> usize {
        1
    }
}

impl RandomAccessDataset for FaceLandmarksDataset {
    fn num_records(&self) -> usize {
        self.len()
    }

    fn nth(&self, index: usize) -> Result<Sample> {
        self.get(index)
    }
}

impl FaceLandmarksDataset {
    pub fn new(
        lines: Vec<String>,
        phase: Phase,
        codec: Arc<dyn ImageCodec>,
        transform: Arc<dyn SampleProcessor>,
    ) -> Self {
        Self {
            lines,
            phase,
            image_root: None,
            codec,
            transform,
        }
    }

    /// Resolve relative image paths against `image_root`.
    pub fn with_image_root(self, image_root: Option<PathBuf>) -> Self {
        Self { image_root, ..self }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Parse the annotation line at `index` without loading the image.
    pub fn record(&self, index: usize) -> Result<AnnotationRecord> {
        let len = self.len();
        let line = self
            .lines
            .get(index)
            .ok_or(DataError::IndexOutOfRange { index, len })?;
        let record = parse_line(line)
            .with_context(|| format!("failed to parse annotation line {}: '{}'", index, line))?;
        Ok(record)
    }

    /// Load and preprocess the sample at `index`.
    pub fn get(&self, index: usize) -> Result<Sample> {
        let _span = trace_span!("get_sample", index).entered();

        let AnnotationRecord {
            image_path,
            rect,
            landmarks,
        } = self.record(index)?;
        let image_path = self.resolve_image_path(&image_path);
        let image = self.codec.decode(&image_path)?;
        debug!(
            "loaded image '{}' with size {:?}",
            image_path.display(),
            image.dimensions()
        );

        let raw = RawSample {
            image,
            rect,
            landmarks,
        };
        let sample = self.transform.process(raw).with_context(|| {
            format!(
                "failed to preprocess sample {} from image '{}'",
                index,
                image_path.display()
            )
        })?;

        Ok(sample)
    }

    /// Iterate over all samples in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<Sample>> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }

    fn resolve_image_path(&self, path: &Path) -> PathBuf {
        match &self.image_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codec::MemoryCodec,
        config::PreprocessorConfig,
        processor::{Normalize, ProcessorExt, ToTensor},
    };

    fn dataset(lines: &[&str], codec: MemoryCodec) -> FaceLandmarksDataset {
        let codec: Arc<dyn ImageCodec> = Arc::new(codec);
        let transform = Normalize::new(&PreprocessorConfig::default(), codec.clone())
            .unwrap()
            .then(ToTensor);
        FaceLandmarksDataset::new(
            lines.iter().map(|line| line.to_string()).collect(),
            Phase::train(),
            codec,
            Arc::new(transform),
        )
    }

    #[test]
    fn get_sample() {
        let mut codec = MemoryCodec::default();
        codec.insert(
            "img1.jpg",
            GrayImage::from_fn(200, 200, |x, _| Luma([x as u8])),
        );
        let dataset = dataset(&["img1.jpg 10 10 110 110 50 50 70 50 60 90"], codec);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.input_channels(), 1);

        let sample = dataset.get(0).unwrap();
        assert_eq!(sample.image.dim(), (1, 112, 112));
        assert_eq!(sample.num_points(), 3);
        assert_eq!(
            sample.landmarks.to_vec(),
            vec![45.0, 45.0, 67.0, 45.0, 56.0, 90.0]
        );
        assert_eq!(dataset.nth(0).unwrap(), sample);
    }

    #[test]
    fn get_out_of_range() {
        let dataset = dataset(&["a.jpg 0 0 4 4"], MemoryCodec::default());
        for index in [1, 100] {
            let err = dataset.get(index).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<DataError>(),
                Some(DataError::IndexOutOfRange { len: 1, .. })
            ));
        }
    }

    #[test]
    fn get_malformed_line() {
        let mut codec = MemoryCodec::default();
        codec.insert("a.jpg", GrayImage::new(8, 8));
        let dataset = dataset(&["a.jpg 0 0 4", "a.jpg 0 0 4 4 x 1"], codec);

        let err = dataset.get(0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::MalformedLine { .. })
        ));
        let err = dataset.get(1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn get_missing_image() {
        let dataset = dataset(&["missing.jpg 0 0 4 4"], MemoryCodec::default());
        assert!(dataset.get(0).is_err());
    }

    #[test]
    fn resolve_with_image_root() {
        let mut codec = MemoryCodec::default();
        codec.insert("faces/a.jpg", GrayImage::from_pixel(16, 16, Luma([3])));
        let dataset = dataset(&["a.jpg 0 0 8 8 4 4"], codec)
            .with_image_root(Some(PathBuf::from("faces")));

        let sample = dataset.get(0).unwrap();
        assert_eq!(sample.landmarks.to_vec(), vec![56.0, 56.0]);
        assert_eq!(dataset.iter().filter(|result| result.is_ok()).count(), 1);
    }
}
