use super::*;
use crate::{
    codec::{ImageCodec, ImageCrateCodec},
    common::*,
    config::{Config, PreprocessorConfig},
    error::DataError,
    processor::{DefaultPipeline, Normalize, ProcessorExt, ToTensor},
};
use std::fmt;

/// The dataset split. The annotation file is named `<phase>.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phase {
    name: String,
}

impl Phase {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        ensure!(!name.is_empty(), "phase name must not be empty");
        ensure!(
            !name.contains(std::path::is_separator),
            "phase name '{}' must not contain path separators",
            name
        );
        Ok(Self { name })
    }

    pub fn train() -> Self {
        Self {
            name: "train".into(),
        }
    }

    pub fn test() -> Self {
        Self {
            name: "test".into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_train(&self) -> bool {
        matches!(self.name.as_str(), "train" | "Train")
    }

    pub fn annotation_file_name(&self) -> String {
        format!("{}.txt", self.name)
    }
}

impl FromStr for Phase {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::new(name)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Build the preprocessing pipeline.
///
/// Training and testing share the same pipeline.
pub fn build_pipeline(
    config: &PreprocessorConfig,
    codec: Arc<dyn ImageCodec>,
) -> Result<DefaultPipeline> {
    Ok(Normalize::new(config, codec)?.then(ToTensor))
}

/// Read the non-empty lines of an annotation file.
pub fn read_annotation_lines(path: &Path) -> Result<Vec<String>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(DataError::AnnotationFileNotFound {
                path: path.to_owned(),
            }
            .into());
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to read annotation file '{}'", path.display())
            });
        }
    };

    let lines = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_owned())
        .collect();
    Ok(lines)
}

/// Load the dataset of a phase using the `image` crate codec.
pub fn load_data(phase: &Phase, config: &Config) -> Result<FaceLandmarksDataset> {
    let codec = ImageCrateCodec::new(config.preprocessor.filter.into());
    load_data_with_codec(phase, config, Arc::new(codec))
}

/// Load the dataset of a phase with a custom image codec.
pub fn load_data_with_codec(
    phase: &Phase,
    config: &Config,
    codec: Arc<dyn ImageCodec>,
) -> Result<FaceLandmarksDataset> {
    let Config {
        dataset,
        preprocessor,
    } = config;

    let annotation_file = dataset.dir.join(phase.annotation_file_name());
    let lines = read_annotation_lines(&annotation_file)?;
    info!(
        "loaded {} records for phase '{}' from '{}'",
        lines.len(),
        phase,
        annotation_file.display()
    );

    let transform = build_pipeline(preprocessor, codec.clone())?;
    let dataset = FaceLandmarksDataset::new(lines, phase.clone(), codec, Arc::new(transform))
        .with_image_root(dataset.image_root.clone());

    Ok(dataset)
}

/// Load the training and testing datasets.
pub fn load_train_test_sets(
    config: &Config,
) -> Result<(FaceLandmarksDataset, FaceLandmarksDataset)> {
    let train_set = load_data(&Phase::train(), config)?;
    let test_set = load_data(&Phase::test(), config)?;
    Ok((train_set, test_set))
}
