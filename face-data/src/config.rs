//! Dataset and preprocessing configuration format.

use crate::common::*;

pub use dataset::*;
pub use preprocessor::*;

/// The main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub preprocessor: PreprocessorConfig,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise use default values.
    pub fn open_or_default<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.is_file() {
            Self::open(path)
        } else {
            info!(
                "config file '{}' not found, use default values",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

mod dataset {
    use super::*;

    /// Dataset options.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct DatasetConfig {
        /// The directory containing `<phase>.txt` annotation files.
        #[serde(default = "default_dataset_dir")]
        pub dir: PathBuf,
        /// If set, relative image paths in annotation files are joined to this directory.
        #[serde(default)]
        pub image_root: Option<PathBuf>,
    }

    impl Default for DatasetConfig {
        fn default() -> Self {
            Self {
                dir: default_dataset_dir(),
                image_root: None,
            }
        }
    }

    fn default_dataset_dir() -> PathBuf {
        PathBuf::from(".")
    }
}

mod preprocessor {
    use super::*;

    /// Data preprocessing options.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct PreprocessorConfig {
        /// The side length of the square output image.
        #[serde(default = "default_image_size")]
        pub image_size: NonZeroUsize,
        /// Added to the standard deviation in channel normalization.
        #[serde(default = "default_epsilon")]
        pub epsilon: R64,
        #[serde(default)]
        pub rounding: RoundingMode,
        #[serde(default)]
        pub landmark_frame: LandmarkFrame,
        #[serde(default)]
        pub filter: ResizeFilter,
    }

    impl Default for PreprocessorConfig {
        fn default() -> Self {
            Self {
                image_size: default_image_size(),
                epsilon: default_epsilon(),
                rounding: RoundingMode::default(),
                landmark_frame: LandmarkFrame::default(),
                filter: ResizeFilter::default(),
            }
        }
    }

    /// The coordinate frame of landmarks in annotation files.
    ///
    /// `Image` expects landmarks in the same pixel coordinates as the face rectangle, so
    /// `(x0, y0)` maps to `(0, 0)` in the resized crop. `Crop` expects landmarks already
    /// measured from the top-left corner of the face rectangle, and they are only scaled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum LandmarkFrame {
        /// Whole-image pixel coordinates. The origin of the face rectangle is subtracted
        /// before scaling.
        Image,
        /// Offsets from the top-left corner of the face rectangle. Scaled without translation.
        Crop,
    }

    impl Default for LandmarkFrame {
        fn default() -> Self {
            Self::Image
        }
    }

    /// The interpolation filter used to resize face crops.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ResizeFilter {
        Nearest,
        /// Bilinear interpolation.
        Triangle,
        CatmullRom,
        Gaussian,
        Lanczos3,
    }

    impl Default for ResizeFilter {
        fn default() -> Self {
            Self::Triangle
        }
    }

    impl From<ResizeFilter> for FilterType {
        fn from(from: ResizeFilter) -> Self {
            match from {
                ResizeFilter::Nearest => FilterType::Nearest,
                ResizeFilter::Triangle => FilterType::Triangle,
                ResizeFilter::CatmullRom => FilterType::CatmullRom,
                ResizeFilter::Gaussian => FilterType::Gaussian,
                ResizeFilter::Lanczos3 => FilterType::Lanczos3,
            }
        }
    }

    fn default_image_size() -> NonZeroUsize {
        NonZeroUsize::new(112).unwrap()
    }

    fn default_epsilon() -> R64 {
        r64(1e-7)
    }
}
