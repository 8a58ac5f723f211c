//! Image decoding and resizing backends.

use crate::common::*;

/// The image decoding and resizing collaborator used by the dataset.
pub trait ImageCodec
where
    Self: Debug + Send + Sync,
{
    /// Decode the image file into 8-bit grayscale.
    fn decode(&self, path: &Path) -> Result<GrayImage>;

    /// Resize the image to exactly `width` × `height` pixels.
    fn resize(&self, image: &GrayImage, width: u32, height: u32) -> GrayImage;
}

/// The codec backed by the `image` crate.
#[derive(Debug, Clone, Copy)]
pub struct ImageCrateCodec {
    pub filter: FilterType,
}

impl ImageCrateCodec {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for ImageCrateCodec {
    fn default() -> Self {
        Self::new(FilterType::Triangle)
    }
}

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, path: &Path) -> Result<GrayImage> {
        let image = image::io::Reader::open(path)
            .with_context(|| format!("failed to open image file '{}'", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("failed to read image file '{}'", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode image file '{}'", path.display()))?;
        Ok(image.to_luma8())
    }

    fn resize(&self, image: &GrayImage, width: u32, height: u32) -> GrayImage {
        image::imageops::resize(image, width, height, self.filter)
    }
}

/// The codec that serves pre-decoded images keyed by path.
///
/// Resizing is delegated to [ImageCrateCodec].
#[derive(Debug, Clone, Default)]
pub struct MemoryCodec {
    images: HashMap<PathBuf, GrayImage>,
    resizer: ImageCrateCodec,
}

impl MemoryCodec {
    pub fn new(resizer: ImageCrateCodec) -> Self {
        Self {
            images: HashMap::new(),
            resizer,
        }
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, image: GrayImage) {
        self.images.insert(path.into(), image);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageCodec for MemoryCodec {
    fn decode(&self, path: &Path) -> Result<GrayImage> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| format_err!("image '{}' is not loaded in memory", path.display()))
    }

    fn resize(&self, image: &GrayImage, width: u32, height: u32) -> GrayImage {
        self.resizer.resize(image, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_codec_lookup() {
        let mut codec = MemoryCodec::default();
        codec.insert("face.png", GrayImage::from_pixel(4, 3, Luma([7])));
        assert_eq!(codec.len(), 1);

        let image = codec.decode(Path::new("face.png")).unwrap();
        assert_eq!(image.dimensions(), (4, 3));
        assert!(codec.decode(Path::new("missing.png")).is_err());
    }

    #[test]
    fn resize_exact_size() {
        let codec = ImageCrateCodec::default();
        let image = GrayImage::from_pixel(100, 50, Luma([200]));
        let resized = codec.resize(&image, 112, 112);
        assert_eq!(resized.dimensions(), (112, 112));
        assert!(resized.pixels().all(|&Luma([value])| value == 200));
    }

    #[test]
    fn decode_errors_name_the_file() {
        let dir = std::env::temp_dir().join(format!("face-data-codec-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let garbage = dir.join("garbage.png");
        fs::write(&garbage, b"not an image").unwrap();

        let codec = ImageCrateCodec::default();
        for path in [dir.as_path(), garbage.as_path()] {
            let err = codec.decode(path).unwrap_err();
            let message = format!("{:#}", err);
            assert!(
                message.contains(&path.display().to_string()),
                "unexpected error: {}",
                message
            );
        }

        fs::remove_dir_all(&dir).unwrap();
    }
}
