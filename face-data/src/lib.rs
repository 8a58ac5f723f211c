//! Dataset loading and preprocessing for facial landmark regression.
//!
//! An annotation file lists one face per line: an image path, the face rectangle and the
//! landmark coordinates. The dataset crops each face, resizes the crop to a square,
//! standardizes the pixels and rescales the landmarks to the crop.

pub mod codec;
pub mod common;
pub mod config;
pub mod data;
pub mod error;
pub mod preview;
pub mod processor;
pub mod scan;

#[cfg(feature = "tch")]
mod with_tch;
#[cfg(feature = "tch")]
pub use with_tch::*;

pub use data::{
    load_data, load_train_test_sets, FaceLandmarksDataset, GenericDataset, Phase,
    RandomAccessDataset, Sample,
};
pub use error::DataError;
