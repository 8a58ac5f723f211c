//! Common imports from external crates.

pub use anyhow::{ensure, format_err, Context, Error, Result};
pub use bbox::{prelude::*, Transform, HW, TLBR};
pub use futures::stream::{self, StreamExt};
pub use image::{imageops::FilterType, GrayImage, Luma};
pub use itertools::Itertools;
pub use landmark::{Landmarks, RoundingMode};
pub use ndarray::{Array1, Array2, Array3, ArrayView2, Axis};
pub use noisy_float::prelude::*;
pub use par_stream::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashMap,
    fmt::Debug,
    fs,
    io,
    iter,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};
pub use tracing::{debug, info, trace_span, warn};
