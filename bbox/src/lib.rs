//! Rectangle, size and scaling transform types for image cropping.

mod common;

pub use transform::*;
mod transform;

pub use rect::*;
pub mod rect;

pub use tlbr::*;
pub mod tlbr;

pub use hw::*;
pub mod hw;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
