mod annotation;
mod dataset;
mod factory;
mod record;

pub use annotation::*;
pub use dataset::*;
pub use factory::*;
pub use record::*;
