pub mod analyzer;
pub mod classifier;

pub use crate::domain::model::{LineClass, PackageReport};
pub use crate::domain::ports::Storage;
