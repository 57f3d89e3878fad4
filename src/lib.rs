pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, Settings};

pub use crate::core::{
    analyzer::Analyzer,
    classifier::{analyze_packages, analyze_reader, classify_line, PackageCounter},
};
pub use domain::model::{LineClass, PackageReport};
pub use utils::error::{AnalyzeError, Result};
