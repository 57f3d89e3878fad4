use crate::core::classifier::analyze_reader;
use crate::core::{PackageReport, Storage};
use crate::utils::error::{AnalyzeError, Result};

/// Drives one open → scan → report run over a storage backend.
pub struct Analyzer<S: Storage> {
    storage: S,
}

impl<S: Storage> Analyzer<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn run(&self, path: &str) -> Result<PackageReport> {
        tracing::info!("🔍 Analyzing module declarations in {}", path);

        let reader = self
            .storage
            .open(path)
            .map_err(|e| AnalyzeError::file_access(path, e))?;
        tracing::debug!("Opened {}", path);

        let report = analyze_reader(reader).map_err(|e| AnalyzeError::file_access(path, e))?;

        tracing::debug!(
            exports = report.exports_count,
            exports_to = report.exports_to_count,
            opens = report.opens_count,
            opens_to = report.opens_to_count,
            "Category counts"
        );
        tracing::info!("✅ Found {} package lines", report.package_count);

        Ok(report)
    }
}
