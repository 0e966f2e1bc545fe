//! Test helpers for composing recommend CLI inputs.

use camino::{Utf8Path, Utf8PathBuf};
use offpeak_core::ExplanationEnricher;
use offpeak_core::test_support::StubEnricher;
use offpeak_data::StaticCatalog;
use tempfile::TempDir;

use crate::CliError;
use crate::recommend::{RecommendConfig, RecommendServicesBuilder};

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary directory exposed as a UTF-8 path.
pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Builder serving the bundled catalog and a canned enricher.
pub(super) struct StubServicesBuilder {
    pub(super) enricher: StubEnricher,
}

impl StubServicesBuilder {
    pub(super) const fn without_enrichment() -> Self {
        Self {
            enricher: StubEnricher::disabled(),
        }
    }
}

impl RecommendServicesBuilder for StubServicesBuilder {
    fn catalog(&self, config: &RecommendConfig) -> Result<StaticCatalog, CliError> {
        let catalog = match &config.catalog {
            Some(path) => StaticCatalog::from_path(path)?,
            None => StaticCatalog::builtin()?,
        };
        Ok(catalog)
    }

    fn enricher(
        &self,
        _config: &RecommendConfig,
    ) -> Result<Box<dyn ExplanationEnricher>, CliError> {
        Ok(Box::new(self.enricher.clone()))
    }
}
