use crate::adapters::outbound::filesystem::FixtureFileSource;
use crate::adapters::outbound::network::{HttpClientSettings, HttpIndexClient, RemoteIndexSource};
use crate::dependency_lookup::domain::{DependencyList, FallbackLookupTable, RequestParameters};
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Which backend a lookup runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceType {
    /// Local fixture file (test mode)
    Fixture(PathBuf),
    /// Remote simple index at the given base URL
    RemoteIndex(String),
}

impl SourceType {
    /// Test mode selects the fixture backend, otherwise the remote index
    pub fn from_parameters(params: &RequestParameters) -> Self {
        if params.test_mode() {
            SourceType::Fixture(PathBuf::from(params.repository_location()))
        } else {
            SourceType::RemoteIndex(params.repository_location().to_string())
        }
    }
}

/// The backend chosen for this run
pub enum SelectedSource<R> {
    Fixture(FixtureFileSource<R>),
    RemoteIndex(RemoteIndexSource<HttpIndexClient, R>),
}

#[async_trait]
impl<R: ProgressReporter> DependencySource for SelectedSource<R> {
    async fn fetch_direct(&self, package_name: &str, version: Option<&str>) -> DependencyList {
        match self {
            SelectedSource::Fixture(source) => source.fetch_direct(package_name, version).await,
            SelectedSource::RemoteIndex(source) => {
                source.fetch_direct(package_name, version).await
            }
        }
    }
}

/// Factory for creating dependency sources
///
/// The backend is chosen once, here, and never changes during a run. The
/// HTTP client is only built when the remote backend is selected.
pub struct SourceFactory;

impl SourceFactory {
    /// Creates the source for the specified type
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn create<R: ProgressReporter>(
        source_type: SourceType,
        http_settings: &HttpClientSettings,
        table: FallbackLookupTable,
        reporter: R,
    ) -> Result<SelectedSource<R>> {
        Ok(match source_type {
            SourceType::Fixture(path) => {
                SelectedSource::Fixture(FixtureFileSource::new(path, reporter))
            }
            SourceType::RemoteIndex(url) => SelectedSource::RemoteIndex(RemoteIndexSource::new(
                HttpIndexClient::with_settings(http_settings)?,
                url,
                table,
                reporter,
            )),
        })
    }
}
