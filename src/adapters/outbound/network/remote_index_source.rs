use crate::dependency_lookup::domain::{DependencyList, FallbackLookupTable};
use crate::dependency_lookup::services::HtmlLinkScanner;
use crate::ports::outbound::{DependencySource, IndexPageFetcher, ProgressReporter};
use crate::shared::security::validate_url_component;
use crate::shared::Result;
use async_trait::async_trait;

/// RemoteIndexSource adapter resolving dependencies through a package index
///
/// The package's simple-index page (`<repository>/<package>/`) is fetched
/// and scanned to confirm the index is reachable and serves HTML. The links
/// on the page are not used: the answer itself comes from the
/// [`FallbackLookupTable`] given at construction.
///
/// When the page cannot be fetched the result is an empty list and the
/// failure is only visible as a diagnostic.
pub struct RemoteIndexSource<F, R> {
    fetcher: F,
    repository_url: String,
    table: FallbackLookupTable,
    reporter: R,
}

impl<F, R> RemoteIndexSource<F, R>
where
    F: IndexPageFetcher,
    R: ProgressReporter,
{
    pub fn new(
        fetcher: F,
        repository_url: impl Into<String>,
        table: FallbackLookupTable,
        reporter: R,
    ) -> Self {
        Self {
            fetcher,
            repository_url: repository_url.into(),
            table,
            reporter,
        }
    }

    /// Builds `<repository>/<package>/` without doubling a trailing slash
    pub fn page_url(&self, package_name: &str) -> Result<String> {
        validate_url_component(package_name, "Package name")?;

        Ok(format!(
            "{}/{}/",
            self.repository_url.trim_end_matches('/'),
            urlencoding::encode(package_name)
        ))
    }

    /// Fetches the package page and returns how many links it lists
    async fn check_index_page(&self, package_name: &str) -> Result<usize> {
        let url = self.page_url(package_name)?;
        self.reporter
            .report_waiting(&format!("🌐 Fetching index page: {}", url));

        let body = self.fetcher.fetch_page(&url).await?;
        Ok(HtmlLinkScanner::new(&body).links().count())
    }
}

#[async_trait]
impl<F, R> DependencySource for RemoteIndexSource<F, R>
where
    F: IndexPageFetcher,
    R: ProgressReporter,
{
    async fn fetch_direct(&self, package_name: &str, version: Option<&str>) -> DependencyList {
        match self.check_index_page(package_name).await {
            Ok(link_count) => self.reporter.report_completion(&format!(
                "✅ Index page reachable ({} link(s) listed)",
                link_count
            )),
            Err(e) => {
                self.reporter.report_error(&format!(
                    "⚠️  Lookup of '{}' failed: {}",
                    package_name, e
                ));
                return DependencyList::empty();
            }
        }

        if !self.table.contains_package(package_name) {
            self.reporter.report(&format!(
                "ℹ️  '{}' is not in the bundled lookup table, using the generic default",
                package_name
            ));
        }

        self.table.resolve(package_name, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::console::StderrProgressReporter;
    use std::sync::Mutex;

    /// Serves a fixed page and records requested URLs
    struct StaticPageFetcher {
        page: Option<String>,
        requested: Mutex<Vec<String>>,
    }

    impl StaticPageFetcher {
        fn serving(page: &str) -> Self {
            Self {
                page: Some(page.to_string()),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                page: None,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IndexPageFetcher for StaticPageFetcher {
        async fn fetch_page(&self, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.page {
                Some(page) => Ok(page.clone()),
                None => anyhow::bail!("connection refused"),
            }
        }
    }

    const PAGE: &str = r#"<html><body><a href="pkg-1.0.tar.gz">pkg-1.0.tar.gz</a></body></html>"#;

    fn source(
        fetcher: StaticPageFetcher,
    ) -> RemoteIndexSource<StaticPageFetcher, StderrProgressReporter> {
        RemoteIndexSource::new(
            fetcher,
            "https://pypi.org/simple",
            FallbackLookupTable::builtin(),
            StderrProgressReporter::new(),
        )
    }

    #[tokio::test]
    async fn test_exact_version() {
        let source = source(StaticPageFetcher::serving(PAGE));
        let deps = source.fetch_direct("numpy", Some("1.23.0")).await;
        assert_eq!(deps.as_slice(), ["python>=3.8", "setuptools", "wheel"]);
    }

    #[tokio::test]
    async fn test_latest_when_no_version() {
        let source = source(StaticPageFetcher::serving(PAGE));
        let deps = source.fetch_direct("numpy", None).await;
        assert_eq!(deps.as_slice(), ["python>=3.8", "setuptools"]);
    }

    #[tokio::test]
    async fn test_unknown_package_generic_default() {
        let source = source(StaticPageFetcher::serving(PAGE));
        let deps = source.fetch_direct("unknown-pkg", None).await;
        assert_eq!(deps.as_slice(), ["setuptools", "wheel"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_list() {
        let source = source(StaticPageFetcher::failing());
        let deps = source.fetch_direct("numpy", Some("1.23.0")).await;
        assert!(deps.is_empty());
    }

    #[tokio::test]
    async fn test_requests_simple_index_url() {
        let source = source(StaticPageFetcher::serving(PAGE));
        source.fetch_direct("numpy", None).await;
        assert_eq!(
            *source.fetcher.requested.lock().unwrap(),
            vec!["https://pypi.org/simple/numpy/".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unsafe_package_name_is_not_requested() {
        let source = source(StaticPageFetcher::serving(PAGE));
        let deps = source.fetch_direct("../admin", None).await;
        assert!(deps.is_empty());
        assert!(source.fetcher.requested.lock().unwrap().is_empty());
    }

    #[test]
    fn test_page_url_trailing_slash() {
        let source = RemoteIndexSource::new(
            StaticPageFetcher::serving(PAGE),
            "https://pypi.org/simple/",
            FallbackLookupTable::new(),
            StderrProgressReporter::new(),
        );
        assert_eq!(
            source.page_url("numpy").unwrap(),
            "https://pypi.org/simple/numpy/"
        );
    }

    #[test]
    fn test_page_url_encodes_name() {
        let source = source(StaticPageFetcher::serving(PAGE));
        assert_eq!(
            source.page_url("my pkg").unwrap(),
            "https://pypi.org/simple/my%20pkg/"
        );
    }
}
