use crate::dependency_lookup::domain::DependencyList;
use crate::dependency_lookup::services::FixtureMatcher;
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::shared::error::DepvizError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// FixtureFileSource adapter resolving dependencies from a local text file
///
/// The fixture stands in for a package index during test-mode runs. It holds
/// lines such as `A depends on: B, C`; see [`FixtureMatcher`] for the exact
/// format. Fixtures carry no version information, so the requested version
/// does not affect the result.
pub struct FixtureFileSource<R> {
    path: PathBuf,
    reporter: R,
}

impl<R: ProgressReporter> FixtureFileSource<R> {
    pub fn new(path: PathBuf, reporter: R) -> Self {
        Self { path, reporter }
    }

    /// Reads the whole fixture; the file handle is closed before this returns
    fn read_fixture(&self) -> Result<String> {
        validate_regular_file(&self.path, "fixture file")
            .and_then(|_| fs::read_to_string(&self.path).map_err(Into::into))
            .map_err(|e| {
                DepvizError::FixtureReadError {
                    path: self.path.clone(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

#[async_trait]
impl<R: ProgressReporter> DependencySource for FixtureFileSource<R> {
    async fn fetch_direct(&self, package_name: &str, _version: Option<&str>) -> DependencyList {
        self.reporter.report(&format!(
            "📖 Reading fixture repository: {}",
            self.path.display()
        ));

        let content = match self.read_fixture() {
            Ok(content) => content,
            Err(e) => {
                self.reporter.report_error(&format!("❌ {}", e));
                return DependencyList::empty();
            }
        };

        let matcher = match FixtureMatcher::new(package_name) {
            Ok(matcher) => matcher,
            Err(e) => {
                self.reporter.report_error(&format!(
                    "❌ Cannot search fixture for '{}': {}",
                    package_name, e
                ));
                return DependencyList::empty();
            }
        };

        match matcher.find(&content) {
            Some(dependencies) => {
                self.reporter.report_completion(&format!(
                    "✅ Found {} direct dependency(ies) of '{}' in fixture",
                    dependencies.len(),
                    package_name
                ));
                dependencies
            }
            None => {
                self.reporter.report_error(&format!(
                    "⚠️  Package '{}' not found in fixture repository {}",
                    package_name,
                    self.path.display()
                ));
                DependencyList::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::console::StderrProgressReporter;
    use tempfile::TempDir;

    fn fixture(content: &str) -> (TempDir, FixtureFileSource<StderrProgressReporter>) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repository.txt");
        fs::write(&path, content).unwrap();
        let source = FixtureFileSource::new(path, StderrProgressReporter::new());
        (temp_dir, source)
    }

    #[tokio::test]
    async fn test_fetch_direct_found() {
        let (_dir, source) = fixture("A (root package) depends on: B, C, D\n");
        let deps = source.fetch_direct("A", None).await;
        assert_eq!(deps.as_slice(), ["B", "C", "D"]);
    }

    #[tokio::test]
    async fn test_fetch_direct_ignores_version() {
        let (_dir, source) = fixture("A depends on: B\n");
        let deps = source.fetch_direct("A", Some("9.9")).await;
        assert_eq!(deps.as_slice(), ["B"]);
    }

    #[tokio::test]
    async fn test_fetch_direct_not_found() {
        let (_dir, source) = fixture("A depends on: B, C\n");
        let deps = source.fetch_direct("Z", None).await;
        assert!(deps.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_direct_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = FixtureFileSource::new(
            temp_dir.path().join("missing.txt"),
            StderrProgressReporter::new(),
        );
        let deps = source.fetch_direct("A", None).await;
        assert!(deps.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_direct_directory_instead_of_file() {
        let temp_dir = TempDir::new().unwrap();
        let source =
            FixtureFileSource::new(temp_dir.path().to_path_buf(), StderrProgressReporter::new());
        let deps = source.fetch_direct("A", None).await;
        assert!(deps.is_empty());
    }

    #[test]
    fn test_read_fixture_error_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");
        let source = FixtureFileSource::new(path.clone(), StderrProgressReporter::new());

        let err = source.read_fixture().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to read fixture file"));
        assert!(message.contains(&path.display().to_string()));
    }
}
