use crate::dependency_lookup::domain::DependencyList;
use async_trait::async_trait;

/// DependencySource port for resolving a package's direct dependencies
///
/// Implementations never fail. A package that cannot be found and a source
/// that cannot be read both produce an empty list; the difference is only
/// visible in the diagnostics the implementation reports.
#[async_trait]
pub trait DependencySource: Send + Sync {
    /// Fetches the direct (one level) dependencies of a package
    ///
    /// # Arguments
    /// * `package_name` - Name of the package
    /// * `version` - Optional version to look up
    async fn fetch_direct(&self, package_name: &str, version: Option<&str>) -> DependencyList;
}
