use crate::dependency_lookup::domain::DependencyList;

/// LookupResponse - result of one dependency lookup
///
/// Carries what the presenter needs to render the result. An empty
/// `dependencies` list may mean the package has no dependencies, is unknown,
/// or could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub package_name: String,
    pub version: Option<String>,
    pub dependencies: DependencyList,
}

impl LookupResponse {
    pub fn new(
        package_name: String,
        version: Option<String>,
        dependencies: DependencyList,
    ) -> Self {
        Self {
            package_name,
            version,
            dependencies,
        }
    }
}
