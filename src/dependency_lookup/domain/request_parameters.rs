/// Default value for the reserved graph image path
pub const DEFAULT_OUTPUT_PATH: &str = "graph.png";

/// Parsed command-line input for one lookup
///
/// Built once per invocation and read-only afterwards. `output_path`,
/// `ascii_tree` and `filter` are reserved for rendering features that do
/// not exist yet; they are echoed back to the user but drive no behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    package_name: String,
    repository_location: String,
    version: Option<String>,
    test_mode: bool,
    output_path: String,
    ascii_tree: bool,
    filter: Option<String>,
}

impl RequestParameters {
    pub fn builder() -> RequestParametersBuilder {
        RequestParametersBuilder::default()
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn repository_location(&self) -> &str {
        &self.repository_location
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    pub fn ascii_tree(&self) -> bool {
        self.ascii_tree
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

/// Builder for [`RequestParameters`]
///
/// Building never fails; well-formedness is checked separately by
/// `RequestValidator` so that every problem can be reported at once.
#[derive(Debug, Clone, Default)]
pub struct RequestParametersBuilder {
    package_name: String,
    repository_location: String,
    version: Option<String>,
    test_mode: bool,
    output_path: Option<String>,
    ascii_tree: bool,
    filter: Option<String>,
}

impl RequestParametersBuilder {
    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    pub fn repository_location(mut self, repository_location: impl Into<String>) -> Self {
        self.repository_location = repository_location.into();
        self
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn ascii_tree(mut self, ascii_tree: bool) -> Self {
        self.ascii_tree = ascii_tree;
        self
    }

    pub fn filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    /// Empty `version` and `filter` values count as not specified.
    pub fn build(self) -> RequestParameters {
        RequestParameters {
            package_name: self.package_name,
            repository_location: self.repository_location,
            version: self.version.filter(|v| !v.is_empty()),
            test_mode: self.test_mode,
            output_path: self
                .output_path
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            ascii_tree: self.ascii_tree,
            filter: self.filter.filter(|f| !f.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let params = RequestParameters::builder()
            .package_name("numpy")
            .repository_location("https://pypi.org/simple")
            .build();

        assert_eq!(params.package_name(), "numpy");
        assert_eq!(params.repository_location(), "https://pypi.org/simple");
        assert_eq!(params.version(), None);
        assert!(!params.test_mode());
        assert_eq!(params.output_path(), "graph.png");
        assert!(!params.ascii_tree());
        assert_eq!(params.filter(), None);
    }

    #[test]
    fn test_builder_all_fields() {
        let params = RequestParameters::builder()
            .package_name("A")
            .repository_location("repo.txt")
            .version(Some("1.0".to_string()))
            .test_mode(true)
            .output_path("out.png")
            .ascii_tree(true)
            .filter(Some("B".to_string()))
            .build();

        assert_eq!(params.version(), Some("1.0"));
        assert!(params.test_mode());
        assert_eq!(params.output_path(), "out.png");
        assert!(params.ascii_tree());
        assert_eq!(params.filter(), Some("B"));
    }

    #[test]
    fn test_empty_optional_strings_are_not_specified() {
        let params = RequestParameters::builder()
            .package_name("numpy")
            .repository_location("https://pypi.org/simple")
            .version(Some(String::new()))
            .filter(Some(String::new()))
            .build();

        assert_eq!(params.version(), None);
        assert_eq!(params.filter(), None);
    }
}
