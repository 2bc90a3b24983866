use super::DependencyList;
use std::collections::BTreeMap;

/// Key used for the entry returned when no exact version matches
pub const LATEST_KEY: &str = "latest";

/// Answer for packages the table knows nothing usable about
pub const GENERIC_DEFAULT: [&str; 2] = ["setuptools", "wheel"];

/// Static dependency answers used by the remote index backend
///
/// Maps package name to version key (or [`LATEST_KEY`]) to the package's
/// direct dependencies. Keys are case-sensitive. The table is built once and
/// never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct FallbackLookupTable {
    entries: BTreeMap<String, BTreeMap<String, DependencyList>>,
}

impl FallbackLookupTable {
    /// Creates an empty table. Every lookup against it yields the generic default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table bundled with the binary
    pub fn builtin() -> Self {
        Self::new()
            .with_entry("numpy", "1.23.0", ["python>=3.8", "setuptools", "wheel"])
            .with_entry("numpy", LATEST_KEY, ["python>=3.8", "setuptools"])
            .with_entry(
                "requests",
                "2.31.0",
                ["charset-normalizer", "idna", "urllib3", "certifi"],
            )
            .with_entry(
                "requests",
                LATEST_KEY,
                ["charset-normalizer", "idna", "urllib3", "certifi"],
            )
            .with_entry(
                "pandas",
                LATEST_KEY,
                ["numpy", "python-dateutil", "pytz", "tzdata"],
            )
            .with_entry(
                "flask",
                LATEST_KEY,
                ["Werkzeug", "Jinja2", "itsdangerous", "click", "blinker"],
            )
            .with_entry("django", "4.2.0", ["asgiref", "sqlparse"])
    }

    /// Adds (or replaces) one entry while building a table
    pub fn with_entry<I, S>(mut self, package: &str, version_key: &str, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(package.to_string())
            .or_default()
            .insert(version_key.to_string(), DependencyList::new(dependencies));
        self
    }

    /// Resolves the dependency answer for a package
    ///
    /// Exact version key first, then [`LATEST_KEY`], then [`GENERIC_DEFAULT`].
    /// A package present in the table without a usable key also falls
    /// through to the generic default.
    pub fn resolve(&self, package: &str, version: Option<&str>) -> DependencyList {
        let Some(versions) = self.entries.get(package) else {
            return Self::generic_default();
        };

        version
            .and_then(|v| versions.get(v))
            .or_else(|| versions.get(LATEST_KEY))
            .cloned()
            .unwrap_or_else(Self::generic_default)
    }

    pub fn generic_default() -> DependencyList {
        DependencyList::new(GENERIC_DEFAULT)
    }

    pub fn contains_package(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }
}
