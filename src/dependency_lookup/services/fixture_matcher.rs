use crate::dependency_lookup::domain::DependencyList;
use crate::shared::Result;
use regex::Regex;

/// Finds a package's dependency declaration in fixture text
///
/// A declaration is the package name, then anything on the same line, then
/// `depends on:` followed by comma-separated uppercase tokens:
///
/// ```text
/// Package A (test fixture) depends on: B, C, D
/// ```
///
/// The name is matched as plain text wherever it occurs, so `A` also matches
/// inside `XA`. A marker on a later line never belongs to the name. Only the
/// first declaration in the text counts.
pub struct FixtureMatcher {
    pattern: Regex,
}

impl FixtureMatcher {
    pub fn new(package_name: &str) -> Result<Self> {
        let pattern = format!(
            r"{}[^\r\n]*?depends on:[ \t]*([A-Z]+(?:[ \t]*,[ \t]*[A-Z]+)*)",
            regex::escape(package_name)
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Returns the tokens of the first declaration, or `None` if there is none.
    pub fn find(&self, text: &str) -> Option<DependencyList> {
        let captures = self.pattern.captures(text)?;
        let tokens = captures.get(1)?.as_str();
        Some(DependencyList::new(tokens.split(',').map(str::trim)))
    }
}
