/// Ordered list of direct dependency identifiers
///
/// Order reflects the source the list was read from and duplicates are kept.
/// Empty identifiers are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList(Vec<String>);

impl DependencyList {
    pub fn new<I, S>(dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            dependencies
                .into_iter()
                .map(Into::into)
                .filter(|dep: &String| !dep.is_empty())
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DependencyList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order_and_duplicates() {
        let list = DependencyList::new(["B", "C", "B"]);
        assert_eq!(list.as_slice(), ["B", "C", "B"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_drops_empty_entries() {
        let list = DependencyList::new(["", "wheel", ""]);
        assert_eq!(list.as_slice(), ["wheel"]);
    }

    #[test]
    fn test_empty() {
        let list = DependencyList::empty();
        assert!(list.is_empty());
        assert_eq!(list, DependencyList::default());
    }
}
