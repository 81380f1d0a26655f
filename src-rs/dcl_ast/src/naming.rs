//! Dotted names such as `org.example.Foo`

use std::fmt;

/// A dotted sequence of simple names
///
/// Access chains are how a script spells a fully-qualified name, either in an
/// `import` or as a qualified reference such as `org.example.Foo(1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessChain {
    name_parts: Vec<String>,
}

impl AccessChain {
    /// Creates an access chain from its name parts
    ///
    /// # Panics
    ///
    /// Panics if `name_parts` is empty.
    #[must_use]
    pub fn new(name_parts: Vec<String>) -> Self {
        assert!(!name_parts.is_empty(), "an access chain needs at least one name");
        Self { name_parts }
    }

    #[must_use]
    pub fn name_parts(&self) -> &[String] {
        &self.name_parts
    }

    /// Returns the last part of the chain
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name_parts
            .last()
            .map_or("", String::as_str)
    }

    /// Returns every part but the last, joined with dots
    #[must_use]
    pub fn qualifier(&self) -> String {
        let len = self.name_parts.len();
        self.name_parts[..len - 1].join(".")
    }

    /// Returns a new chain with `name` appended
    #[must_use]
    pub fn with_part(mut self, name: &str) -> Self {
        self.name_parts.push(name.to_string());
        self
    }
}

impl fmt::Display for AccessChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_parts.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(parts: &[&str]) -> AccessChain {
        AccessChain::new(parts.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn qualifier_and_simple_name() {
        let chain = chain(&["org", "example", "Foo"]);
        assert_eq!(chain.qualifier(), "org.example");
        assert_eq!(chain.simple_name(), "Foo");
        assert_eq!(chain.to_string(), "org.example.Foo");
    }

    #[test]
    fn single_name_has_empty_qualifier() {
        let chain = chain(&["Foo"]);
        assert_eq!(chain.qualifier(), "");
        assert_eq!(chain.simple_name(), "Foo");
    }
}
