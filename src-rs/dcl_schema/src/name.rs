//! Fully-qualified names

use std::fmt;

/// A fully-qualified name such as `org.example.Project`
///
/// The package name is empty for names in the root package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FqName {
    package_name: String,
    simple_name: String,
}

impl FqName {
    /// Creates a name from a package and a simple name
    #[must_use]
    pub fn new(package_name: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            simple_name: simple_name.into(),
        }
    }

    /// Splits a dotted name at its last dot
    ///
    /// ```
    /// use dcl_schema::FqName;
    ///
    /// let name = FqName::parse("org.example.Project");
    /// assert_eq!(name.package_name(), "org.example");
    /// assert_eq!(name.simple_name(), "Project");
    /// assert_eq!(FqName::parse("Project").package_name(), "");
    /// ```
    #[must_use]
    pub fn parse(qualified_name: &str) -> Self {
        match qualified_name.rsplit_once('.') {
            Some((package_name, simple_name)) => Self::new(package_name, simple_name),
            None => Self::new("", qualified_name),
        }
    }

    /// Returns the package, empty for the root package
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns the last segment of the name
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Returns the dotted name
    #[must_use]
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package_name.is_empty() {
            write!(f, "{}", self.simple_name)
        } else {
            write!(f, "{}.{}", self.package_name, self.simple_name)
        }
    }
}
